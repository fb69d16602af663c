use clap::ValueEnum;
use demogeo_core::model::LocationKey;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// how a location is phrased when sent to the geocoder.
#[derive(Debug, Default, Serialize, Deserialize, ValueEnum, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum QueryFormat {
    /// the cleaned locality name alone
    #[default]
    Locality,
    /// raw locality, district and area joined with spaces
    LocalityDistrictArea,
}

impl QueryFormat {
    pub fn query(&self, key: &LocationKey, locality_cleaned: &str) -> String {
        match self {
            QueryFormat::Locality => locality_cleaned.to_string(),
            QueryFormat::LocalityDistrictArea => key.full_query(),
        }
    }
}

impl Display for QueryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryFormat::Locality => write!(f, "locality"),
            QueryFormat::LocalityDistrictArea => write!(f, "locality_district_area"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query() {
        let key = LocationKey::new("Kh. Ma'in", "Hebron", "");
        assert_eq!(
            QueryFormat::Locality.query(&key, "Khirbet Ma'in"),
            "Khirbet Ma'in"
        );
        assert_eq!(
            QueryFormat::LocalityDistrictArea.query(&key, "Khirbet Ma'in"),
            "Kh. Ma'in Hebron"
        );
    }

    #[test]
    fn test_cli_and_config_spellings_agree() {
        for format in QueryFormat::value_variants() {
            let name = format.to_string();
            assert_eq!(QueryFormat::from_str(&name, false), Ok(*format));
            let from_config: QueryFormat =
                serde_json::from_value(serde_json::Value::String(name)).unwrap();
            assert_eq!(from_config, *format);
        }
        assert_eq!(
            QueryFormat::from_str("locality_district_area", false),
            Ok(QueryFormat::LocalityDistrictArea)
        );
    }
}
