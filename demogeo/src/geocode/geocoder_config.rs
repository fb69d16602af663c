use super::{DisabledGeocoder, GeocodeError, Geocoder, GoogleGeocoder};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// environment variable consulted when no key is configured.
pub const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// selects and parameterizes the geocoding fallback.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GeocoderConfig {
    /// Google Maps geocoding API. the key is read from `api_key`, then
    /// `api_key_file`, then the `GOOGLE_MAPS_API_KEY` environment variable.
    Google {
        api_key: Option<String>,
        api_key_file: Option<String>,
        base_url: Option<String>,
        region: Option<String>,
        timeout_secs: Option<u64>,
    },
    /// skip geocoding
    Disabled,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        GeocoderConfig::Google {
            api_key: None,
            api_key_file: None,
            base_url: None,
            region: None,
            timeout_secs: None,
        }
    }
}

impl GeocoderConfig {
    pub fn build(&self) -> Result<Box<dyn Geocoder>, GeocodeError> {
        match self {
            GeocoderConfig::Google {
                api_key,
                api_key_file,
                base_url,
                region,
                timeout_secs,
            } => {
                let key = resolve_api_key(api_key.as_deref(), api_key_file.as_deref())?;
                let timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
                let geocoder = GoogleGeocoder::new(key, base_url.clone(), region.clone(), timeout)?;
                Ok(Box::new(geocoder))
            }
            GeocoderConfig::Disabled => {
                log::info!("geocoder disabled, unmatched locations go straight to manual overrides");
                Ok(Box::new(DisabledGeocoder))
            }
        }
    }
}

fn resolve_api_key(
    api_key: Option<&str>,
    api_key_file: Option<&str>,
) -> Result<String, GeocodeError> {
    if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    if let Some(f) = api_key_file {
        let contents = std::fs::read_to_string(f)
            .map_err(|e| GeocodeError::MissingApiKey(format!("failure reading {f}: {e}")))?;
        let key = contents.trim();
        if key.is_empty() {
            return Err(GeocodeError::MissingApiKey(format!("{f} is empty")));
        }
        return Ok(key.to_string());
    }
    match std::env::var(API_KEY_ENV_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(GeocodeError::MissingApiKey(format!(
            "set geocoder.api_key, geocoder.api_key_file or {API_KEY_ENV_VAR}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_inline_key_wins() {
        let key = resolve_api_key(Some(" abc123 "), Some("/does/not/exist")).unwrap();
        assert_eq!(key, "abc123");
    }

    #[test]
    fn test_key_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "key-from-file").unwrap();
        let path = f.path().to_str().unwrap().to_string();
        let key = resolve_api_key(None, Some(&path)).unwrap();
        assert_eq!(key, "key-from-file");
    }

    #[test]
    fn test_missing_key_file() {
        assert!(matches!(
            resolve_api_key(None, Some("/does/not/exist/key.txt")),
            Err(GeocodeError::MissingApiKey(_))
        ));
    }

    #[test]
    fn test_disabled_builds() {
        let geocoder = GeocoderConfig::Disabled.build().unwrap();
        assert_eq!(geocoder.geocode("Bidu").unwrap(), None);
    }
}
