use serde::{Deserialize, Serialize};

/// which resolution stage produced a location's coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    Gazetteer,
    Geocoder,
    ManualOverride,
}

impl std::fmt::Display for LocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationSource::Gazetteer => write!(f, "gazetteer"),
            LocationSource::Geocoder => write!(f, "geocoder"),
            LocationSource::ManualOverride => write!(f, "manual_override"),
        }
    }
}
