use crate::input::GazetteerMatch;
use demogeo_core::model::{Coordinate, LocationKey, LocationSource};
use serde::Serialize;

/// the resolution state of one distinct location key as it moves through
/// gazetteer matching, geocoding and manual overrides.
#[derive(Debug, Clone)]
pub struct LocationResolution {
    pub key: LocationKey,
    pub locality_cleaned: String,
    pub gazetteer_match: Option<GazetteerMatch>,
    /// set once the geocoder has been called for this location
    pub geocode_attempted: bool,
    pub geocoded: Option<Coordinate>,
    pub coordinate: Option<Coordinate>,
    pub source: Option<LocationSource>,
}

impl LocationResolution {
    pub fn new(key: LocationKey, locality_cleaned: String) -> Self {
        Self {
            key,
            locality_cleaned,
            gazetteer_match: None,
            geocode_attempted: false,
            geocoded: None,
            coordinate: None,
            source: None,
        }
    }

    /// true when the gazetteer name is identical to the raw locality. imprecise
    /// matches are worth a manual review.
    pub fn is_precise_match(&self) -> bool {
        self.gazetteer_match
            .as_ref()
            .map(|m| m.name == self.key.locality)
            .unwrap_or(false)
    }

    pub fn is_resolved(&self) -> bool {
        self.coordinate.is_some()
    }
}

/// flat CSV row describing a [`LocationResolution`].
#[derive(Debug, Clone, Serialize)]
pub struct LocationRow {
    pub locality: String,
    pub district: String,
    pub area: String,
    pub locality_cleaned: String,
    pub gazetteer_match: Option<String>,
    pub match_score: Option<f64>,
    pub precise_match: bool,
    pub geocoded_lat: Option<f64>,
    pub geocoded_long: Option<f64>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub location_source: Option<String>,
}

impl From<&LocationResolution> for LocationRow {
    fn from(value: &LocationResolution) -> Self {
        LocationRow {
            locality: value.key.locality.clone(),
            district: value.key.district.clone(),
            area: value.key.area.clone(),
            locality_cleaned: value.locality_cleaned.clone(),
            gazetteer_match: value.gazetteer_match.as_ref().map(|m| m.name.clone()),
            match_score: value.gazetteer_match.as_ref().map(|m| m.score),
            precise_match: value.is_precise_match(),
            geocoded_lat: value.geocoded.map(|c| c.lat),
            geocoded_long: value.geocoded.map(|c| c.long),
            lat: value.coordinate.map(|c| c.lat),
            long: value.coordinate.map(|c| c.long),
            location_source: value.source.map(|s| s.to_string()),
        }
    }
}
