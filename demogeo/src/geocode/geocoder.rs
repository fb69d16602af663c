use super::GeocodeError;
use demogeo_core::model::Coordinate;

/// converts a free-text place name into a coordinate.
pub trait Geocoder {
    /// returns `Ok(None)` when the service answered but found nothing.
    fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

/// geocoder for offline runs. never finds anything, so every unmatched
/// location falls through to the manual override table.
pub struct DisabledGeocoder;

impl Geocoder for DisabledGeocoder {
    fn geocode(&self, _query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        Ok(None)
    }
}

/// calls the geocoder and collapses every failure into `None`. failures are
/// logged but never retried.
pub fn geocode_or_null(geocoder: &dyn Geocoder, query: &str) -> Option<Coordinate> {
    match geocoder.geocode(query) {
        Ok(Some(coord)) => {
            log::debug!("geocoded '{query}' to {coord}");
            Some(coord)
        }
        Ok(None) => {
            log::info!("no geocoder result for '{query}'");
            None
        }
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingGeocoder;

    impl Geocoder for FailingGeocoder {
        fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
            Err(GeocodeError::RequestError {
                query: query.to_string(),
                error: String::from("connection refused"),
            })
        }
    }

    #[test]
    fn test_failure_becomes_null() {
        assert_eq!(geocode_or_null(&FailingGeocoder, "Bidu"), None);
    }

    #[test]
    fn test_disabled_finds_nothing() {
        assert_eq!(geocode_or_null(&DisabledGeocoder, "Bidu"), None);
    }
}
