mod geocode_error;
mod geocoder;
mod geocoder_config;
mod google_geocoder;

pub use geocode_error::GeocodeError;
pub use geocoder::{geocode_or_null, DisabledGeocoder, Geocoder};
pub use geocoder_config::{GeocoderConfig, API_KEY_ENV_VAR};
pub use google_geocoder::{parse_geocode_response, GoogleGeocoder, GOOGLE_GEOCODE_URL};
