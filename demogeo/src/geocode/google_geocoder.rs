use super::{GeocodeError, Geocoder};
use demogeo_core::model::Coordinate;
use serde::Deserialize;
use std::time::Duration;

pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// client for the Google Maps geocoding web service.
pub struct GoogleGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    region: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        region: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeocodeError::ClientError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| GOOGLE_GEOCODE_URL.to_string()),
            api_key,
            region,
        })
    }
}

impl Geocoder for GoogleGeocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let mut params = vec![("address", query), ("key", self.api_key.as_str())];
        if let Some(region) = &self.region {
            params.push(("region", region.as_str()));
        }
        // errors are stripped of their URL, it carries the API key
        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .map_err(|e| GeocodeError::RequestError {
                query: query.to_string(),
                error: e.without_url().to_string(),
            })?;
        let body = response.text().map_err(|e| GeocodeError::RequestError {
            query: query.to_string(),
            error: e.without_url().to_string(),
        })?;
        parse_geocode_response(query, &body)
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
}

#[derive(Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLocation,
}

#[derive(Deserialize)]
struct GeocodeLocation {
    lat: f64,
    lng: f64,
}

/// reads the first result of a geocoding response body.
pub fn parse_geocode_response(query: &str, body: &str) -> Result<Option<Coordinate>, GeocodeError> {
    let response: GeocodeResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::MalformedResponse {
            query: query.to_string(),
            error: e.to_string(),
        })?;
    match response.status.as_str() {
        "OK" => Ok(response
            .results
            .first()
            .map(|r| Coordinate::new(r.geometry.location.lat, r.geometry.location.lng))),
        "ZERO_RESULTS" => Ok(None),
        _ => Err(GeocodeError::ApiStatus {
            query: query.to_string(),
            status: response.status,
            message: response
                .error_message
                .unwrap_or_else(|| String::from("no error message")),
        }),
    }
}
