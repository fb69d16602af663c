#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    #[error("no geocoder API key found: {0}")]
    MissingApiKey(String),
    #[error("failed building HTTP client: {0}")]
    ClientError(String),
    #[error("request for '{query}' failed: {error}")]
    RequestError { query: String, error: String },
    #[error("geocoder returned status {status} for '{query}': {message}")]
    ApiStatus {
        query: String,
        status: String,
        message: String,
    },
    #[error("malformed geocoder response for '{query}': {error}")]
    MalformedResponse { query: String, error: String },
}
