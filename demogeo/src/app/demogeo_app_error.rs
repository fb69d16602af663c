use crate::geocode::GeocodeError;

#[derive(thiserror::Error, Debug)]
pub enum DemogeoAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failed reading '{filepath}': {error}")]
    ReadError { filepath: String, error: String },
    #[error("failed writing '{filepath}': {error}")]
    WriteError { filepath: String, error: String },
    #[error("input '{filepath}' is missing required column '{column}'")]
    MissingColumn { filepath: String, column: String },
    #[error("failure building gazetteer: {0}")]
    GazetteerError(String),
    #[error("failure building manual override table: {0}")]
    OverrideError(String),
    #[error("failure building geocoder: {source}")]
    GeocoderError {
        #[from]
        source: GeocodeError,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("{source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
