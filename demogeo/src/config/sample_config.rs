use super::pipeline_config::load_layered;
use crate::{app::DemogeoAppError, geocode::GeocoderConfig};
use serde::{Deserialize, Serialize};

/// the subset of the run configuration used when geocoding a sample of records.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct SampleConfig {
    pub demolitions_file: String,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

impl SampleConfig {
    pub fn load(
        config_file: Option<&str>,
        overrides: &[(&str, Option<String>)],
    ) -> Result<SampleConfig, DemogeoAppError> {
        load_layered(config_file, overrides)
    }
}
