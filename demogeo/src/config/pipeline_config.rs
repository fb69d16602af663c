use super::QueryFormat;
use crate::{app::DemogeoAppError, geocode::GeocoderConfig, input::GazetteerSource};
use chrono::NaiveDate;
use config::Config;
use demogeo_core::{
    matching::{Scorer, DEFAULT_THRESHOLD},
    model::BoundingBox,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// environment variables with this prefix override file settings, using `__`
/// between nested keys, e.g. `DEMOGEO_GEOCODER__API_KEY`.
pub const CONFIG_ENV_PREFIX: &str = "DEMOGEO";

/// parameters of a geocoding run.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PipelineConfig {
    /// raw demolitions CSV
    pub demolitions_file: String,
    pub gazetteer: GazetteerSource,
    /// resolved demolitions CSV
    pub output_file: String,
    /// optional CSV with one row per distinct location and how it was resolved
    pub locations_output_file: Option<String>,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub query_format: QueryFormat,
    #[serde(default)]
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub scorer: Scorer,
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    /// extra manual overrides, merged over the builtin table
    pub override_file: Option<String>,
    /// drop records demolished before this date
    pub min_demolition_date: Option<NaiveDate>,
}

fn default_match_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl PipelineConfig {
    /// layers, from lowest to highest priority: defaults, the TOML file (if
    /// any), `DEMOGEO_` environment variables, then `overrides` (typically
    /// from command line flags).
    pub fn load(
        config_file: Option<&str>,
        overrides: &[(&str, Option<String>)],
    ) -> Result<PipelineConfig, DemogeoAppError> {
        let conf: PipelineConfig = load_layered(config_file, overrides)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> Result<(), DemogeoAppError> {
        self.bounding_box
            .validate()
            .map_err(DemogeoAppError::ConfigurationError)?;
        if !(0.0..=100.0).contains(&self.match_threshold) {
            return Err(DemogeoAppError::ConfigurationError(format!(
                "match_threshold must be in [0, 100], found {}",
                self.match_threshold
            )));
        }
        Ok(())
    }
}

/// builds the layered configuration and decodes it into `T`.
pub(crate) fn load_layered<T: DeserializeOwned>(
    config_file: Option<&str>,
    overrides: &[(&str, Option<String>)],
) -> Result<T, DemogeoAppError> {
    let read_err = |msg: &str| {
        let msg = msg.to_string();
        move |source: config::ConfigError| DemogeoAppError::ConfigReadError { msg, source }
    };
    let mut builder = Config::builder()
        .set_default("gazetteer.type", "shapefile")
        .map_err(read_err("failed setting configuration defaults"))?;
    if let Some(f) = config_file {
        log::info!("reading demogeo configuration from {f}");
        builder = builder.add_source(config::File::new(f, config::FileFormat::Toml));
    }
    builder = builder.add_source(
        config::Environment::with_prefix(CONFIG_ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    );
    for (key, value) in overrides {
        builder = builder
            .set_override_option(*key, value.clone())
            .map_err(read_err(format!("failed applying override for '{key}'").as_str()))?;
    }
    let config = builder
        .build()
        .map_err(read_err("failed reading demogeo configuration"))?;
    config
        .try_deserialize()
        .map_err(read_err("failed decoding demogeo configuration"))
}
