mod pipeline_config;
mod query_format;
mod sample_config;

pub use pipeline_config::{PipelineConfig, CONFIG_ENV_PREFIX};
pub use query_format::QueryFormat;
pub use sample_config::SampleConfig;
