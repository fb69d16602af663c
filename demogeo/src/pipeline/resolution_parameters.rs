use crate::config::{PipelineConfig, QueryFormat};
use chrono::NaiveDate;
use demogeo_core::{
    matching::{Scorer, DEFAULT_THRESHOLD},
    model::BoundingBox,
};

/// the tunable parts of location resolution, separated from file paths.
#[derive(Debug, Clone)]
pub struct ResolutionParameters {
    pub scorer: Scorer,
    pub match_threshold: f64,
    pub query_format: QueryFormat,
    pub bounding_box: BoundingBox,
    pub min_demolition_date: Option<NaiveDate>,
}

impl Default for ResolutionParameters {
    fn default() -> Self {
        Self {
            scorer: Scorer::default(),
            match_threshold: DEFAULT_THRESHOLD,
            query_format: QueryFormat::default(),
            bounding_box: BoundingBox::default(),
            min_demolition_date: None,
        }
    }
}

impl From<&PipelineConfig> for ResolutionParameters {
    fn from(conf: &PipelineConfig) -> Self {
        Self {
            scorer: conf.scorer,
            match_threshold: conf.match_threshold,
            query_format: conf.query_format,
            bounding_box: conf.bounding_box,
            min_demolition_date: conf.min_demolition_date,
        }
    }
}
