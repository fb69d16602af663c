use super::DemogeoAppError;
use crate::{
    config::PipelineConfig,
    geocode::Geocoder,
    input::DemolitionTable,
    overrides::ManualOverrides,
    pipeline::{self, ResolutionParameters, ResolutionSummary},
};
use std::path::Path;

/// runs the full pipeline with the geocoder described by the configuration.
///
/// # Arguments
/// * `conf` - paths and resolution parameters for this run
///
/// # Result
/// counts of records and locations by resolution stage
pub fn run(conf: &PipelineConfig) -> Result<ResolutionSummary, DemogeoAppError> {
    let geocoder = conf.geocoder.build()?;
    run_with_geocoder(conf, geocoder.as_ref())
}

/// runs the full pipeline, ignoring the configured geocoder in favor of `geocoder`.
pub fn run_with_geocoder(
    conf: &PipelineConfig,
    geocoder: &dyn Geocoder,
) -> Result<ResolutionSummary, DemogeoAppError> {
    let table = DemolitionTable::from_path(Path::new(&conf.demolitions_file))?;
    let gazetteer = conf.gazetteer.build()?;
    let mut overrides = ManualOverrides::builtin()?;
    if let Some(f) = &conf.override_file {
        log::info!("reading manual overrides from {f}");
        overrides.extend(ManualOverrides::from_path(Path::new(f))?);
    }
    log::info!("{} manual overrides available", overrides.len());

    let params = ResolutionParameters::from(conf);
    let locations =
        pipeline::resolve_locations(&table, &gazetteer, geocoder, &overrides, &params);
    if let Some(f) = &conf.locations_output_file {
        pipeline::write_locations(Path::new(f), &locations)?;
    }

    let resolved = pipeline::join_records(&table, &locations, params.min_demolition_date);
    pipeline::write_records(Path::new(&conf.output_file), &table.headers, &resolved)?;

    let summary = ResolutionSummary::new(table.len(), &locations, &resolved);
    log::info!("{summary}");
    Ok(summary)
}
