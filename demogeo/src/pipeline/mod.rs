mod location_resolution;
mod output_ops;
mod resolution_parameters;
mod resolution_summary;
mod resolve_ops;

pub use location_resolution::{LocationResolution, LocationRow};
pub use output_ops::{
    join_records, write_locations, write_records, ResolvedRecord, OUTPUT_COLUMNS,
};
pub use resolution_parameters::ResolutionParameters;
pub use resolution_summary::ResolutionSummary;
pub use resolve_ops::{
    apply_overrides, geocode_unmatched, match_gazetteer, resolve_locations, unique_locations,
};
