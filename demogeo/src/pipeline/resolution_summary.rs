use super::{LocationResolution, ResolvedRecord};
use demogeo_core::model::LocationSource;
use std::fmt::Display;

/// counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    pub records_in: usize,
    pub records_out: usize,
    pub locations: usize,
    pub gazetteer: usize,
    pub geocoder: usize,
    pub manual_override: usize,
    pub unresolved: usize,
}

impl ResolutionSummary {
    pub fn new(
        records_in: usize,
        locations: &[LocationResolution],
        resolved: &[ResolvedRecord],
    ) -> Self {
        let count = |source: LocationSource| {
            locations
                .iter()
                .filter(|l| l.source == Some(source))
                .count()
        };
        Self {
            records_in,
            records_out: resolved.len(),
            locations: locations.len(),
            gazetteer: count(LocationSource::Gazetteer),
            geocoder: count(LocationSource::Geocoder),
            manual_override: count(LocationSource::ManualOverride),
            unresolved: locations.iter().filter(|l| !l.is_resolved()).count(),
        }
    }
}

impl Display for ResolutionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} records written; {} locations: {} gazetteer, {} geocoder, {} manual override, {} unresolved",
            self.records_out,
            self.records_in,
            self.locations,
            self.gazetteer,
            self.geocoder,
            self.manual_override,
            self.unresolved
        )
    }
}
