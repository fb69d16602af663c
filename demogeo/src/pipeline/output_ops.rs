use super::{LocationResolution, LocationRow};
use crate::{
    app::DemogeoAppError,
    input::{DemolitionRecord, DemolitionTable},
};
use chrono::NaiveDate;
use demogeo_core::model::{Coordinate, LocationKey, LocationSource};
use std::{collections::HashMap, path::Path};

/// columns appended to the normalized input columns in the output file.
pub const OUTPUT_COLUMNS: [&str; 4] = ["locality_cleaned", "lat", "long", "location_source"];

/// a demolition record joined with its resolved coordinate.
#[derive(Debug, Clone)]
pub struct ResolvedRecord<'a> {
    pub record: &'a DemolitionRecord,
    pub coordinate: Coordinate,
    pub source: LocationSource,
}

/// left-joins resolved locations back onto the records by location key.
/// records without a coordinate, or demolished before `min_date`, are dropped.
pub fn join_records<'a>(
    table: &'a DemolitionTable,
    locations: &[LocationResolution],
    min_date: Option<NaiveDate>,
) -> Vec<ResolvedRecord<'a>> {
    let lookup = locations
        .iter()
        .filter_map(|l| match (l.coordinate, l.source) {
            (Some(coord), Some(source)) => Some((&l.key, (coord, source))),
            _ => None,
        })
        .collect::<HashMap<&LocationKey, _>>();

    let mut unresolved = 0;
    let mut too_early = 0;
    let mut resolved = vec![];
    for record in table.records.iter() {
        // undated records cannot be shown to meet the minimum date
        let too_old = match (min_date, record.date_of_demolition) {
            (Some(min), Some(date)) => date < min,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if too_old {
            too_early += 1;
            continue;
        }
        match lookup.get(&record.key) {
            Some((coordinate, source)) => resolved.push(ResolvedRecord {
                record,
                coordinate: *coordinate,
                source: *source,
            }),
            None => unresolved += 1,
        }
    }
    if too_early > 0 {
        log::info!("dropped {too_early} records undated or demolished before the minimum date");
    }
    if unresolved > 0 {
        log::warn!("dropped {unresolved} records without a resolved coordinate");
    }
    resolved
}

/// writes the resolved records, input columns first, then [`OUTPUT_COLUMNS`].
pub fn write_records(
    path: &Path,
    headers: &[String],
    records: &[ResolvedRecord],
) -> Result<(), DemogeoAppError> {
    let write_err = |e: csv::Error| DemogeoAppError::WriteError {
        filepath: path.display().to_string(),
        error: e.to_string(),
    };
    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    writer
        .write_record(headers.iter().map(String::as_str).chain(OUTPUT_COLUMNS))
        .map_err(write_err)?;
    for r in records.iter() {
        let lat = r.coordinate.lat.to_string();
        let long = r.coordinate.long.to_string();
        let source = r.source.to_string();
        let appended = [
            r.record.locality_cleaned.as_str(),
            lat.as_str(),
            long.as_str(),
            source.as_str(),
        ];
        writer
            .write_record(r.record.fields.iter().chain(appended))
            .map_err(write_err)?;
    }
    writer.flush()?;
    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// writes one row per distinct location describing how it was resolved.
pub fn write_locations(
    path: &Path,
    locations: &[LocationResolution],
) -> Result<(), DemogeoAppError> {
    let write_err = |e: csv::Error| DemogeoAppError::WriteError {
        filepath: path.display().to_string(),
        error: e.to_string(),
    };
    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    for location in locations.iter() {
        writer
            .serialize(LocationRow::from(location))
            .map_err(write_err)?;
    }
    writer.flush()?;
    log::info!("wrote {} locations to {}", locations.len(), path.display());
    Ok(())
}
