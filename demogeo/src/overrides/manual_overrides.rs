use crate::app::DemogeoAppError;
use demogeo_core::model::Coordinate;
use serde::Deserialize;
use std::{collections::HashMap, io::Read, path::Path};

/// hand-curated coordinates, looked up with a raw (uncleaned) locality name.
/// researched with Google Maps and B'Tselem's interactive map
/// (https://www.btselem.org/map).
pub const BUILTIN_OVERRIDES_CSV: &str = include_str!("../resources/manual_overrides.csv");

#[derive(Deserialize)]
struct OverrideRow {
    locality: String,
    lat: f64,
    long: f64,
    note: Option<String>,
}

/// last-resort lookup table for locations that the gazetteer and geocoder
/// could not place inside the bounding box. entries are trusted as-is and
/// are not bounding-box validated.
#[derive(Debug, Clone, Default)]
pub struct ManualOverrides {
    table: HashMap<String, Coordinate>,
}

impl ManualOverrides {
    pub fn builtin() -> Result<Self, DemogeoAppError> {
        Self::from_reader(BUILTIN_OVERRIDES_CSV.as_bytes(), "builtin manual overrides")
    }

    pub fn from_path(path: &Path) -> Result<Self, DemogeoAppError> {
        let file = std::fs::File::open(path).map_err(|e| DemogeoAppError::ReadError {
            filepath: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// reads a `locality,lat,long[,note]` CSV. a locality listed twice keeps
    /// its last coordinate.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self, DemogeoAppError> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_reader(reader);
        let mut table = HashMap::new();
        for (idx, row) in rdr.deserialize::<OverrideRow>().enumerate() {
            let row = row.map_err(|e| {
                DemogeoAppError::OverrideError(format!("{source} row {idx}: {e}"))
            })?;
            let coord = Coordinate::new(row.lat, row.long);
            if let Some(note) = &row.note {
                log::debug!("override '{}' -> {coord} ({note})", row.locality);
            }
            if let Some(prev) = table.insert(row.locality.clone(), coord) {
                if prev != coord {
                    log::debug!(
                        "{source}: '{}' listed more than once, replacing {prev} with {coord}",
                        row.locality
                    );
                }
            }
        }
        Ok(Self { table })
    }

    /// adds entries from another table, replacing any shared localities.
    pub fn extend(&mut self, other: ManualOverrides) {
        self.table.extend(other.table);
    }

    pub fn get(&self, locality: &str) -> Option<Coordinate> {
        self.table.get(locality.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl From<HashMap<String, Coordinate>> for ManualOverrides {
    fn from(table: HashMap<String, Coordinate>) -> Self {
        Self { table }
    }
}
