use crate::app::DemogeoAppError;
use chrono::NaiveDate;
use csv::StringRecord;
use demogeo_core::{
    clean::{self, DEMOLITION_DATE_FORMAT},
    model::LocationKey,
};
use std::{collections::HashMap, io::Read, path::Path};

/// columns the pipeline reads, named after header normalization.
pub const REQUIRED_COLUMNS: [&str; 4] = ["locality", "district", "area", "date_of_demolition"];

/// one demolition row. `fields` holds every input column in header order with
/// `area` and `date_of_demolition` rewritten in their cleaned form. a blank
/// date cell is kept as `None` and written back empty.
#[derive(Debug, Clone)]
pub struct DemolitionRecord {
    pub key: LocationKey,
    pub locality_cleaned: String,
    pub date_of_demolition: Option<NaiveDate>,
    pub fields: StringRecord,
}

/// the demolition dataset after column and string normalization.
#[derive(Debug, Clone)]
pub struct DemolitionTable {
    pub headers: Vec<String>,
    pub records: Vec<DemolitionRecord>,
}

impl DemolitionTable {
    pub fn from_path(path: &Path) -> Result<Self, DemogeoAppError> {
        let file = std::fs::File::open(path).map_err(|e| DemogeoAppError::ReadError {
            filepath: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> Result<Self, DemogeoAppError> {
        let read_err = |e: String| DemogeoAppError::ReadError {
            filepath: source.to_string(),
            error: e,
        };
        let mut rdr = csv::Reader::from_reader(reader);
        let raw_headers = rdr.headers().map_err(|e| read_err(e.to_string()))?.clone();
        let headers = clean::normalize_headers(raw_headers.iter());
        let header_lookup = headers
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect::<HashMap<_, _>>();
        let column = |name: &str| {
            header_lookup
                .get(name)
                .copied()
                .ok_or_else(|| DemogeoAppError::MissingColumn {
                    filepath: source.to_string(),
                    column: name.to_string(),
                })
        };
        let mut indices = [0; REQUIRED_COLUMNS.len()];
        for (idx, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *idx = column(name)?;
        }
        let [locality_idx, district_idx, area_idx, date_idx] = indices;

        let mut records = vec![];
        for (row_idx, row) in rdr.records().enumerate() {
            let row = row.map_err(|e| read_err(e.to_string()))?;
            let get = |idx: usize| row.get(idx).unwrap_or_default();
            let locality = get(locality_idx).trim();
            let district = get(district_idx).trim();
            let area = clean::clean_area(get(area_idx));
            let date_of_demolition = match get(date_idx).trim() {
                "" => None,
                date => Some(
                    clean::parse_demolition_date(date)
                        .map_err(|e| read_err(format!("row {row_idx}: {e}")))?,
                ),
            };
            let date_str = date_of_demolition
                .map(|d| d.format(DEMOLITION_DATE_FORMAT).to_string())
                .unwrap_or_default();

            let fields = (0..headers.len())
                .map(|i| {
                    if i == area_idx {
                        area.as_str()
                    } else if i == date_idx {
                        date_str.as_str()
                    } else {
                        get(i)
                    }
                })
                .collect::<StringRecord>();
            records.push(DemolitionRecord {
                key: LocationKey::new(locality, district, &area),
                locality_cleaned: clean::clean_locality(locality),
                date_of_demolition,
                fields,
            });
        }
        log::info!("read {} demolition records from {source}", records.len());
        Ok(DemolitionTable { headers, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    const SAMPLE: &str = "\
Date of Demolition,Locality,District,Area,Type of sturcture,Housing Units
2021-11-23,Kh. Ma'in,Hebron,south  hebron-hills,Residential,2
2024-07-07,Um al-Kheir,Hebron,South Hebron Hills,Residential,1
";

    #[test]
    fn test_headers_are_normalized() {
        let table = DemolitionTable::from_reader(SAMPLE.as_bytes(), "sample").unwrap();
        assert_eq!(
            table.headers,
            vec![
                "date_of_demolition",
                "locality",
                "district",
                "area",
                "type_of_structure",
                "housing_units"
            ]
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_fields_are_cleaned() {
        let table = DemolitionTable::from_reader(SAMPLE.as_bytes(), "sample").unwrap();
        let first = &table.records[0];
        assert_eq!(first.key, LocationKey::new("Kh. Ma'in", "Hebron", "South Hebron Hills"));
        assert_eq!(first.locality_cleaned, "Khirbet Ma'in");
        assert_eq!(first.fields.get(3), Some("South Hebron Hills"));
        assert_eq!(first.fields.get(5), Some("2"));
        assert_eq!(
            first.date_of_demolition,
            NaiveDate::from_ymd_opt(2021, 11, 23)
        );
        // both rows share a location key after area cleanup
        assert_eq!(table.records[1].key.area, first.key.area);
    }

    #[test]
    fn test_missing_column() {
        let csv = "Locality,District\nBidu,Jerusalem\n";
        match DemolitionTable::from_reader(csv.as_bytes(), "sample") {
            Err(DemogeoAppError::MissingColumn { column, .. }) => assert_eq!(column, "area"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_every_required_column_is_checked() {
        for missing in REQUIRED_COLUMNS {
            let header = REQUIRED_COLUMNS
                .iter()
                .filter(|c| **c != missing)
                .join(",");
            let csv = format!("{header}\n");
            match DemolitionTable::from_reader(csv.as_bytes(), "sample") {
                Err(DemogeoAppError::MissingColumn { column, .. }) => assert_eq!(column, missing),
                other => panic!("expected MissingColumn for {missing}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_blank_date_is_kept() {
        let csv = "Locality,District,Area,Date of Demolition\nIrtas,Bethlehem,,\nBidu,Jerusalem,,  \n";
        let table = DemolitionTable::from_reader(csv.as_bytes(), "sample").unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.records.iter().all(|r| r.date_of_demolition.is_none()));
        assert_eq!(table.records[0].fields.get(3), Some(""));
        assert_eq!(table.records[0].key.locality, "Irtas");
    }

    #[test]
    fn test_bad_date() {
        let csv = "Locality,District,Area,Date of Demolition\nBidu,Jerusalem,,11/23/2021\n";
        assert!(matches!(
            DemolitionTable::from_reader(csv.as_bytes(), "sample"),
            Err(DemogeoAppError::ReadError { .. })
        ));
    }
}
