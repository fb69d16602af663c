use super::{Gazetteer, GazetteerEntry};
use crate::app::DemogeoAppError;
use demogeo_core::{clean::normalize_column_name, model::Coordinate};
use geo::Centroid;
use serde::{Deserialize, Serialize};
use shapefile::dbase::{FieldValue, Record};
use std::{collections::HashMap, path::Path};

/// source of the community gazetteer.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GazetteerSource {
    /// community shapefile. field names are matched ignoring case. when
    /// the coordinate fields are absent the shape's point or centroid is used.
    Shapefile {
        file: String,
        #[serde(default = "default_name_field")]
        name_field: String,
        #[serde(default = "default_lat_field")]
        lat_field: String,
        #[serde(default = "default_long_field")]
        long_field: String,
    },
    /// CSV with a name column and decimal degree columns
    Csv {
        file: String,
        name_column: String,
        lat_column: String,
        long_column: String,
    },
}

fn default_name_field() -> String {
    String::from("pcbs_name")
}

// the PCBS community shapefile stores latitude in X and longitude in Y
fn default_lat_field() -> String {
    String::from("x")
}

fn default_long_field() -> String {
    String::from("y")
}

impl GazetteerSource {
    pub fn build(&self) -> Result<Gazetteer, DemogeoAppError> {
        let entries = match self {
            GazetteerSource::Shapefile {
                file,
                name_field,
                lat_field,
                long_field,
            } => read_gazetteer_shapefile(file, name_field, lat_field, long_field)?,
            GazetteerSource::Csv {
                file,
                name_column,
                lat_column,
                long_column,
            } => read_gazetteer_csv(file, name_column, lat_column, long_column)?,
        };
        log::info!("loaded {} gazetteer entries", entries.len());
        Ok(Gazetteer::new(entries))
    }
}

/// reads community names and coordinates from a shapefile source
fn read_gazetteer_shapefile(
    filepath: &str,
    name_field: &str,
    lat_field: &str,
    long_field: &str,
) -> Result<Vec<GazetteerEntry>, DemogeoAppError> {
    let rows = shapefile::read(filepath).map_err(|e| DemogeoAppError::ReadError {
        filepath: filepath.to_string(),
        error: e.to_string(),
    })?;

    let mut entries = vec![];
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let name = match get_field(&record, name_field) {
            Some(FieldValue::Character(Some(s))) if !s.trim().is_empty() => s.trim().to_string(),
            Some(FieldValue::Character(_)) => {
                log::warn!("gazetteer row {idx} has no name, skipping");
                continue;
            }
            Some(other) => {
                return Err(DemogeoAppError::GazetteerError(format!(
                    "field '{}' has unexpected field type '{}'",
                    name_field,
                    other.field_type()
                )))
            }
            None => {
                return Err(DemogeoAppError::GazetteerError(format!(
                    "field {name_field} missing from shapefile record"
                )))
            }
        };
        let lat = get_field(&record, lat_field).and_then(field_as_f64);
        let long = get_field(&record, long_field).and_then(field_as_f64);
        let coordinate = match (lat, long) {
            (Some(lat), Some(long)) => Coordinate::new(lat, long),
            _ => match shape_position(shape, idx)? {
                Some(coord) => coord,
                None => {
                    log::warn!("gazetteer entry '{name}' at row {idx} has no position, skipping");
                    continue;
                }
            },
        };
        entries.push(GazetteerEntry { name, coordinate });
    }
    Ok(entries)
}

/// dBase field names are usually upper case, configured names are lower case.
fn get_field<'a>(record: &'a Record, name: &str) -> Option<&'a FieldValue> {
    [name.to_string(), name.to_uppercase(), name.to_lowercase()]
        .iter()
        .find_map(|n| record.get(n))
}

fn field_as_f64(field: &FieldValue) -> Option<f64> {
    match field {
        FieldValue::Numeric(v) => *v,
        FieldValue::Float(v) => v.map(f64::from),
        FieldValue::Double(v) => Some(*v),
        FieldValue::Integer(v) => Some(f64::from(*v)),
        FieldValue::Character(Some(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// point shapes are used directly, polygons by their centroid.
fn shape_position(
    shape: shapefile::Shape,
    idx: usize,
) -> Result<Option<Coordinate>, DemogeoAppError> {
    let point = match shape {
        shapefile::Shape::Point(p) => Some(geo::Point::new(p.x, p.y)),
        shapefile::Shape::PointM(p) => Some(geo::Point::new(p.x, p.y)),
        shapefile::Shape::PointZ(p) => Some(geo::Point::new(p.x, p.y)),
        shapefile::Shape::Polygon(polygon) => {
            let mp: geo::MultiPolygon<f64> = polygon.try_into().map_err(|e| {
                DemogeoAppError::GazetteerError(format!(
                    "failed to convert shapefile polygon at row {idx}: {e}"
                ))
            })?;
            mp.centroid()
        }
        shapefile::Shape::PolygonM(polygon) => {
            let mp: geo::MultiPolygon<f64> = polygon.try_into().map_err(|e| {
                DemogeoAppError::GazetteerError(format!(
                    "failed to convert shapefile polygon at row {idx}: {e}"
                ))
            })?;
            mp.centroid()
        }
        shapefile::Shape::NullShape => None,
        other => {
            return Err(DemogeoAppError::GazetteerError(format!(
                "unexpected shape type {} found at row {idx}, must be a point or polygon",
                other.shapetype()
            )))
        }
    };
    Ok(point.map(|p| Coordinate::new(p.y(), p.x())))
}

/// reads community names and coordinates from a CSV source
fn read_gazetteer_csv(
    filepath: &str,
    name_column: &str,
    lat_column: &str,
    long_column: &str,
) -> Result<Vec<GazetteerEntry>, DemogeoAppError> {
    let read_err = |error: String| DemogeoAppError::ReadError {
        filepath: filepath.to_string(),
        error,
    };
    let mut reader =
        csv::Reader::from_path(Path::new(filepath)).map_err(|e| read_err(e.to_string()))?;
    let header_record = reader.headers().map_err(|e| read_err(e.to_string()))?.clone();
    let headers = header_record
        .iter()
        .enumerate()
        .map(|(i, s)| (normalize_column_name(s), i))
        .collect::<HashMap<_, _>>();
    let column = |name: &str| {
        headers
            .get(&normalize_column_name(name))
            .copied()
            .ok_or_else(|| DemogeoAppError::MissingColumn {
                filepath: filepath.to_string(),
                column: name.to_string(),
            })
    };
    let name_idx = column(name_column)?;
    let lat_idx = column(lat_column)?;
    let long_idx = column(long_column)?;

    reader
        .records()
        .enumerate()
        .map(|(idx, row)| {
            let r = row.map_err(|e| read_err(e.to_string()))?;
            let get = |i: usize| r.get(i).unwrap_or_default().trim();
            let pair = format!("{},{}", get(lat_idx), get(long_idx));
            let coordinate = Coordinate::try_from(pair.as_str())
                .map_err(|e| DemogeoAppError::GazetteerError(format!("row {idx}: {e}")))?;
            Ok(GazetteerEntry {
                name: get(name_idx).to_string(),
                coordinate,
            })
        })
        .collect::<Result<Vec<_>, DemogeoAppError>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_field_as_f64() {
        assert_eq!(field_as_f64(&FieldValue::Numeric(Some(31.5))), Some(31.5));
        assert_eq!(field_as_f64(&FieldValue::Double(35.2)), Some(35.2));
        assert_eq!(field_as_f64(&FieldValue::Integer(31)), Some(31.0));
        assert_eq!(
            field_as_f64(&FieldValue::Character(Some(String::from(" 35.1 ")))),
            Some(35.1)
        );
        assert_eq!(field_as_f64(&FieldValue::Numeric(None)), None);
        assert_eq!(field_as_f64(&FieldValue::Character(None)), None);
    }

    #[test]
    fn test_point_shape_position() {
        let shape = shapefile::Shape::Point(shapefile::Point::new(35.2, 31.7));
        let coord = shape_position(shape, 0).unwrap().unwrap();
        assert_eq!(coord, Coordinate::new(31.7, 35.2));
        assert_eq!(shape_position(shapefile::Shape::NullShape, 1).unwrap(), None);
    }

    #[test]
    fn test_read_csv_gazetteer() {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            f,
            "PCBS_NAME,Lat,Long\nBidu,31.8392574,35.0209684\nIrtas,31.6899561,35.1779363\n"
        )
        .unwrap();
        let source = GazetteerSource::Csv {
            file: f.path().to_str().unwrap().to_string(),
            name_column: String::from("pcbs_name"),
            lat_column: String::from("lat"),
            long_column: String::from("long"),
        };
        let gazetteer = source.build().unwrap();
        assert_eq!(gazetteer.len(), 2);
        assert_eq!(gazetteer.names()[1], "Irtas");
    }

    #[test]
    fn test_read_csv_gazetteer_missing_column() {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(f, "name,lat\nBidu,31.8\n").unwrap();
        let source = GazetteerSource::Csv {
            file: f.path().to_str().unwrap().to_string(),
            name_column: String::from("name"),
            lat_column: String::from("lat"),
            long_column: String::from("long"),
        };
        assert!(matches!(
            source.build(),
            Err(DemogeoAppError::MissingColumn { .. })
        ));
    }
}
