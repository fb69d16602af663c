use super::{coordinate::parse_degrees, Coordinate};
use serde::{Deserialize, Serialize};

/// an axis-aligned lat/long rectangle used to sanity-check geocoder results.
/// bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub long_min: f64,
    pub long_max: f64,
}

impl Default for BoundingBox {
    /// the West Bank and Jerusalem area.
    fn default() -> Self {
        Self {
            lat_min: 31.3,
            lat_max: 32.5,
            long_min: 34.9,
            long_max: 35.55,
        }
    }
}

impl BoundingBox {
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.lat_min <= coord.lat
            && coord.lat <= self.lat_max
            && self.long_min <= coord.long
            && coord.long <= self.long_max
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.lat_min < self.lat_max) {
            Err(format!(
                "bbox: lat_min must be less than lat_max, but found [{},{}]",
                self.lat_min, self.lat_max
            ))
        } else if !(self.long_min < self.long_max) {
            Err(format!(
                "bbox: long_min must be less than long_max, but found [{},{}]",
                self.long_min, self.long_max
            ))
        } else {
            Ok(())
        }
    }
}

/// parses a bounding box from "lat_min,lat_max,long_min,long_max".
pub fn parse_bbox(s: &str) -> Result<BoundingBox, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected format: lat_min,lat_max,long_min,long_max, got: {s}"
        ));
    }
    let lat = |p: &str| parse_degrees(p, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"));
    let long =
        |p: &str| parse_degrees(p, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"));
    let bbox = BoundingBox {
        lat_min: lat(parts[0])?,
        lat_max: lat(parts[1])?,
        long_min: long(parts[2])?,
        long_max: long(parts[3])?,
    };
    bbox.validate()?;
    Ok(bbox)
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.lat_min, self.lat_max, self.long_min, self.long_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box_contains_jericho() {
        let jericho = Coordinate::new(31.8594663, 35.4255391);
        assert!(BoundingBox::default().contains(&jericho));
    }

    #[test]
    fn test_default_box_excludes_far_results() {
        let bbox = BoundingBox::default();
        // a same-named town geocoded to Egypt
        assert!(!bbox.contains(&Coordinate::new(30.0444, 31.2357)));
        // just west of the box
        assert!(!bbox.contains(&Coordinate::new(31.3756506, 34.8667902)));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let bbox = BoundingBox::default();
        assert!(bbox.contains(&Coordinate::new(31.3, 34.9)));
        assert!(bbox.contains(&Coordinate::new(32.5, 35.55)));
    }

    #[test]
    fn test_parse_bbox() {
        let bbox = parse_bbox("30,40,30,40").unwrap();
        assert_eq!(bbox.lat_min, 30.0);
        assert_eq!(bbox.long_max, 40.0);
        assert!(parse_bbox("40,30,30,40").is_err());
        assert!(parse_bbox("30,40,30").is_err());
    }
}
