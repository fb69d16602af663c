use serde::{Deserialize, Serialize};

/// a WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

impl Coordinate {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.long)
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = String;

    /// parses a "lat,long" pair.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (lat_str, long_str) = s
            .split_once(',')
            .ok_or_else(|| format!("expected format: lat,long, got: {s}"))?;
        let lat = parse_degrees(lat_str, -90.0, 90.0)
            .map_err(|e| format!("invalid latitude: {e}"))?;
        let long = parse_degrees(long_str, -180.0, 180.0)
            .map_err(|e| format!("invalid longitude: {e}"))?;
        Ok(Coordinate { lat, long })
    }
}

pub(crate) fn parse_degrees(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))?;
    if !v.is_finite() || v < min || max < v {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let c = Coordinate::try_from("31.7053812, 35.1921428").unwrap();
        assert_eq!(c, Coordinate::new(31.7053812, 35.1921428));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Coordinate::try_from("91.0,35.0").is_err());
        assert!(Coordinate::try_from("31.0,181.0").is_err());
        assert!(Coordinate::try_from("null").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let c = Coordinate::new(32.1846492, 35.0057892);
        assert_eq!(Coordinate::try_from(c.to_string().as_str()).unwrap(), c);
    }
}
