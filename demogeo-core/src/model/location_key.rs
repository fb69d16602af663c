use serde::{Deserialize, Serialize};

/// the (locality, district, area) tuple used to deduplicate records before
/// resolution and to join resolved coordinates back onto them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationKey {
    pub locality: String,
    pub district: String,
    pub area: String,
}

impl LocationKey {
    pub fn new(locality: &str, district: &str, area: &str) -> Self {
        Self {
            locality: locality.to_string(),
            district: district.to_string(),
            area: area.to_string(),
        }
    }

    /// free-text query made of every non-empty key component.
    pub fn full_query(&self) -> String {
        [&self.locality, &self.district, &self.area]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.locality, self.district, self.area)
    }
}
