use demogeo_core::{
    matching::{self, Scorer},
    model::Coordinate,
};

/// a canonical community name and its coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerEntry {
    pub name: String,
    pub coordinate: Coordinate,
}

/// result of a successful fuzzy lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GazetteerMatch {
    pub name: String,
    pub coordinate: Coordinate,
    pub score: f64,
}

/// authoritative list of community names, searched by fuzzy name matching.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    names: Vec<String>,
    coordinates: Vec<Coordinate>,
}

impl Gazetteer {
    pub fn new(entries: Vec<GazetteerEntry>) -> Self {
        let (names, coordinates) = entries
            .into_iter()
            .map(|e| (e.name, e.coordinate))
            .unzip();
        Self { names, coordinates }
    }

    /// best scoring community name for `query`, if it scores at least `threshold`.
    pub fn best_match(
        &self,
        query: &str,
        scorer: Scorer,
        threshold: f64,
    ) -> Option<GazetteerMatch> {
        matching::find_best_match(query, &self.names, scorer, threshold).map(|m| GazetteerMatch {
            coordinate: self.coordinates[m.index],
            name: m.name,
            score: m.score,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
