use super::{LocationResolution, ResolutionParameters};
use crate::{
    geocode::{geocode_or_null, Geocoder},
    input::{DemolitionTable, Gazetteer},
    overrides::ManualOverrides,
};
use demogeo_core::model::LocationSource;
use itertools::Itertools;
use kdam::tqdm;

/// distinct location keys in order of first appearance, each with its cleaned locality.
pub fn unique_locations(table: &DemolitionTable) -> Vec<LocationResolution> {
    table
        .records
        .iter()
        .unique_by(|r| &r.key)
        .map(|r| LocationResolution::new(r.key.clone(), r.locality_cleaned.clone()))
        .collect_vec()
}

/// attaches gazetteer coordinates to every location whose cleaned locality
/// scores at or above the match threshold.
pub fn match_gazetteer(
    locations: &mut [LocationResolution],
    gazetteer: &Gazetteer,
    params: &ResolutionParameters,
) {
    for location in locations.iter_mut() {
        let found = gazetteer.best_match(
            &location.locality_cleaned,
            params.scorer,
            params.match_threshold,
        );
        if let Some(m) = found {
            location.coordinate = Some(m.coordinate);
            location.source = Some(LocationSource::Gazetteer);
            location.gazetteer_match = Some(m);
        }
    }
    let matched = locations.iter().filter(|l| l.gazetteer_match.is_some());
    let imprecise = matched
        .clone()
        .filter(|l| !l.is_precise_match())
        .map(|l| {
            let name = l.gazetteer_match.as_ref().map(|m| m.name.as_str());
            format!("'{}' -> '{}'", l.key.locality, name.unwrap_or_default())
        })
        .collect_vec();
    log::info!(
        "gazetteer matched {} of {} locations",
        matched.count(),
        locations.len()
    );
    if !imprecise.is_empty() {
        log::info!(
            "{} inexact gazetteer matches: {}",
            imprecise.len(),
            imprecise.join(", ")
        );
    }
}

/// geocodes every location without a gazetteer match. results outside the
/// bounding box are discarded so that the location falls through to the
/// manual override table.
pub fn geocode_unmatched(
    locations: &mut [LocationResolution],
    geocoder: &dyn Geocoder,
    params: &ResolutionParameters,
) {
    let unmatched = locations
        .iter_mut()
        .filter(|l| l.gazetteer_match.is_none())
        .collect_vec();
    let total = unmatched.len();
    for location in tqdm!(unmatched.into_iter(), desc = "geocode", total = total) {
        let query = params
            .query_format
            .query(&location.key, &location.locality_cleaned);
        location.geocode_attempted = true;
        location.geocoded = geocode_or_null(geocoder, &query);
        match location.geocoded {
            Some(coord) if params.bounding_box.contains(&coord) => {
                location.coordinate = Some(coord);
                location.source = Some(LocationSource::Geocoder);
            }
            Some(coord) => {
                log::info!(
                    "geocoded '{query}' to {coord}, outside {}, needs manual override",
                    params.bounding_box
                );
            }
            None => {}
        }
    }
    eprintln!();
}

/// fills every still-unresolved location from the manual table, keyed by raw locality.
pub fn apply_overrides(locations: &mut [LocationResolution], overrides: &ManualOverrides) {
    let mut missing = vec![];
    for location in locations.iter_mut().filter(|l| !l.is_resolved()) {
        match overrides.get(&location.key.locality) {
            Some(coord) => {
                location.coordinate = Some(coord);
                location.source = Some(LocationSource::ManualOverride);
            }
            None => missing.push(location.key.to_string()),
        }
    }
    if !missing.is_empty() {
        log::warn!(
            "{} locations have no coordinate and will be dropped: {}",
            missing.len(),
            missing.join(", ")
        );
    }
}

/// runs gazetteer matching, geocoding and manual overrides over the distinct
/// locations of the table.
pub fn resolve_locations(
    table: &DemolitionTable,
    gazetteer: &Gazetteer,
    geocoder: &dyn Geocoder,
    overrides: &ManualOverrides,
    params: &ResolutionParameters,
) -> Vec<LocationResolution> {
    let mut locations = unique_locations(table);
    log::info!(
        "{} distinct locations across {} records",
        locations.len(),
        table.len()
    );
    match_gazetteer(&mut locations, gazetteer, params);
    geocode_unmatched(&mut locations, geocoder, params);
    apply_overrides(&mut locations, overrides);
    locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geocode::GeocodeError, input::GazetteerEntry};
    use demogeo_core::model::{Coordinate, LocationKey};
    use std::{cell::RefCell, collections::HashMap};

    /// answers from a fixed table, fails for "unreachable", records queries.
    struct StubGeocoder {
        answers: HashMap<&'static str, Coordinate>,
        queries: RefCell<Vec<String>>,
    }

    impl StubGeocoder {
        fn new(answers: &[(&'static str, Coordinate)]) -> Self {
            Self {
                answers: answers.iter().cloned().collect(),
                queries: RefCell::new(vec![]),
            }
        }
    }

    impl Geocoder for StubGeocoder {
        fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
            self.queries.borrow_mut().push(query.to_string());
            if query == "unreachable" {
                return Err(GeocodeError::RequestError {
                    query: query.to_string(),
                    error: String::from("timed out"),
                });
            }
            Ok(self.answers.get(query).copied())
        }
    }

    fn table() -> DemolitionTable {
        let csv = "\
Locality,District,Area,Date of Demolition
Bidu,Jerusalem,,2019-03-01
Bidu,Jerusalem,,2020-03-01
Kh. Ma'in,Hebron,Masafer Yatta,2021-11-23
a-Nabi Elyas,Qalqiliya,,2018-06-11
Irtas,Bethlehem,,2017-02-09
unreachable,Nowhere,,2016-01-01
";
        DemolitionTable::from_reader(csv.as_bytes(), "test").unwrap()
    }

    fn gazetteer() -> Gazetteer {
        Gazetteer::new(vec![
            GazetteerEntry {
                name: String::from("Bidu"),
                coordinate: Coordinate::new(31.8392574, 35.0209684),
            },
            GazetteerEntry {
                name: String::from("Khirbet Ma'in"),
                coordinate: Coordinate::new(31.41, 35.17),
            },
        ])
    }

    fn overrides() -> ManualOverrides {
        ManualOverrides::from(HashMap::from([
            (String::from("a-Nabi Elyas"), Coordinate::new(32.1846492, 35.0057892)),
            (String::from("Irtas"), Coordinate::new(31.6899561, 35.1779363)),
        ]))
    }

    #[test]
    fn test_unique_locations_keep_first_order() {
        let locations = unique_locations(&table());
        let localities = locations.iter().map(|l| l.key.locality.as_str()).collect_vec();
        assert_eq!(
            localities,
            vec!["Bidu", "Kh. Ma'in", "a-Nabi Elyas", "Irtas", "unreachable"]
        );
    }

    #[test]
    fn test_gazetteer_match_uses_cleaned_locality() {
        let mut locations = unique_locations(&table());
        match_gazetteer(&mut locations, &gazetteer(), &ResolutionParameters::default());
        let main = &locations[1];
        assert_eq!(main.source, Some(LocationSource::Gazetteer));
        assert!(!main.is_precise_match());
        assert!(locations[0].is_precise_match());
        assert!(locations[2].gazetteer_match.is_none());
    }

    #[test]
    fn test_only_unmatched_are_geocoded() {
        let mut locations = unique_locations(&table());
        let params = ResolutionParameters::default();
        let geocoder = StubGeocoder::new(&[]);
        match_gazetteer(&mut locations, &gazetteer(), &params);
        geocode_unmatched(&mut locations, &geocoder, &params);
        assert_eq!(
            *geocoder.queries.borrow(),
            vec!["al-Nabi Elyas", "Irtas", "unreachable"]
        );
    }

    #[test]
    fn test_out_of_box_routes_to_override() {
        let params = ResolutionParameters::default();
        // Irtas geocodes to a namesake far outside the box
        let geocoder = StubGeocoder::new(&[
            ("Irtas", Coordinate::new(36.2, 43.1)),
            ("al-Nabi Elyas", Coordinate::new(32.18, 35.0)),
        ]);
        let locations =
            resolve_locations(&table(), &gazetteer(), &geocoder, &overrides(), &params);
        let irtas = locations.iter().find(|l| l.key.locality == "Irtas").unwrap();
        assert_eq!(irtas.geocoded, Some(Coordinate::new(36.2, 43.1)));
        assert_eq!(irtas.source, Some(LocationSource::ManualOverride));
        assert_eq!(irtas.coordinate, Some(Coordinate::new(31.6899561, 35.1779363)));

        // an in-box geocode result is kept even if an override exists
        let elyas = locations
            .iter()
            .find(|l| l.key.locality == "a-Nabi Elyas")
            .unwrap();
        assert_eq!(elyas.source, Some(LocationSource::Geocoder));
        assert_eq!(elyas.coordinate, Some(Coordinate::new(32.18, 35.0)));
    }

    #[test]
    fn test_geocode_failure_does_not_abort() {
        let params = ResolutionParameters::default();
        let geocoder = StubGeocoder::new(&[]);
        let locations =
            resolve_locations(&table(), &gazetteer(), &geocoder, &overrides(), &params);
        assert_eq!(locations.len(), 5);
        let unreachable = locations.last().unwrap();
        assert_eq!(
            unreachable.key,
            LocationKey::new("unreachable", "Nowhere", "")
        );
        assert!(unreachable.geocode_attempted);
        assert!(!unreachable.is_resolved());
        // null geocodes fall back to overrides
        let elyas = &locations[2];
        assert_eq!(elyas.source, Some(LocationSource::ManualOverride));
    }
}
