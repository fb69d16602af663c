use super::DemogeoAppError;
use crate::{
    config::{QueryFormat, SampleConfig},
    geocode::{geocode_or_null, Geocoder},
    input::{DemolitionRecord, DemolitionTable},
};
use kdam::tqdm;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;
use std::path::Path;

/// one geocoded sample record.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRow {
    pub locality: String,
    pub district: String,
    pub area: String,
    pub query: String,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

/// geocodes `count` randomly chosen records and writes them as CSV to stdout.
pub fn run_sample(
    conf: &SampleConfig,
    count: usize,
    seed: Option<u64>,
    query_format: QueryFormat,
) -> Result<(), DemogeoAppError> {
    let table = DemolitionTable::from_path(Path::new(&conf.demolitions_file))?;
    let geocoder = conf.geocoder.build()?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let records = sample_records(&table, count, &mut rng);
    let rows = geocode_sample(&records, geocoder.as_ref(), query_format);

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// picks up to `count` distinct records, kept in table order.
pub fn sample_records<'a, R: Rng + ?Sized>(
    table: &'a DemolitionTable,
    count: usize,
    rng: &mut R,
) -> Vec<&'a DemolitionRecord> {
    let amount = count.min(table.len());
    let mut indices = rand::seq::index::sample(rng, table.len(), amount).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| &table.records[i]).collect()
}

pub fn geocode_sample(
    records: &[&DemolitionRecord],
    geocoder: &dyn Geocoder,
    query_format: QueryFormat,
) -> Vec<SampleRow> {
    tqdm!(records.iter(), desc = "geocode sample", total = records.len())
        .map(|r| {
            let query = query_format.query(&r.key, &r.locality_cleaned);
            let coord = geocode_or_null(geocoder, &query);
            SampleRow {
                locality: r.key.locality.clone(),
                district: r.key.district.clone(),
                area: r.key.area.clone(),
                query,
                lat: coord.map(|c| c.lat),
                long: coord.map(|c| c.long),
            }
        })
        .collect()
}
