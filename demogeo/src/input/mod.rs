mod demolition_table;
mod gazetteer;
mod gazetteer_source;

pub use demolition_table::{DemolitionRecord, DemolitionTable, REQUIRED_COLUMNS};
pub use gazetteer::{Gazetteer, GazetteerEntry, GazetteerMatch};
pub use gazetteer_source::GazetteerSource;
