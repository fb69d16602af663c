pub mod clean;
pub mod matching;
pub mod model;
