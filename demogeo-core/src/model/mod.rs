mod bounding_box;
mod coordinate;
mod location_key;
mod location_source;

pub use bounding_box::{parse_bbox, BoundingBox};
pub use coordinate::Coordinate;
pub use location_key::LocationKey;
pub use location_source::LocationSource;
