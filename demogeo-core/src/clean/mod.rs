mod column_ops;
mod date_ops;
mod text_ops;

pub use column_ops::{normalize_column_name, normalize_headers, COLUMN_RENAMES};
pub use date_ops::{parse_demolition_date, DEMOLITION_DATE_FORMAT};
pub use text_ops::{clean_area, clean_locality, title_case};
