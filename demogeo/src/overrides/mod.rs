mod manual_overrides;

pub use manual_overrides::{ManualOverrides, BUILTIN_OVERRIDES_CSV};
