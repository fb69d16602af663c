mod demogeo_app;
mod demogeo_app_error;
mod run;
mod sample;

pub use demogeo_app::{DemogeoApp, DemogeoOperation};
pub use demogeo_app_error::DemogeoAppError;
pub use run::{run, run_with_geocoder};
pub use sample::{geocode_sample, run_sample, sample_records, SampleRow};
