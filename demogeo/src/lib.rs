pub mod app;
pub mod config;
pub mod geocode;
pub mod input;
pub mod overrides;
pub mod pipeline;
