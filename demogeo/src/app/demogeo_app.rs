use crate::config::{PipelineConfig, QueryFormat, SampleConfig};
use clap::{Parser, Subcommand};
use demogeo_core::model::{parse_bbox, BoundingBox};

use super::DemogeoAppError;

/// command line tool that attaches coordinates to demolition records
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct DemogeoApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: DemogeoOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum DemogeoOperation {
    /// resolves a coordinate for every demolition record via the gazetteer,
    /// the geocoder and the manual override table, then writes the records
    /// that were placed.
    Run {
        /// TOML run configuration. every setting may also come from
        /// DEMOGEO_* environment variables.
        #[arg(short, long)]
        config: Option<String>,
        /// raw demolitions CSV
        #[arg(long)]
        demolitions_file: Option<String>,
        /// community shapefile
        #[arg(long)]
        gazetteer_file: Option<String>,
        /// output CSV path
        #[arg(short, long)]
        output_file: Option<String>,
        /// optional CSV describing how each distinct location was resolved
        #[arg(long)]
        locations_output_file: Option<String>,
        /// additional manual overrides CSV (locality,lat,long[,note])
        #[arg(long)]
        override_file: Option<String>,
        /// geocoder sanity box as lat_min,lat_max,long_min,long_max
        #[arg(long, value_parser = parse_bbox)]
        bbox: Option<BoundingBox>,
        /// how locations are phrased for the geocoder
        #[arg(long)]
        query_format: Option<QueryFormat>,
        /// skip the geocoder, unmatched locations go straight to manual overrides
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// geocodes a random sample of records and prints the results as CSV,
    /// useful for checking geocoder quality before a full run.
    Sample {
        /// TOML configuration, only the demolitions file and geocoder
        /// sections are read
        #[arg(short, long)]
        config: Option<String>,
        /// raw demolitions CSV
        #[arg(long)]
        demolitions_file: Option<String>,
        /// number of records to sample
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
        /// random seed, for a repeatable sample
        #[arg(long)]
        seed: Option<u64>,
        /// how sampled records are phrased for the geocoder
        #[arg(long, default_value_t = QueryFormat::LocalityDistrictArea)]
        query_format: QueryFormat,
    },
}

impl DemogeoOperation {
    pub fn run(&self) -> Result<(), DemogeoAppError> {
        match self {
            DemogeoOperation::Run {
                config,
                demolitions_file,
                gazetteer_file,
                output_file,
                locations_output_file,
                override_file,
                bbox,
                query_format,
                offline,
            } => {
                let geocoder_type = offline.then(|| String::from("disabled"));
                let overrides = [
                    ("demolitions_file", demolitions_file.clone()),
                    ("gazetteer.file", gazetteer_file.clone()),
                    ("output_file", output_file.clone()),
                    ("locations_output_file", locations_output_file.clone()),
                    ("override_file", override_file.clone()),
                    ("geocoder.type", geocoder_type),
                ];
                let mut conf = PipelineConfig::load(config.as_deref(), &overrides)?;
                if let Some(bbox) = bbox {
                    conf.bounding_box = *bbox;
                }
                if let Some(query_format) = query_format {
                    conf.query_format = *query_format;
                }
                let summary = super::run(&conf)?;
                eprintln!("{summary}");
                Ok(())
            }
            DemogeoOperation::Sample {
                config,
                demolitions_file,
                count,
                seed,
                query_format,
            } => {
                let overrides = [("demolitions_file", demolitions_file.clone())];
                let conf = SampleConfig::load(config.as_deref(), &overrides)?;
                super::run_sample(&conf, *count, *seed, *query_format)
            }
        }
    }
}
