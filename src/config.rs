use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_AQHI_URL: &str = "https://aqhi.gov.hk/en/aqhi/past-24-hours.xml";
pub const DEFAULT_TEMPERATURE_URL: &str =
    "https://data.weather.gov.hk/weatherAPI/hko_data/regional-weather/latest_1min_temperature_uc.csv";

/// Shape of the AQHI feed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AqhiFeedFormat {
    /// Per-station XML with `station`/`name`/`aqhi` elements
    StationXml,
    /// JSON array keyed by district with an `INDEX` field
    DistrictJson,
    /// Atom/RSS feed with the value embedded in entry text
    Atom,
}

/// How rows are reduced to one per district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Aggregation {
    /// Worst station represents the district
    KeepMax,
    /// District-level feeds need no dedup
    PerDistrict,
}

/// How temperature readings join onto AQHI readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemperatureJoin {
    /// One territory-wide mean applied to every district
    Mean,
    /// Join by station name; stations without a reading get none
    PerStation,
}

/// Every knob has a compiled-in default that reproduces the no-argument run.
#[derive(Parser, Debug)]
#[command(name = "aqhi_risk_pipeline")]
#[command(about = "Fetch AQHI and temperature feeds and write a per-district risk map", long_about = None)]
pub struct Args {
    /// AQHI feed URL
    #[arg(long, default_value = DEFAULT_AQHI_URL)]
    pub aqhi_url: String,

    /// Temperature feed URL
    #[arg(long, default_value = DEFAULT_TEMPERATURE_URL)]
    pub temperature_url: String,

    /// Shape of the AQHI feed
    #[arg(long, value_enum, default_value_t = AqhiFeedFormat::StationXml)]
    pub aqhi_format: AqhiFeedFormat,

    /// Weight applied to the AQHI value
    #[arg(long, default_value_t = 0.6)]
    pub aqhi_weight: f64,

    /// Weight applied to each degree of temperature deficit below 16 °C
    #[arg(long, default_value_t = 0.4)]
    pub cold_weight: f64,

    /// Reduction policy for districts covered by several stations
    #[arg(long, value_enum, default_value_t = Aggregation::KeepMax)]
    pub aggregation: Aggregation,

    /// How temperature joins onto AQHI readings
    #[arg(long, value_enum, default_value_t = TemperatureJoin::Mean)]
    pub temperature_join: TemperatureJoin,

    /// Output CSV path, fully overwritten each run
    #[arg(long, default_value = "risk_map.csv")]
    pub output: PathBuf,

    /// Per-request network timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}
