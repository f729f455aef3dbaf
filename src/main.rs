use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::{info, warn};

mod aggregate;
mod config;
mod districts;
mod errors;
mod fetch;
mod models;
mod parsers;
mod scoring;
mod writer;

use crate::config::Args;
use crate::fetch::FeedClient;
use crate::parsers::temperature::TemperatureReadings;
use crate::scoring::RiskWeights;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aqhi_risk_pipeline=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let client = FeedClient::new(Duration::from_secs(args.timeout_secs))?;

    // Both network calls run to completion, sequentially, before any
    // computation. A fetch failure is a degraded feed, not a crash.
    info!(url = %args.aqhi_url, "fetching AQHI feed");
    let aqhi_body = match client.fetch_aqhi_feed(&args.aqhi_url).await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!("AQHI feed unavailable: {e}");
            None
        }
    };

    info!(url = %args.temperature_url, "fetching temperature feed");
    let temperature_body = match client.fetch_temperature_feed(&args.temperature_url).await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!("temperature feed unavailable: {e}");
            None
        }
    };

    let readings = match aqhi_body {
        Some(body) => match parsers::aqhi::parse_aqhi_feed(args.aqhi_format, &body) {
            Ok(readings) => readings,
            Err(e) => {
                warn!("AQHI feed unparseable: {e}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    if readings.is_empty() {
        anyhow::bail!(
            "no usable AQHI readings after parsing and filtering; leaving {} untouched",
            args.output.display()
        );
    }
    info!(stations = readings.len(), "parsed AQHI readings");

    // Temperature is best-effort: without it the cold term is simply omitted.
    let temperatures = match temperature_body {
        Some(body) => match parsers::temperature::parse_temperature_csv(&body) {
            Ok(temperatures) => temperatures,
            Err(e) => {
                warn!("temperature feed unparseable, continuing without cold term: {e}");
                TemperatureReadings::default()
            }
        },
        None => TemperatureReadings::default(),
    };
    if let Some(mean) = temperatures.mean {
        info!(
            stations = temperatures.by_station.len(),
            mean_c = mean,
            "parsed temperature readings"
        );
    }

    let weights = RiskWeights {
        aqhi: args.aqhi_weight,
        cold: args.cold_weight,
    };
    let updated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    let records = aggregate::build_risk_records(
        &readings,
        &temperatures,
        weights,
        args.aggregation,
        args.temperature_join,
        &updated_at,
    );
    if records.is_empty() {
        anyhow::bail!("aggregation produced no district rows; nothing written");
    }

    writer::write_risk_map(&args.output, &records)?;
    Ok(())
}
