//! Turns parsed readings into the final per-district rows.

use crate::config::{Aggregation, TemperatureJoin};
use crate::districts;
use crate::models::{RiskRecord, StationReading};
use crate::parsers::temperature::TemperatureReadings;
use crate::scoring::{self, RiskWeights};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Scores every reading, normalizes names, and reduces to one row per
/// district under the keep-max policy (worst station represents the
/// district). Rows come back sorted by risk score descending; ties keep the
/// first-seen station.
pub fn build_risk_records(
    readings: &[StationReading],
    temperatures: &TemperatureReadings,
    weights: RiskWeights,
    aggregation: Aggregation,
    join: TemperatureJoin,
    updated_at: &str,
) -> Vec<RiskRecord> {
    let mut records: Vec<RiskRecord> = readings
        .iter()
        .map(|reading| {
            let reading = join_temperature(reading, temperatures, join);
            let (risk, level) = scoring::score(reading.aqhi, reading.temperature, weights);
            RiskRecord {
                district: districts::normalize(&reading.name),
                aqhi: reading.aqhi,
                temperature: reading.temperature,
                risk_score: round2(risk),
                risk_level: level,
                updated_at: updated_at.to_string(),
            }
        })
        .collect();

    records.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(Ordering::Equal)
    });

    if aggregation == Aggregation::KeepMax {
        let mut seen = HashSet::new();
        records.retain(|record| seen.insert(record.district.clone()));
    }

    records
}

/// Fills the reading's temperature from the temperature feed. A value the
/// AQHI feed itself carried wins over the join.
fn join_temperature(
    reading: &StationReading,
    temperatures: &TemperatureReadings,
    join: TemperatureJoin,
) -> StationReading {
    let joined = match join {
        TemperatureJoin::Mean => temperatures.mean,
        TemperatureJoin::PerStation => temperatures.by_station.get(&reading.name).copied(),
    };
    StationReading {
        name: reading.name.clone(),
        aqhi: reading.aqhi,
        temperature: reading.temperature.or(joined),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
