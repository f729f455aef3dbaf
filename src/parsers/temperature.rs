//! Parser for the HKO regional temperature CSV (one row per automatic
//! weather station).

use crate::errors::ParseError;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Parsed temperature feed: the per-station map (joined directly onto
/// per-station AQHI in the per-station variant) and the territory-wide mean
/// (applied uniformly in the mean variant).
#[derive(Debug, Clone, Default)]
pub struct TemperatureReadings {
    pub by_station: HashMap<String, f64>,
    pub mean: Option<f64>,
}

const TEMPERATURE_TOKEN: &str = "Temperature";
const STATION_TOKEN: &str = "Station";

/// Scans the header row for the first column containing "Temperature" and
/// collects every numeric cell under it. Missing or unparseable cells are
/// skipped; a feed with no such column is structurally broken.
pub fn parse_temperature_csv(body: &str) -> Result<TemperatureReadings, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let temp_idx = headers
        .iter()
        .position(|h| h.contains(TEMPERATURE_TOKEN))
        .ok_or_else(|| ParseError::MissingColumn {
            token: TEMPERATURE_TOKEN.to_string(),
        })?;
    // The station identifier column, falling back to the first column.
    let station_idx = headers
        .iter()
        .position(|h| h.contains(STATION_TOKEN))
        .unwrap_or(0);

    let mut by_station = HashMap::new();
    let mut values = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping malformed temperature row: {e}");
                continue;
            }
        };
        let Some(raw) = record.get(temp_idx) else {
            continue;
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => {
                values.push(value);
                if let Some(station) = record.get(station_idx) {
                    by_station.insert(station.trim().to_string(), value);
                }
            }
            Err(_) if raw.trim().is_empty() => {}
            Err(_) => debug!(value = raw, "unparseable temperature cell, skipping"),
        }
    }

    let mean = if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    };

    Ok(TemperatureReadings { by_station, mean })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TEMPERATURE_CSV: &str = "\
Date time,Automatic Weather Station,Air Temperature (°C)
202601150900,King's Park,14.2
202601150900,Sha Tin,15.8
202601150900,Ta Kwu Ling,
202601150900,Cheung Chau,M
202601150900,Tuen Mun,17.0
";

    #[test]
    fn test_mean_over_valid_cells_only() {
        let readings = parse_temperature_csv(TEMPERATURE_CSV).unwrap();
        assert_eq!(readings.by_station.len(), 3);
        assert_relative_eq!(readings.mean.unwrap(), (14.2 + 15.8 + 17.0) / 3.0);
    }

    #[test]
    fn test_per_station_map() {
        let readings = parse_temperature_csv(TEMPERATURE_CSV).unwrap();
        assert_eq!(readings.by_station.get("King's Park"), Some(&14.2));
        assert_eq!(readings.by_station.get("Ta Kwu Ling"), None);
        assert_eq!(readings.by_station.get("Cheung Chau"), None);
    }

    #[test]
    fn test_missing_temperature_column() {
        let csv = "Date time,Automatic Weather Station,Wind Speed\n202601150900,Sha Tin,12\n";
        let err = parse_temperature_csv(csv).unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn { .. }));
    }

    #[test]
    fn test_all_cells_invalid_yields_no_mean() {
        let csv = "Automatic Weather Station,Air Temperature (°C)\nSha Tin,M\nTai Po,\n";
        let readings = parse_temperature_csv(csv).unwrap();
        assert!(readings.by_station.is_empty());
        assert_eq!(readings.mean, None);
    }
}
