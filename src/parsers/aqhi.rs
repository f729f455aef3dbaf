//! Parsers for the three shapes the AQHI feed has been published in.
//!
//! Per-entry problems (missing name, non-numeric value, no digit run in free
//! text) are skipped with a diagnostic; only a structurally broken document
//! is an error, and the caller decides whether that is fatal.

use crate::config::AqhiFeedFormat;
use crate::errors::ParseError;
use crate::models::StationReading;
use once_cell::sync::Lazy;
use regex::Regex;
use roxmltree::{Document, Node};
use serde::Deserialize;
use tracing::{debug, warn};

pub fn parse_aqhi_feed(
    format: AqhiFeedFormat,
    body: &str,
) -> Result<Vec<StationReading>, ParseError> {
    match format {
        AqhiFeedFormat::StationXml => parse_station_xml(body),
        AqhiFeedFormat::DistrictJson => parse_district_json(body),
        AqhiFeedFormat::Atom => parse_atom_feed(body),
    }
}

/// Per-station XML: every `<station>` element anywhere in the document, with
/// `<name>` and `<aqhi>` children. Tag names are matched by local name so a
/// namespaced variant of the feed parses the same way.
pub fn parse_station_xml(body: &str) -> Result<Vec<StationReading>, ParseError> {
    let doc = Document::parse(body)?;
    let mut readings = Vec::new();

    for station in doc
        .descendants()
        .filter(|n| n.tag_name().name() == "station")
    {
        let name = child_text(&station, "name");
        let value = child_text(&station, "aqhi");
        match (name, value) {
            (Some(name), Some(raw)) => match raw.parse::<f64>() {
                Ok(aqhi) => readings.push(StationReading {
                    name,
                    aqhi: Some(aqhi),
                    temperature: None,
                }),
                Err(_) => warn!(station = %name, value = %raw, "non-numeric AQHI value, skipping entry"),
            },
            _ => debug!("station entry missing name or aqhi element, skipping"),
        }
    }

    Ok(readings)
}

#[derive(Debug, Deserialize)]
struct DistrictEntry {
    #[serde(alias = "DISTRICT", alias = "district")]
    district: String,
    #[serde(alias = "INDEX", alias = "index")]
    index: serde_json::Value,
}

/// District-level JSON: an array of objects with a district name and an
/// `INDEX` field that arrives as either a number or a string. An index that
/// fails numeric conversion means "no data" for that district, never zero.
pub fn parse_district_json(body: &str) -> Result<Vec<StationReading>, ParseError> {
    let entries: Vec<DistrictEntry> = serde_json::from_str(body)?;
    let mut readings = Vec::new();

    for entry in entries {
        let aqhi = match &entry.index {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match aqhi {
            Some(aqhi) => readings.push(StationReading {
                name: entry.district,
                aqhi: Some(aqhi),
                temperature: None,
            }),
            None => warn!(
                district = %entry.district,
                index = %entry.index,
                "unusable INDEX value, treating district as no-data"
            ),
        }
    }

    Ok(readings)
}

/// Atom/RSS feed: each entry's title names a station or district and the
/// entry text embeds the value. Roadside-only stations are excluded from the
/// district model because their readings are not representative of ambient
/// district air quality.
pub fn parse_atom_feed(body: &str) -> Result<Vec<StationReading>, ParseError> {
    let doc = Document::parse(body)?;
    let mut readings = Vec::new();

    for entry in doc
        .descendants()
        .filter(|n| matches!(n.tag_name().name(), "entry" | "item"))
    {
        let Some(title) = child_text(&entry, "title") else {
            debug!("feed entry without title, skipping");
            continue;
        };
        let content = child_text(&entry, "content")
            .or_else(|| child_text(&entry, "summary"))
            .or_else(|| child_text(&entry, "description"));

        let is_roadside = content
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains("roadside")
            || title.to_lowercase().contains("roadside");
        if is_roadside {
            debug!(entry = %title, "roadside station, excluded from district model");
            continue;
        }

        let value = content
            .as_deref()
            .and_then(extract_aqhi_value)
            .or_else(|| extract_aqhi_value(&title));
        match value {
            Some(aqhi) => readings.push(StationReading {
                name: entry_name(&title),
                aqhi: Some(aqhi),
                temperature: None,
            }),
            None => warn!(entry = %title, "no AQHI value found in entry text, skipping"),
        }
    }

    Ok(readings)
}

/// The station/district part of an entry title, with any trailing
/// ": <value>" payload stripped.
fn entry_name(title: &str) -> String {
    match title.split_once(':') {
        Some((name, _)) => name.trim().to_string(),
        None => title.trim().to_string(),
    }
}

static COLON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r":\s*(\d+)").unwrap());
static LEADING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)").unwrap());

/// Pulls the AQHI value out of a feed entry's free text.
///
/// The first contiguous digit run following a colon wins ("Central/Western: 5");
/// otherwise a leading digit run is accepted ("5 Moderate", "10+"). All known
/// upstream formatting variants route through here so a feed-format drift only
/// touches this function.
pub(crate) fn extract_aqhi_value(text: &str) -> Option<f64> {
    if let Some(caps) = COLON_DIGITS.captures(text) {
        return caps[1].parse().ok();
    }
    LEADING_DIGITS
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

fn child_text(node: &Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.tag_name().name() == name)
        .and_then(|c| c.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
