use serde::Serialize;
use std::fmt;

/// One reading extracted from a feed entry.
///
/// `None` means the feed carried no usable value for that field; an observed
/// zero stays `Some(0.0)`. The two are never collapsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationReading {
    pub name: String,
    pub aqhi: Option<f64>,
    pub temperature: Option<f64>,
}

/// Qualitative risk bucket, serialized as the Chinese label used in the
/// published risk map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "低")]
    Low,
    #[serde(rename = "中")]
    Medium,
    #[serde(rename = "高")]
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低",
            RiskLevel::Medium => "中",
            RiskLevel::High => "高",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row of the risk map. Immutable once built; the field order here
/// is the column order of the CSV.
#[derive(Debug, Clone, Serialize)]
pub struct RiskRecord {
    pub district: String,
    pub aqhi: Option<f64>,
    pub temperature: Option<f64>,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub updated_at: String,
}
