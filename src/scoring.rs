//! Pure risk scoring: a weighted AQHI term plus a cold-weather penalty,
//! clamped to a fixed 0-10 scale.

use crate::models::RiskLevel;

pub const MAX_RISK: f64 = 10.0;
pub const COLD_THRESHOLD_C: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    pub aqhi: f64,
    pub cold: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            aqhi: 0.6,
            cold: 0.4,
        }
    }
}

impl RiskLevel {
    /// Bucket boundaries: above 7 is high, 4 up to and including 7 is
    /// medium, below 4 is low.
    pub fn from_score(score: f64) -> Self {
        if score > 7.0 {
            RiskLevel::High
        } else if score >= 4.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Combined respiratory risk from air quality and cold exposure.
///
/// An absent input contributes nothing; the cold term applies only strictly
/// below 16 °C, scaled by the deficit. With both inputs absent the score is
/// 0 and the level 低, indistinguishable from confirmed clean air in the
/// output; the fetch-layer diagnostics carry that distinction instead.
pub fn score(aqhi: Option<f64>, temperature: Option<f64>, weights: RiskWeights) -> (f64, RiskLevel) {
    let mut risk = 0.0;
    if let Some(aqhi) = aqhi {
        risk += aqhi * weights.aqhi;
    }
    if let Some(temp) = temperature {
        if temp < COLD_THRESHOLD_C {
            risk += (COLD_THRESHOLD_C - temp) * weights.cold;
        }
    }
    let risk = risk.clamp(0.0, MAX_RISK);
    (risk, RiskLevel::from_score(risk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_score_is_clamped_to_ten() {
        // AQHI alone can exceed the scale at the heavier weights.
        let (risk, level) = score(Some(10.5), Some(2.0), RiskWeights { aqhi: 0.8, cold: 0.2 });
        assert_relative_eq!(risk, 10.0);
        assert_eq!(level, RiskLevel::High);

        let (risk, _) = score(Some(100.0), None, RiskWeights::default());
        assert_relative_eq!(risk, 10.0);
    }

    #[test]
    fn test_score_never_negative() {
        let (risk, level) = score(None, Some(30.0), RiskWeights::default());
        assert_relative_eq!(risk, 0.0);
        assert_eq!(level, RiskLevel::Low);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(RiskLevel::from_score(4.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(4.001), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(7.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(7.001), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(3.999), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
    }

    #[test]
    fn test_cold_term_applies_strictly_below_threshold() {
        let weights = RiskWeights::default();
        let (at_threshold, _) = score(Some(5.0), Some(16.0), weights);
        let (no_temp, _) = score(Some(5.0), None, weights);
        assert_relative_eq!(at_threshold, no_temp);

        let (below, _) = score(Some(5.0), Some(15.0), weights);
        assert_relative_eq!(below, 5.0 * 0.6 + 1.0 * 0.4);
    }

    #[test]
    fn test_both_absent_is_zero_low() {
        let (risk, level) = score(None, None, RiskWeights::default());
        assert_relative_eq!(risk, 0.0);
        assert_eq!(level, RiskLevel::Low);
    }

    #[test]
    fn test_zero_aqhi_is_a_value_not_absence() {
        let weights = RiskWeights::default();
        let (with_zero, _) = score(Some(0.0), Some(10.0), weights);
        let (absent, _) = score(None, Some(10.0), weights);
        // Same number here, but both paths must be defined.
        assert_relative_eq!(with_zero, absent);
        assert_relative_eq!(with_zero, 6.0 * 0.4);
    }

    #[test]
    fn test_worked_scenario_moderate() {
        // AQHI 6.0 at weight 0.8, no temperature.
        let (risk, level) = score(Some(6.0), None, RiskWeights { aqhi: 0.8, cold: 0.2 });
        assert_relative_eq!(risk, 4.8);
        assert_eq!(level, RiskLevel::Medium);
    }

    #[test]
    fn test_worked_scenario_high() {
        // AQHI 9.0, 10 degrees, 0.7/0.3 pairing.
        let (risk, level) = score(Some(9.0), Some(10.0), RiskWeights { aqhi: 0.7, cold: 0.3 });
        assert_relative_eq!(risk, 9.0 * 0.7 + 6.0 * 0.3);
        assert_eq!(level, RiskLevel::High);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let weights = RiskWeights::default();
        assert_eq!(
            score(Some(4.2), Some(11.5), weights),
            score(Some(4.2), Some(11.5), weights)
        );
    }
}
