//! Membership-year progress rings

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::constants::{NIGHTS_TARGET, RING_CIRCUMFERENCE, STAYS_TARGET};

/// Counter tracked on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Stays,
    Nights,
}

/// Count that fills a ring; zero is unrepresentable
pub type ProgressTarget = NonZeroU32;

/// Fill fraction in `[0, 1]`: `min(current / target, 1)`, with negative counts as zero
pub fn fill_fraction(current: i64, target: ProgressTarget) -> f64 {
    let current = current.max(0) as f64;
    (current / f64::from(target.get())).min(1.0)
}

/// Per-metric targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressTargets {
    pub stays: ProgressTarget,
    pub nights: ProgressTarget,
}

impl ProgressTargets {
    pub fn target(&self, metric: Metric) -> ProgressTarget {
        match metric {
            Metric::Stays => self.stays,
            Metric::Nights => self.nights,
        }
    }
}

impl Default for ProgressTargets {
    fn default() -> Self {
        Self {
            stays: STAYS_TARGET,
            nights: NIGHTS_TARGET,
        }
    }
}

/// Counters for the current membership year, as handed over by the member SDK
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearStats {
    pub total_stays: i64,
    pub total_nights: i64,
}

/// SVG `stroke-dasharray` values for a ring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingDash {
    pub filled: f64,
    pub circumference: f64,
}

impl RingDash {
    pub fn from_fraction(fraction: f64) -> Self {
        Self {
            filled: fraction.clamp(0.0, 1.0) * RING_CIRCUMFERENCE,
            circumference: RING_CIRCUMFERENCE,
        }
    }

    /// e.g. `"176 264"`
    pub fn dasharray(&self) -> String {
        format!("{} {}", self.filled, self.circumference)
    }
}

/// One ring's worth of progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricProgress {
    pub metric: Metric,
    pub current: i64,
    pub target: ProgressTarget,
    pub fraction: f64,
}

impl MetricProgress {
    pub fn new(metric: Metric, current: i64, target: ProgressTarget) -> Self {
        Self {
            metric,
            current,
            target,
            fraction: fill_fraction(current, target),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }

    pub fn ring(&self) -> RingDash {
        RingDash::from_fraction(self.fraction)
    }
}

/// Both rings shown on the card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierProgress {
    pub stays: MetricProgress,
    pub nights: MetricProgress,
}

impl TierProgress {
    pub fn from_stats(stats: &YearStats, targets: &ProgressTargets) -> Self {
        Self {
            stays: MetricProgress::new(Metric::Stays, stats.total_stays, targets.stays),
            nights: MetricProgress::new(Metric::Nights, stats.total_nights, targets.nights),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(n: u32) -> ProgressTarget {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_fill_fraction() {
        assert_eq!(fill_fraction(5, target(3)), 1.0);
        assert_eq!(fill_fraction(0, target(3)), 0.0);
        assert_eq!(fill_fraction(2, target(4)), 0.5);
        assert_eq!(fill_fraction(3, target(3)), 1.0);
    }

    #[test]
    fn test_negative_counts_are_zero() {
        assert_eq!(fill_fraction(-4, target(7)), 0.0);
    }

    #[test]
    fn test_default_targets() {
        let targets = ProgressTargets::default();
        assert_eq!(targets.target(Metric::Stays).get(), 3);
        assert_eq!(targets.target(Metric::Nights).get(), 7);
        assert_eq!(targets, ProgressTargets { stays: STAYS_TARGET, nights: NIGHTS_TARGET });
    }

    #[test]
    fn test_ring_dash() {
        let half = MetricProgress::new(Metric::Stays, 2, target(4));
        assert_eq!(half.ring().dasharray(), "132 264");

        let over = MetricProgress::new(Metric::Nights, 10, target(7));
        assert!(over.is_complete());
        assert_eq!(over.ring().dasharray(), "264 264");

        let empty = MetricProgress::new(Metric::Nights, 0, target(7));
        assert_eq!(empty.ring().dasharray(), "0 264");
    }

    #[test]
    fn test_tier_progress_from_stats() {
        let stats = YearStats {
            total_stays: 1,
            total_nights: 7,
        };
        let progress = TierProgress::from_stats(&stats, &ProgressTargets::default());

        assert!((progress.stays.fraction - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(progress.nights.fraction, 1.0);
        assert!(!progress.stays.is_complete());
    }

    #[test]
    fn test_zero_target_rejected_by_config() {
        let parsed: Result<ProgressTargets, _> = serde_json::from_str(r#"{"stays": 0}"#);
        assert!(parsed.is_err());
    }
}
