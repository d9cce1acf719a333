//! False Data Injection Attack (FDIA) detection over trust scores.
//!
//! A client is flagged when either rule fires:
//!
//! 1. **Absolute**: its trust score is below the trust threshold (0.75).
//! 2. **Statistical**: its trust score is below `mean - k·σ` of all scores,
//!    where σ is the population standard deviation. Large samples use
//!    `k = 1.5`. Samples of at most 3 use `k = 1.0`, and fall back to the
//!    fixed trust threshold when σ ≤ 0.01 since the spread of so few
//!    scores says nothing.

use std::collections::BTreeSet;

use super::trust::TrustRecord;
use crate::config::EngineConfig;
use crate::dataset::ClientId;
use crate::math::{mean, population_std_dev};

/// Which policy produced the statistical threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdRule {
    /// No scores; nothing can be flagged.
    Empty,
    /// Small sample with usable spread: `mean - small_sample_sigma·σ`.
    SmallSample,
    /// Small sample with negligible spread: fixed trust threshold.
    FixedFallback,
    /// Large sample: `mean - large_sample_sigma·σ`.
    LargeSample,
}

/// Statistics behind the statistical rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnomalyThreshold {
    /// Mean trust score.
    pub mean: f64,
    /// Population standard deviation of trust scores.
    pub std_dev: f64,
    /// Scores strictly below this are flagged.
    pub threshold: f64,
    /// Policy used.
    pub rule: ThresholdRule,
}

/// Compute the statistical-rule threshold for a set of trust scores.
pub fn statistical_threshold(scores: &[f64], config: &EngineConfig) -> AnomalyThreshold {
    if scores.is_empty() {
        return AnomalyThreshold {
            mean: 0.0,
            std_dev: 0.0,
            threshold: f64::NEG_INFINITY,
            rule: ThresholdRule::Empty,
        };
    }

    let mean = mean(scores);
    let std_dev = population_std_dev(scores);

    let (threshold, rule) = if scores.len() <= config.small_sample_size {
        if std_dev > config.min_spread {
            (mean - config.small_sample_sigma * std_dev, ThresholdRule::SmallSample)
        } else {
            (config.trust_threshold, ThresholdRule::FixedFallback)
        }
    } else {
        (mean - config.large_sample_sigma * std_dev, ThresholdRule::LargeSample)
    };

    AnomalyThreshold {
        mean,
        std_dev,
        threshold,
        rule,
    }
}

/// Union of the absolute and statistical rules over published trust scores.
pub fn detect_fdia(scores: &[TrustRecord], config: &EngineConfig) -> BTreeSet<ClientId> {
    if scores.is_empty() {
        return BTreeSet::new();
    }

    let values: Vec<f64> = scores.iter().map(|t| t.trust_score).collect();
    let stats = statistical_threshold(&values, config);

    let flagged: BTreeSet<ClientId> = scores
        .iter()
        .filter(|t| t.trust_score < config.trust_threshold || t.trust_score < stats.threshold)
        .map(|t| t.client_id)
        .collect();

    tracing::debug!(
        mean = stats.mean,
        std_dev = stats.std_dev,
        threshold = stats.threshold,
        rule = ?stats.rule,
        flagged = flagged.len(),
        "fdia detection complete"
    );

    flagged
}
