//! Median-deviation trust scoring.
//!
//! Each client's trust score is derived from how far its mean reading
//! `w_k` sits from the population median:
//!
//! ```text
//! d_k = |w_k - median|
//! T_k = 1                 if d_k < tolerance
//! T_k = 1 / (1 + d_k)     otherwise
//! ```
//!
//! `T_k` lies in `(0, 1]`, is 1 exactly at the median, and strictly
//! decreases as the deviation grows. It never reaches 0, so every scored
//! client keeps a (possibly negligible) voice in the aggregate.
//!
//! `d_k` and `T_k` are computed at full precision, then `w_k`, `d_k` and
//! `T_k` are rounded once. The level is classified on the rounded score,
//! and every later stage reads the rounded record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::weights::ClientWeight;
use crate::config::EngineConfig;
use crate::dataset::ClientId;
use crate::diagnostics::{Diagnostics, Inconsistency, Stage};
use crate::math::round_to;

/// Coarse trust classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustLevel {
    /// At the median (within tolerance).
    Perfect,
    /// At or above the trust threshold.
    High,
    /// Below the trust threshold.
    Low,
}

impl TrustLevel {
    /// Classify a trust score.
    pub fn classify(trust_score: f64, config: &EngineConfig) -> Self {
        if trust_score == 1.0 || (trust_score - 1.0).abs() < config.perfect_tolerance {
            TrustLevel::Perfect
        } else if trust_score >= config.trust_threshold {
            TrustLevel::High
        } else {
            TrustLevel::Low
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustLevel::Perfect => write!(f, "Perfect"),
            TrustLevel::High => write!(f, "High"),
            TrustLevel::Low => write!(f, "Low"),
        }
    }
}

/// Published per-client trust entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustRecord {
    /// Client being scored.
    pub client_id: ClientId,
    /// Mean reading, rounded.
    #[serde(rename = "w_k")]
    pub w_k: f64,
    /// Deviation from the median, rounded.
    #[serde(rename = "d_k")]
    pub d_k: f64,
    /// Trust score, rounded.
    pub trust_score: f64,
    /// Trust classification.
    pub trust_level: TrustLevel,
}

/// Trust score for a deviation `d_k`.
pub fn trust_score(d_k: f64, tolerance: f64) -> f64 {
    if d_k < tolerance {
        1.0
    } else {
        1.0 / (1.0 + d_k)
    }
}

/// Score every weight against `median`, publishing rounded records.
///
/// Each weight's client id is re-checked against its position in `weights`;
/// mismatches are skipped and recorded. With no median (no weights) the
/// result is empty.
pub fn score_clients(
    weights: &[ClientWeight],
    median: Option<f64>,
    config: &EngineConfig,
    diagnostics: &mut Diagnostics,
) -> Vec<TrustRecord> {
    let Some(median) = median else {
        return Vec::new();
    };

    let mut records = Vec::with_capacity(weights.len());
    for (index, weight) in weights.iter().enumerate() {
        let expected = index as ClientId + 1;
        if weight.client_id != expected {
            diagnostics.record(Inconsistency {
                stage: Stage::TrustScoring,
                index,
                expected,
                actual: weight.client_id,
            });
            continue;
        }

        let d_k = (weight.w_k - median).abs();
        let t_k = round_to(trust_score(d_k, config.perfect_tolerance), config.decimals);

        records.push(TrustRecord {
            client_id: weight.client_id,
            w_k: round_to(weight.w_k, config.decimals),
            d_k: round_to(d_k, config.decimals),
            trust_score: t_k,
            trust_level: TrustLevel::classify(t_k, config),
        });
    }

    records
}
