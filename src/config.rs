//! Engine configuration.
//!
//! Defaults reproduce the reference constants: computation factor 0.01,
//! trust cutoff 0.75, near-equality tolerance 1e-4, 4-decimal publication.

use serde::{Deserialize, Serialize};

use crate::error::FedTrustError;

/// Default energy computation factor `c`.
pub const DEFAULT_COMPUTATION_FACTOR: f64 = 0.01;

/// Default near-equality tolerance for deviations and trust scores.
pub const DEFAULT_PERFECT_TOLERANCE: f64 = 0.0001;

/// Default trust cutoff: `High` level lower bound and FDIA absolute rule.
pub const DEFAULT_TRUST_THRESHOLD: f64 = 0.75;

/// Default largest sample size handled by the small-sample policy.
pub const DEFAULT_SMALL_SAMPLE_SIZE: usize = 3;

/// Default std-dev multiplier for small samples.
pub const DEFAULT_SMALL_SAMPLE_SIGMA: f64 = 1.0;

/// Default std-dev multiplier for large samples.
pub const DEFAULT_LARGE_SAMPLE_SIGMA: f64 = 1.5;

/// Default spread at or below which small samples fall back to the fixed cutoff.
pub const DEFAULT_MIN_SPREAD: f64 = 0.01;

/// Default publication precision.
pub const DEFAULT_DECIMALS: u32 = 4;

/// What to do when a client id does not match its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyPolicy {
    /// Drop the entry, record a warning, keep going.
    #[default]
    Skip,
    /// Validate once at ingestion and fail with every mismatch found.
    Reject,
}

/// Tunables for [`TrustEngine`](crate::TrustEngine).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Energy computation factor `c`.
    pub computation_factor: f64,
    /// Near-equality tolerance for `d_k` and for the `Perfect` level.
    pub perfect_tolerance: f64,
    /// Trust cutoff shared by the `High` level and the FDIA absolute rule.
    pub trust_threshold: f64,
    /// Samples of at most this size use the small-sample policy.
    pub small_sample_size: usize,
    /// Std-dev multiplier for small samples.
    pub small_sample_sigma: f64,
    /// Std-dev multiplier for large samples.
    pub large_sample_sigma: f64,
    /// Small samples with std-dev at or below this use `trust_threshold`.
    pub min_spread: f64,
    /// Decimal places applied to published values.
    pub decimals: u32,
    /// Handling of id/position mismatches.
    pub consistency: ConsistencyPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            computation_factor: DEFAULT_COMPUTATION_FACTOR,
            perfect_tolerance: DEFAULT_PERFECT_TOLERANCE,
            trust_threshold: DEFAULT_TRUST_THRESHOLD,
            small_sample_size: DEFAULT_SMALL_SAMPLE_SIZE,
            small_sample_sigma: DEFAULT_SMALL_SAMPLE_SIGMA,
            large_sample_sigma: DEFAULT_LARGE_SAMPLE_SIGMA,
            min_spread: DEFAULT_MIN_SPREAD,
            decimals: DEFAULT_DECIMALS,
            consistency: ConsistencyPolicy::Skip,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, FedTrustError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style override of the consistency policy.
    pub fn with_consistency(mut self, policy: ConsistencyPolicy) -> Self {
        self.consistency = policy;
        self
    }

    /// Check every tunable is in range.
    pub fn validate(&self) -> Result<(), FedTrustError> {
        let non_negative = [
            ("computation_factor", self.computation_factor),
            ("small_sample_sigma", self.small_sample_sigma),
            ("large_sample_sigma", self.large_sample_sigma),
            ("min_spread", self.min_spread),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FedTrustError::InvalidConfig(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..1.0).contains(&self.perfect_tolerance) {
            return Err(FedTrustError::InvalidConfig(format!(
                "perfect_tolerance must be in [0, 1), got {}",
                self.perfect_tolerance
            )));
        }

        if !(self.trust_threshold > 0.0 && self.trust_threshold <= 1.0) {
            return Err(FedTrustError::InvalidConfig(format!(
                "trust_threshold must be in (0, 1], got {}",
                self.trust_threshold
            )));
        }

        if self.decimals > 12 {
            return Err(FedTrustError::InvalidConfig(format!(
                "decimals must be at most 12, got {}",
                self.decimals
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.computation_factor, 0.01);
        assert_eq!(config.trust_threshold, 0.75);
        assert_eq!(config.small_sample_size, 3);
        assert_eq!(config.decimals, 4);
        assert_eq!(config.consistency, ConsistencyPolicy::Skip);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = EngineConfig::from_toml_str(
            r#"
            computation_factor = 0.02
            consistency = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(config.computation_factor, 0.02);
        assert_eq!(config.consistency, ConsistencyPolicy::Reject);
        assert_eq!(config.large_sample_sigma, DEFAULT_LARGE_SAMPLE_SIGMA);
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_from_toml_syntax_error() {
        let err = EngineConfig::from_toml_str("decimals = ").unwrap_err();
        assert!(matches!(err, FedTrustError::ConfigParse(_)));
    }

    #[test]
    fn test_from_toml_out_of_range() {
        let err = EngineConfig::from_toml_str("trust_threshold = 1.5").unwrap_err();
        assert!(matches!(err, FedTrustError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.computation_factor = -1.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.perfect_tolerance = 1.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.large_sample_sigma = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.decimals = 20;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_consistency() {
        let config = EngineConfig::default().with_consistency(ConsistencyPolicy::Reject);
        assert_eq!(config.consistency, ConsistencyPolicy::Reject);
    }
}
