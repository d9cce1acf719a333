//! # FedTrust: Trust-Weighted Federated Averaging with FDIA Detection
//!
//! FedTrust turns per-client sensor readings from a federated deployment
//! into a trust-weighted aggregate, a trust score per client, and the set
//! of clients suspected of False Data Injection Attacks (FDIA).
//!
//! ## Pipeline
//!
//! - [`engine::weights`] - Mean reading `w_k` per client
//! - [`engine::median`] - Lower-middle median of all `w_k`
//! - [`engine::trust`] - `T_k = 1 / (1 + |w_k - median|)` and trust levels
//! - [`engine::fedavg`] - Trust- and sample-weighted FedAvg
//! - [`engine::energy`] - Plain and trust-weighted energy estimates
//! - [`engine::fdia`] - Absolute and statistical anomaly rules
//!
//! ## High-Level API
//!
//! Use [`compute_results()`] for a one-shot run with default settings, or
//! [`TrustEngine`] to supply an [`EngineConfig`].

#![deny(missing_docs)]

pub mod config;
pub mod dataset;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod math;

// Re-exports
pub use config::{ConsistencyPolicy, EngineConfig};
pub use dataset::{Client, ClientId, Dataset, Instance, Reading};
pub use diagnostics::Inconsistency;
pub use engine::{compute_results, ResultsRecord, TrustEngine};
pub use engine::{EnergyRecord, TrustLevel, TrustRecord};
pub use error::FedTrustError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
