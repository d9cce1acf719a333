//! Error types for FedTrust

use thiserror::Error;

use crate::dataset::ClientId;
use crate::diagnostics::Inconsistency;

/// All possible errors in FedTrust
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FedTrustError {
    /// The dataset contains no clients
    #[error("Empty dataset provided")]
    EmptyDataset,

    /// A client was submitted without any instances
    #[error("Client {client_id} has no instances")]
    EmptyClient {
        /// Offending client
        client_id: ClientId,
    },

    /// A reading failed submission checks
    #[error("Invalid reading for client {client_id}, instance {instance_id}: {reason}")]
    InvalidReading {
        /// Client owning the reading
        client_id: ClientId,
        /// Instance holding the reading
        instance_id: u32,
        /// Why the reading was rejected
        reason: String,
    },

    /// Structural mismatches found while the engine runs with
    /// [`ConsistencyPolicy::Reject`](crate::config::ConsistencyPolicy::Reject)
    #[error("Inconsistent dataset: {} mismatch(es)", .0.len())]
    InconsistentDataset(Vec<Inconsistency>),

    /// Engine configuration is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration text could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// Dataset text could not be parsed
    #[error("Dataset parse error: {0}")]
    DatasetParse(String),
}

impl From<toml::de::Error> for FedTrustError {
    fn from(e: toml::de::Error) -> Self {
        FedTrustError::ConfigParse(e.to_string())
    }
}

impl From<serde_json::Error> for FedTrustError {
    fn from(e: serde_json::Error) -> Self {
        FedTrustError::DatasetParse(e.to_string())
    }
}
