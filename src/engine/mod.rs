//! Trust engine: from a client dataset to a results record.
//!
//! The pipeline runs strictly in this order, each stage feeding the next:
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Weight extraction | [`weights`] | `w_k` per client |
//! | Median | [`median`] | lower-middle median of `w_k` |
//! | Trust scoring | [`trust`] | `d_k`, `T_k`, level per client |
//! | Aggregation | [`fedavg`] | trust-weighted and conventional FedAvg |
//! | Energy | [`energy`] | plain and trust-weighted estimates |
//! | FDIA detection | [`fdia`] | flagged client ids |
//!
//! Every run is a pure function of its input. Nothing is cached between
//! calls. Trust records are rounded once when scored, and aggregation,
//! energy and detection all read those rounded records.

pub mod energy;
pub mod fdia;
pub mod fedavg;
pub mod index;
pub mod median;
pub mod trust;
pub mod weights;

pub use energy::EnergyRecord;
pub use fdia::detect_fdia;
pub use fedavg::{conventional_fedavg, trust_weighted_fedavg};
pub use index::TrustIndex;
pub use median::lower_median;
pub use trust::{TrustLevel, TrustRecord};
pub use weights::ClientWeight;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::{ConsistencyPolicy, EngineConfig};
use crate::dataset::{ClientId, Dataset};
use crate::diagnostics::{Diagnostics, Inconsistency};
use crate::error::FedTrustError;
use crate::math::round_to;

/// Everything the engine publishes for one dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsRecord {
    /// Trust-weighted federated average.
    pub fed_avg: f64,
    /// Sample-share federated average, ignoring trust.
    pub conventional_fed_avg: f64,
    /// Lower-middle median of `w_k` (`None` when no client survived).
    pub median: Option<f64>,
    /// Per-client trust, in input order.
    pub trust_scores: Vec<TrustRecord>,
    /// Clients flagged as FDIA-compromised.
    pub attacked_nodes: BTreeSet<ClientId>,
    /// Plain energy estimate per client.
    pub energy_fed_avg: Vec<EnergyRecord>,
    /// Trust-weighted energy estimate per client.
    pub energy_trust_fed_avg: Vec<EnergyRecord>,
    /// Entries skipped because their id did not match their position.
    pub warnings: Vec<Inconsistency>,
}

impl ResultsRecord {
    /// Whether a client was flagged.
    pub fn is_attacked(&self, client_id: ClientId) -> bool {
        self.attacked_nodes.contains(&client_id)
    }

    /// Published trust entry for a client.
    pub fn trust_for(&self, client_id: ClientId) -> Option<&TrustRecord> {
        self.trust_scores.iter().find(|t| t.client_id == client_id)
    }
}

/// Stateless trust engine parameterized by an [`EngineConfig`].
///
/// # Example
///
/// ```rust
/// use fedtrust::{Dataset, TrustEngine};
///
/// let engine = TrustEngine::default();
/// let dataset = Dataset::from_grid(vec![vec![10.0], vec![10.0], vec![100.0]]);
///
/// let results = engine.compute(&dataset).unwrap();
/// assert!(results.is_attacked(3));
/// assert_eq!(results.fed_avg, 10.4923);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrustEngine {
    config: EngineConfig,
}

impl TrustEngine {
    /// Create an engine, validating the configuration.
    pub fn new(config: EngineConfig) -> Result<Self, FedTrustError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the results record for `dataset`.
    ///
    /// Under [`ConsistencyPolicy::Skip`] this never fails; mismatched
    /// entries are dropped and listed in [`ResultsRecord::warnings`]. Under
    /// [`ConsistencyPolicy::Reject`] the dataset is validated once up front
    /// and any mismatch returns [`FedTrustError::InconsistentDataset`].
    pub fn compute(&self, dataset: &Dataset) -> Result<ResultsRecord, FedTrustError> {
        if self.config.consistency == ConsistencyPolicy::Reject {
            let mismatches = weights::position_mismatches(&dataset.clients);
            if !mismatches.is_empty() {
                return Err(FedTrustError::InconsistentDataset(mismatches));
            }
        }
        Ok(self.run(dataset))
    }

    fn run(&self, dataset: &Dataset) -> ResultsRecord {
        let config = &self.config;
        let clients = &dataset.clients;
        let mut diagnostics = Diagnostics::new();

        let weights = weights::extract_weights(clients, &mut diagnostics);
        let w_values: Vec<f64> = weights.iter().map(|w| w.w_k).collect();
        let median = median::lower_median(&w_values);

        tracing::debug!(
            clients = clients.len(),
            weighted = weights.len(),
            median = ?median,
            "extracted client weights"
        );

        let scores = trust::score_clients(&weights, median, config, &mut diagnostics);
        let (fed_avg, (energy_fed_avg, energy_trust_fed_avg)) = {
            let index = TrustIndex::new(&scores);
            (
                fedavg::trust_weighted_fedavg(clients, &index),
                energy::energy_estimates(clients, &index, config.computation_factor, config.decimals),
            )
        };
        let conventional = fedavg::conventional_fedavg(clients);
        let attacked_nodes = fdia::detect_fdia(&scores, config);

        tracing::debug!(
            scored = scores.len(),
            fed_avg,
            conventional_fed_avg = conventional,
            attacked = attacked_nodes.len(),
            skipped = diagnostics.len(),
            "trust computation complete"
        );

        ResultsRecord {
            fed_avg: round_to(fed_avg, config.decimals),
            conventional_fed_avg: round_to(conventional, config.decimals),
            median: median.map(|m| round_to(m, config.decimals)),
            trust_scores: scores,
            attacked_nodes,
            energy_fed_avg,
            energy_trust_fed_avg,
            warnings: diagnostics.into_entries(),
        }
    }
}

/// Compute results with the default configuration.
///
/// Mismatched entries are skipped and reported in
/// [`ResultsRecord::warnings`]; this never fails.
pub fn compute_results(dataset: &Dataset) -> ResultsRecord {
    TrustEngine::default().run(dataset)
}
