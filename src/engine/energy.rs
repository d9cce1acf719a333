//! Energy-consumption estimates per client.
//!
//! Energy is modelled as proportional to the sum of squared readings,
//! scaled by a fixed computation factor `c`. The trust-weighted variant
//! scales each squared reading by the client's trust score, so distrusted
//! clients are charged (and weigh in) less.

use serde::{Deserialize, Serialize};

use super::index::TrustIndex;
use crate::dataset::{Client, ClientId};
use crate::math::round_to;

/// Published energy estimate for one client.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRecord {
    /// Client being estimated.
    pub client_id: ClientId,
    /// Estimated energy, rounded.
    pub energy: f64,
}

/// `c * Σ v²` over the client's readings.
pub fn plain_energy(client: &Client, computation_factor: f64) -> f64 {
    client.values().map(|v| v * v).sum::<f64>() * computation_factor
}

/// `c * Σ v² · T_k` over the client's readings.
pub fn trust_weighted_energy(client: &Client, trust_score: f64, computation_factor: f64) -> f64 {
    client.values().map(|v| v * v * trust_score).sum::<f64>() * computation_factor
}

/// Plain and trust-weighted estimates for every client, in input order.
///
/// Every client is estimated, including ones skipped during scoring; a
/// client with no score is treated as having zero trust.
pub fn energy_estimates(
    clients: &[Client],
    index: &TrustIndex<'_>,
    computation_factor: f64,
    decimals: u32,
) -> (Vec<EnergyRecord>, Vec<EnergyRecord>) {
    clients
        .iter()
        .map(|client| {
            let plain = EnergyRecord {
                client_id: client.id,
                energy: round_to(plain_energy(client, computation_factor), decimals),
            };
            let weighted = EnergyRecord {
                client_id: client.id,
                energy: round_to(
                    trust_weighted_energy(client, index.trust_score(client.id), computation_factor),
                    decimals,
                ),
            };
            (plain, weighted)
        })
        .unzip()
}
