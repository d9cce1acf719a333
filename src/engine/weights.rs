//! Per-client weight extraction.
//!
//! Reduces each client's readings to `w_k`, the arithmetic mean of its
//! instance values. Clients whose id does not match their 1-based position
//! are skipped and reported.

use serde::{Deserialize, Serialize};

use crate::dataset::{Client, ClientId};
use crate::diagnostics::{Diagnostics, Inconsistency, Stage};

/// Mean reading of one client.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientWeight {
    /// Client the weight belongs to.
    pub client_id: ClientId,
    /// Arithmetic mean of the client's readings (0 with no readings).
    pub w_k: f64,
}

/// Extract `w_k` for every client whose id matches its position.
///
/// Malformed readings count as 0. Output order follows input order.
pub fn extract_weights(clients: &[Client], diagnostics: &mut Diagnostics) -> Vec<ClientWeight> {
    let mut weights = Vec::with_capacity(clients.len());

    for (index, client) in clients.iter().enumerate() {
        let expected = index as ClientId + 1;
        if client.id != expected {
            diagnostics.record(Inconsistency {
                stage: Stage::WeightExtraction,
                index,
                expected,
                actual: client.id,
            });
            continue;
        }

        let n_k = client.instance_count();
        let w_k = if n_k > 0 {
            client.values().sum::<f64>() / n_k as f64
        } else {
            0.0
        };

        weights.push(ClientWeight {
            client_id: client.id,
            w_k,
        });
    }

    weights
}

/// Every client whose id does not match its 1-based position.
///
/// Used to validate a dataset once, up front, when mismatches must be
/// rejected rather than skipped.
pub fn position_mismatches(clients: &[Client]) -> Vec<Inconsistency> {
    clients
        .iter()
        .enumerate()
        .filter(|(index, client)| client.id != *index as ClientId + 1)
        .map(|(index, client)| Inconsistency {
            stage: Stage::WeightExtraction,
            index,
            expected: index as ClientId + 1,
            actual: client.id,
        })
        .collect()
}
