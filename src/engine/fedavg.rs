//! Federated averaging over client mean readings.
//!
//! Two flavours are computed:
//!
//! - [`trust_weighted_fedavg`]: each client weighted by `T_k * n_k`, so
//!   low-trust clients are suppressed even when they report many readings.
//! - [`conventional_fedavg`]: classic FedAvg (McMahan et al., 2017),
//!   weighted by sample share `n_k / n` only. Vulnerable to a single
//!   injecting client; published alongside for comparison.

use super::index::TrustIndex;
use crate::dataset::Client;

/// Trust- and sample-size-weighted mean of client readings.
///
/// ```text
/// fedAvg = Σ T_k · n_k · w_k / Σ T_k · n_k
/// ```
///
/// Clients absent from `index` contribute nothing. Returns 0.0 when there
/// are no clients or the denominator is zero.
pub fn trust_weighted_fedavg(clients: &[Client], index: &TrustIndex<'_>) -> f64 {
    if clients.is_empty() {
        return 0.0;
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for client in clients {
        let Some(trust) = index.get(client.id) else {
            continue;
        };
        let n_k = client.instance_count() as f64;

        numerator += trust.trust_score * n_k * trust.w_k;
        denominator += trust.trust_score * n_k;
    }

    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Sample-share weighted mean, ignoring trust.
///
/// ```text
/// fedAvg = Σ (n_k / n) · mean_k,   n = Σ n_k
/// ```
///
/// Clients with no readings contribute nothing. Returns 0.0 when there are
/// no readings at all.
pub fn conventional_fedavg(clients: &[Client]) -> f64 {
    let n: usize = clients.iter().map(Client::instance_count).sum();
    if n == 0 {
        return 0.0;
    }

    clients
        .iter()
        .filter(|client| client.instance_count() > 0)
        .map(|client| {
            let n_k = client.instance_count() as f64;
            let mean_k = client.values().sum::<f64>() / n_k;
            (n_k / n as f64) * mean_k
        })
        .sum()
}
