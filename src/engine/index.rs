//! Client-id keyed view over a run's trust scores.
//!
//! Aggregation and energy estimation both look up each client's trust by
//! id. The index replaces a linear scan per client with a map lookup while
//! keeping the same semantics: the first score carrying an id wins, and a
//! missing id reads as zero trust.

use std::collections::BTreeMap;

use super::trust::TrustRecord;
use crate::dataset::ClientId;

/// Trust assumed for a client with no score.
pub const MISSING_TRUST: f64 = 0.0;

/// Borrowed `ClientId -> TrustRecord` map.
#[derive(Clone, Debug, Default)]
pub struct TrustIndex<'a> {
    entries: BTreeMap<ClientId, &'a TrustRecord>,
}

impl<'a> TrustIndex<'a> {
    /// Index a sequence of scores. On duplicate ids the earliest entry is kept.
    pub fn new(scores: &'a [TrustRecord]) -> Self {
        let mut entries = BTreeMap::new();
        for trust in scores {
            entries.entry(trust.client_id).or_insert(trust);
        }
        Self { entries }
    }

    /// Published record for a client, if scored.
    pub fn get(&self, client_id: ClientId) -> Option<&'a TrustRecord> {
        self.entries.get(&client_id).copied()
    }

    /// Trust score for a client ([`MISSING_TRUST`] if not scored).
    pub fn trust_score(&self, client_id: ClientId) -> f64 {
        self.get(client_id)
            .map(|t| t.trust_score)
            .unwrap_or(MISSING_TRUST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::trust::TrustLevel;

    fn trust(client_id: ClientId, trust_score: f64) -> TrustRecord {
        TrustRecord {
            client_id,
            w_k: 1.0,
            d_k: 0.0,
            trust_score,
            trust_level: TrustLevel::High,
        }
    }

    #[test]
    fn test_lookup() {
        let scores = vec![trust(1, 1.0), trust(2, 0.8)];
        let index = TrustIndex::new(&scores);
        assert_eq!(index.trust_score(2), 0.8);
        assert_eq!(index.get(1).map(|t| t.trust_score), Some(1.0));
    }

    #[test]
    fn test_missing_reads_as_zero() {
        let scores = vec![trust(1, 1.0)];
        let index = TrustIndex::new(&scores);
        assert_eq!(index.trust_score(9), MISSING_TRUST);
        assert!(index.get(9).is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let scores = vec![trust(4, 0.9), trust(4, 0.1)];
        let index = TrustIndex::new(&scores);
        assert_eq!(index.trust_score(4), 0.9);
    }

    #[test]
    fn test_empty() {
        let index = TrustIndex::new(&[]);
        assert!(index.get(1).is_none());
        assert_eq!(index.trust_score(1), 0.0);
    }
}
