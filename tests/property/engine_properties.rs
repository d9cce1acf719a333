use fedtrust::engine::median::lower_median;
use fedtrust::{compute_results, Dataset, TrustLevel};
use proptest::prelude::*;

fn grid() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(0.0f64..100.0, 1..6), 1..10)
}

proptest! {
    #[test]
    fn fedavg_within_client_range(rows in grid()) {
        let results = compute_results(&Dataset::from_grid(rows));
        let w: Vec<f64> = results.trust_scores.iter().map(|t| t.w_k).collect();
        let lo = w.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = w.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(
            results.fed_avg >= lo - 1e-4 && results.fed_avg <= hi + 1e-4,
            "fedAvg {} outside [{}, {}]", results.fed_avg, lo, hi
        );
    }

    #[test]
    fn trust_bounded_and_perfect_at_median(rows in grid()) {
        let results = compute_results(&Dataset::from_grid(rows));
        for t in &results.trust_scores {
            prop_assert!(t.trust_score > 0.0 && t.trust_score <= 1.0);
            prop_assert!(t.d_k >= 0.0);
            if t.d_k == 0.0 {
                prop_assert_eq!(t.trust_level, TrustLevel::Perfect);
            }
        }
        // The median is some client's own mean, so someone is always Perfect
        prop_assert!(results.trust_scores.iter().any(|t| t.trust_level == TrustLevel::Perfect));
    }

    #[test]
    fn low_trust_always_flagged(rows in grid()) {
        let results = compute_results(&Dataset::from_grid(rows));
        for t in &results.trust_scores {
            // Level must agree with the score as published
            let expected = if (t.trust_score - 1.0).abs() < 1e-4 {
                TrustLevel::Perfect
            } else if t.trust_score >= 0.75 {
                TrustLevel::High
            } else {
                TrustLevel::Low
            };
            prop_assert_eq!(t.trust_level, expected, "client {} score {}", t.client_id, t.trust_score);
            if t.trust_score < 0.75 || t.trust_level == TrustLevel::Low {
                prop_assert!(results.is_attacked(t.client_id), "client {} not flagged", t.client_id);
            }
        }
    }

    #[test]
    fn trust_weighted_energy_never_exceeds_plain(rows in grid()) {
        let results = compute_results(&Dataset::from_grid(rows));
        for (plain, weighted) in results.energy_fed_avg.iter().zip(&results.energy_trust_fed_avg) {
            prop_assert_eq!(plain.client_id, weighted.client_id);
            prop_assert!(weighted.energy <= plain.energy);
        }
    }

    #[test]
    fn identical_input_identical_output(rows in grid()) {
        let ds = Dataset::from_grid(rows);
        prop_assert_eq!(compute_results(&ds), compute_results(&ds));
    }

    #[test]
    fn median_is_lower_middle_element(values in prop::collection::vec(-1e6f64..1e6, 1..50)) {
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(lower_median(&values), Some(sorted[(sorted.len() - 1) / 2]));
    }
}
