//! Quickstart example: score a handful of honest power-factor meters

use fedtrust::{compute_results, Dataset};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("FedTrust Quickstart Demo\n");

    // 4 clients, 3 power-factor readings each
    let dataset = Dataset::from_grid(vec![
        vec![0.95, 0.96, 0.94],
        vec![0.93, 0.95, 0.94],
        vec![0.96, 0.97, 0.95],
        vec![0.95, 0.95, 0.96],
    ]);

    let results = compute_results(&dataset);

    println!("Trust-weighted FedAvg: {}", results.fed_avg);
    println!("Median w_k:            {:?}\n", results.median);

    for t in &results.trust_scores {
        println!(
            "   Client {}: w_k={:<8} d_k={:<8} T_k={:<8} {}",
            t.client_id, t.w_k, t.d_k, t.trust_score, t.trust_level
        );
    }

    if results.attacked_nodes.is_empty() {
        println!("\nNo attacked nodes detected.");
    } else {
        println!("\nFlagged clients: {:?}", results.attacked_nodes);
    }
}
