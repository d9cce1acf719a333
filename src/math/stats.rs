//! Summary statistics over f64 slices.
//!
//! Summation always runs in slice order so results are reproducible
//! bit-for-bit for identical inputs.

/// Arithmetic mean of a slice. Returns 0.0 for an empty slice.
pub fn mean(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / v.len() as f64
}

/// Population standard deviation (divides by `n`, not `n - 1`).
/// Returns 0.0 for an empty slice.
pub fn population_std_dev(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    let m = mean(v);
    let variance = v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / v.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
        assert_eq!(mean(&[7.0]), 7.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_std_dev() {
        // Classic example: population std-dev of [2,4,4,4,5,5,7,9] is exactly 2
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std_dev(&v) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_constant_and_empty() {
        assert_eq!(population_std_dev(&[0.5, 0.5, 0.5]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }
}
