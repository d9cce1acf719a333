//! Lower-middle median of client weights.
//!
//! For an even count the lower of the two middle elements is taken, not
//! their average. Trust scores are defined against this exact value.

/// Lower-middle median of `values`.
///
/// Odd count: the middle element. Even count: the element at index
/// `len / 2 - 1` of the ascending order. Returns `None` for an empty slice.
pub fn lower_median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(sorted[mid - 1])
    } else {
        Some(sorted[mid])
    }
}
