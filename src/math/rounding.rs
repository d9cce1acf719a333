//! Fixed-decimal rounding for published values.

/// Round `value` to `decimals` places, half away from zero.
///
/// Applied only when a value is published. Intermediate computation keeps
/// full precision.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    // Normalize -0.0 so identical outputs serialize identically
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_four_places() {
        assert_eq!(round_to(1.0 / 91.0, 4), 0.011);
        assert_eq!(round_to(0.333_333, 4), 0.3333);
        assert_eq!(round_to(2.666_66, 4), 2.6667);
    }

    #[test]
    fn test_round_exact_values_unchanged() {
        assert_eq!(round_to(10.0, 4), 10.0);
        assert_eq!(round_to(0.75, 4), 0.75);
    }

    #[test]
    fn test_round_zero_decimals() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(2.4, 0), 2.0);
    }

    #[test]
    fn test_negative_zero_normalized() {
        let r = round_to(-0.000_01, 4);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }
}
