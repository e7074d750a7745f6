//! Small numeric helpers shared by the outlier selection stage.

/// Computes the p-quantile of a sample using linear interpolation between
/// the two nearest order statistics.
///
/// `p` is clamped to `[0.0, 1.0]`. Returns `None` for an empty sample.
///
/// # Examples
///
/// ```
/// use csb_rust::algorithms::stats::percentile;
///
/// let values = vec![10.0, 200.0, 2000.0];
/// assert_eq!(percentile(&values, 0.5), Some(200.0));
/// assert_eq!(percentile(&values, 1.0), Some(2000.0));
/// assert_eq!(percentile(&[], 0.5), None);
/// ```
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let idx = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;

    if lo == hi {
        Some(sorted[lo])
    } else {
        let frac = idx - lo as f64;
        Some(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn interpolates_between_order_statistics() {
        let values = vec![10.0, 200.0, 2000.0];
        // index = 0.99 * 2 = 1.98, so 2% of 200 plus 98% of 2000
        let q99 = percentile(&values, 0.99).unwrap();
        assert!((q99 - 1964.0).abs() < 1e-9);
    }

    #[test]
    fn single_value_is_every_quantile() {
        for p in [0.0, 0.25, 0.99, 1.0] {
            assert_eq!(percentile(&[42.0], p), Some(42.0));
        }
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = percentile(&[3.0, 1.0, 2.0], 0.75);
        let b = percentile(&[1.0, 2.0, 3.0], 0.75);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn quantile_is_monotone_in_p(
            values in prop::collection::vec(0.0f64..10_000.0, 1..50),
            p1 in 0.0f64..1.0,
            p2 in 0.0f64..1.0,
        ) {
            let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
            let q_lo = percentile(&values, lo).unwrap();
            let q_hi = percentile(&values, hi).unwrap();
            prop_assert!(q_lo <= q_hi);
        }

        #[test]
        fn quantile_stays_within_sample_bounds(
            values in prop::collection::vec(-1_000.0f64..1_000.0, 1..50),
            p in 0.0f64..1.0,
        ) {
            let q = percentile(&values, p).unwrap();
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(q >= min && q <= max);
        }
    }
}
