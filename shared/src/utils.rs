// Numeric helpers shared by the engine calculators and their tests.

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divisor n-1). `None` when fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    // Deviations are taken from the first value rather than the computed mean,
    // so an all-equal slice gives exactly zero.
    let shift = values[0];
    let n = values.len() as f64;
    let (sum, sum_sq) = values.iter().fold((0.0, 0.0), |(s, sq), v| {
        let d = v - shift;
        (s + d, sq + d * d)
    });
    let variance = ((sum_sq - sum * sum / n) / (n - 1.0)).max(0.0);
    Some(variance.sqrt())
}

/// Compares two optional series, treating `None == None` and values within `tolerance` as equal.
pub fn series_approx_eq(a: &[Option<f64>], b: &[Option<f64>], tolerance: f64) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|pair| match pair {
            (None, None) => true,
            (Some(x), Some(y)) => (x - y).abs() <= tolerance,
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_std_dev() {
        // variance = ((2-5)^2 + (4-5)^2 + (4-5)^2 + (4-5)^2 + (5-5)^2 + (5-5)^2 + (7-5)^2 + (9-5)^2) / 7 = 32 / 7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let std = sample_std_dev(&values).unwrap();
        assert!((std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_std_dev_needs_two_points() {
        assert_eq!(sample_std_dev(&[42.0]), None);
        assert_eq!(sample_std_dev(&[]), None);
    }

    #[test]
    fn test_sample_std_dev_constant_is_zero() {
        assert_eq!(sample_std_dev(&[3.0; 5]), Some(0.0));
    }

    #[test]
    fn test_sample_std_dev_constant_inexact_price_is_zero() {
        // Neither value is exact in binary, so the mean drifts from them.
        assert_eq!(sample_std_dev(&[101.37; 30]), Some(0.0));
        assert_eq!(sample_std_dev(&[0.1; 7]), Some(0.0));
    }

    #[test]
    fn test_sample_std_dev_large_offset() {
        let values = [1_000_000.1, 1_000_000.2, 1_000_000.3];
        assert!((sample_std_dev(&values).unwrap() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_series_approx_eq() {
        assert!(series_approx_eq(&[None, Some(1.0)], &[None, Some(1.0 + 1e-12)], 1e-9));
        assert!(!series_approx_eq(&[None, Some(1.0)], &[Some(0.0), Some(1.0)], 1e-9));
        assert!(!series_approx_eq(&[None], &[None, None], 1e-9));
    }
}
