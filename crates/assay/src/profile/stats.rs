//! Descriptive statistics over numeric slices.

/// Arithmetic mean, `None` for an empty slice.
///
/// Finite inputs always give a finite mean: when the plain sum overflows,
/// the values are scaled by `1/n` before summing.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return Some(sum / n);
    }
    Some(values.iter().map(|v| v / n).sum::<f64>()).filter(|m| m.is_finite())
}

/// Sample standard deviation (n − 1 denominator), `None` below two values
/// or when the spread is too large to represent.
///
/// Uses Welford's online update to stay stable on large magnitudes.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mut mean = 0.0;
    let mut m2 = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (x - mean);
    }
    let std = (m2 / (values.len() - 1) as f64).max(0.0).sqrt();
    std.is_finite().then_some(std)
}

/// Sort a copy of the values ascending.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Quantile of already-sorted values with linear interpolation between
/// closest ranks, `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    if frac == 0.0 {
        return Some(sorted[lo]);
    }
    // Weighted form cannot overflow for finite endpoints of opposite sign
    Some(sorted[lo] * (1.0 - frac) + sorted[hi] * frac)
}

/// Median of unsorted values.
pub fn median(values: &[f64]) -> Option<f64> {
    quantile_sorted(&sorted(values), 0.5)
}

/// Pearson correlation of paired observations.
///
/// `None` when fewer than two pairs exist or either side has zero variance.
pub fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
    let (mean_x, mean_y) = (mean(&xs)?, mean(&ys)?);

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= 0.0 || syy <= 0.0 || !sxx.is_finite() || !syy.is_finite() {
        return None;
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean_and_std() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(approx(mean(&v).unwrap(), 5.0));
        // sample std of this classic set is sqrt(32/7)
        assert!(approx(sample_std(&v).unwrap(), (32.0f64 / 7.0).sqrt()));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_std(&[1.0]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(sample_std(&[3.0, 3.0, 3.0]), Some(0.0));
    }

    #[test]
    fn test_linear_quantiles() {
        let v = sorted(&[4.0, 1.0, 3.0, 2.0]);
        assert!(approx(quantile_sorted(&v, 0.25).unwrap(), 1.75));
        assert!(approx(quantile_sorted(&v, 0.5).unwrap(), 2.5));
        assert!(approx(quantile_sorted(&v, 0.75).unwrap(), 3.25));
        assert_eq!(quantile_sorted(&v, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&v, 1.0), Some(4.0));
    }

    #[test]
    fn test_mean_of_huge_values_stays_finite() {
        let v = [1e308, 1e308, 1e308, 0.0];
        let m = mean(&v).unwrap();
        assert!(m.is_finite());
        assert!((m / 7.5e307 - 1.0).abs() < 1e-12);
        assert_eq!(mean(&[f64::MAX, f64::MAX]), Some(f64::MAX));
    }

    #[test]
    fn test_unrepresentable_spread() {
        assert_eq!(sample_std(&[f64::MAX, -f64::MAX, f64::MAX]), None);
        assert!(pearson(&[(f64::MAX, 1.0), (-f64::MAX, 2.0), (0.0, 3.0)]).is_none());
    }

    #[test]
    fn test_quantile_of_opposite_extremes() {
        let v = sorted(&[-f64::MAX, f64::MAX]);
        assert_eq!(quantile_sorted(&v, 0.5), Some(0.0));
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
    }

    #[test]
    fn test_pearson() {
        let perfect: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();
        assert!(approx(pearson(&perfect).unwrap(), 1.0));

        let inverse: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, -(i as f64))).collect();
        assert!(approx(pearson(&inverse).unwrap(), -1.0));

        let flat: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 3.0)).collect();
        assert_eq!(pearson(&flat), None);
        assert_eq!(pearson(&[(1.0, 2.0)]), None);
    }
}
