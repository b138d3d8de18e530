//! Descriptive statistics over a sample of real numbers.
//!
//! Every function takes a borrowed slice and never mutates it. Functions
//! that need ordered data sort a private copy. An empty slice is rejected
//! with [`MathStatsError::InvalidInput`](crate::MathStatsError) before
//! any other work is done.
//!
//! # Algorithms
//!
//! - **Mean**: plain summation divided by the count.
//! - **Variance/StdDev**: two-pass, squared deviations from the mean.
//!   Population variants divide by `n`, sample variants by `n − 1`
//!   (Bessel's correction).
//! - **Median/Mode**: sort a copy under IEEE 754 total order
//!   ([`f64::total_cmp`]), then index or run-length count.

use crate::error::{invalid_input, Result};

/// Computes the arithmetic mean.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
///
/// # Examples
/// ```
/// use mathstats::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(), 3.0);
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    ensure_non_empty("mean", data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Clones and sorts the data, then returns the middle element (or the
/// average of the two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
///
/// # Examples
/// ```
/// use mathstats::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    ensure_non_empty("median", data)?;
    let sorted = sorted_copy(data);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Returns the most frequent value.
///
/// When several values share the highest frequency, the smallest of them
/// is returned. Values are compared for exact equality, so `1.0` and
/// `1.0 + f64::EPSILON` are tallied separately.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
///
/// # Examples
/// ```
/// use mathstats::stats::mode;
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0, 3.0]).unwrap(), 1.0);
/// assert_eq!(mode(&[4.0, 7.0, 7.0]).unwrap(), 7.0);
/// ```
pub fn mode(data: &[f64]) -> Result<f64> {
    ensure_non_empty("mode", data)?;
    let sorted = sorted_copy(data);
    let mut best = sorted[0];
    let mut best_count = 0;
    // Runs arrive in ascending order; a strict `>` keeps the smallest
    // value among equally frequent candidates.
    for run in sorted.chunk_by(|a, b| a.total_cmp(b).is_eq()) {
        if run.len() > best_count {
            best = run[0];
            best_count = run.len();
        }
    }
    Ok(best)
}

/// Returns the minimum value in the slice.
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
///
/// # Examples
/// ```
/// use mathstats::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]).unwrap(), 1.0);
/// ```
pub fn min(data: &[f64]) -> Result<f64> {
    ensure_non_empty("min", data)?;
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Returns the maximum value in the slice.
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
///
/// # Examples
/// ```
/// use mathstats::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]).unwrap(), 5.0);
/// ```
pub fn max(data: &[f64]) -> Result<f64> {
    ensure_non_empty("max", data)?;
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Returns `max − min`, computed in a single pass.
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
///
/// # Examples
/// ```
/// use mathstats::stats::range;
/// assert_eq!(range(&[3.0, 1.0, 4.0, 1.0, 5.0]).unwrap(), 4.0);
/// ```
pub fn range(data: &[f64]) -> Result<f64> {
    ensure_non_empty("range", data)?;
    let (lo, hi) = data
        .iter()
        .fold((data[0], data[0]), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    Ok(hi - lo)
}

/// Computes the population variance (denominator `n`).
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
///
/// # Examples
/// ```
/// use mathstats::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64]) -> Result<f64> {
    ensure_non_empty("variance", data)?;
    Ok(sum_squared_deviations(data) / data.len() as f64)
}

/// Computes the population standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// - `InvalidInput` if `data` is empty.
pub fn standard_deviation(data: &[f64]) -> Result<f64> {
    variance(data).map(f64::sqrt)
}

/// Computes the sample variance with Bessel's correction (denominator
/// `n − 1`).
///
/// # Errors
/// - `InvalidInput` if `data` is empty or has fewer than 2 elements.
///
/// # Examples
/// ```
/// use mathstats::stats::sample_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((sample_variance(&v).unwrap() - 4.571428571428571).abs() < 1e-12);
/// assert!(sample_variance(&[1.0]).is_err());
/// ```
pub fn sample_variance(data: &[f64]) -> Result<f64> {
    ensure_non_empty("sample_variance", data)?;
    if data.len() < 2 {
        return Err(invalid_input(
            "sample_variance",
            "at least 2 data points are required",
        ));
    }
    Ok(sum_squared_deviations(data) / (data.len() - 1) as f64)
}

/// Computes the sample standard deviation, `sqrt(sample_variance(data))`.
///
/// # Errors
/// - `InvalidInput` if `data` is empty or has fewer than 2 elements.
pub fn sample_standard_deviation(data: &[f64]) -> Result<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Every statistic in this module, computed for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// `None` for a single-element sample.
    pub sample_variance: Option<f64>,
    /// `None` for a single-element sample.
    pub sample_std_dev: Option<f64>,
}

impl Summary {
    /// Computes a full summary of `data`.
    ///
    /// # Errors
    /// - `InvalidInput` if `data` is empty.
    ///
    /// # Examples
    /// ```
    /// use mathstats::stats::Summary;
    /// let s = Summary::from_data(&[10.0, 20.0, 30.0, 20.0, 15.0]).unwrap();
    /// assert_eq!(s.mean, 19.0);
    /// assert_eq!(s.median, 20.0);
    /// assert_eq!(s.mode, 20.0);
    /// ```
    pub fn from_data(data: &[f64]) -> Result<Self> {
        ensure_non_empty("summary", data)?;
        let sample_variance = sample_variance(data).ok();
        Ok(Self {
            count: data.len(),
            mean: mean(data)?,
            median: median(data)?,
            mode: mode(data)?,
            min: min(data)?,
            max: max(data)?,
            range: range(data)?,
            variance: variance(data)?,
            std_dev: standard_deviation(data)?,
            sample_variance,
            sample_std_dev: sample_variance.map(f64::sqrt),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_non_empty(op: &'static str, data: &[f64]) -> Result<()> {
    if data.is_empty() {
        return Err(invalid_input(op, "data must not be empty"));
    }
    Ok(())
}

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Σ(xᵢ − x̄)². Caller guarantees `data` is non-empty.
fn sum_squared_deviations(data: &[f64]) -> f64 {
    let m = data.iter().sum::<f64>() / data.len() as f64;
    data.iter()
        .map(|&x| {
            let d = x - m;
            d * d
        })
        .sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating finite f64 vectors of reasonable size.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e9_f64..1e9, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn median_between_min_and_max(data in finite_vec(1, 100)) {
            let med = median(&data).unwrap();
            let mn = min(&data).unwrap();
            let mx = max(&data).unwrap();
            prop_assert!(mn <= med && med <= mx, "min={} median={} max={}", mn, med, mx);
        }

        #[test]
        fn range_is_max_minus_min(data in finite_vec(1, 100)) {
            let r = range(&data).unwrap();
            prop_assert!(r >= 0.0);
            prop_assert_eq!(r, max(&data).unwrap() - min(&data).unwrap());
        }

        #[test]
        fn variance_non_negative(data in finite_vec(1, 100)) {
            let var = variance(&data).unwrap();
            prop_assert!(var >= 0.0, "variance must be >= 0, got {}", var);
        }

        #[test]
        fn variance_of_constant_is_zero(value in -1e6_f64..1e6, n in 1_usize..50) {
            let data = vec![value; n];
            let var = variance(&data).unwrap();
            prop_assert!(var.abs() < 1e-9, "variance of constant should be ~0, got {}", var);
        }

        #[test]
        fn sample_variance_at_least_population(data in finite_vec(2, 100)) {
            let pop = variance(&data).unwrap();
            let sample = sample_variance(&data).unwrap();
            prop_assert!(sample >= pop, "sample={} < population={}", sample, pop);
        }

        #[test]
        fn std_dev_is_sqrt_of_variance(data in finite_vec(2, 100)) {
            let var = sample_variance(&data).unwrap();
            let sd = sample_standard_deviation(&data).unwrap();
            let diff = (sd * sd - var).abs();
            prop_assert!(diff < 1e-10 * var.max(1.0), "sd² should equal variance");
        }

        #[test]
        fn mode_is_a_member_with_max_frequency(
            data in proptest::collection::vec(0_i32..10, 1..60)
        ) {
            let data: Vec<f64> = data.into_iter().map(f64::from).collect();
            let m = mode(&data).unwrap();
            let count = |v: f64| data.iter().filter(|&&x| x == v).count();
            let best = count(m);
            prop_assert!(best > 0);
            for &x in &data {
                let c = count(x);
                prop_assert!(c < best || (c == best && m <= x));
            }
        }

        #[test]
        fn median_is_permutation_invariant(mut data in finite_vec(1, 50)) {
            let before = median(&data).unwrap();
            data.reverse();
            prop_assert_eq!(before, median(&data).unwrap());
        }
    }
}
