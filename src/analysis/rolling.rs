//! Trailing-window statistics over a single column.
//!
//! Every function returns one entry per input row. A row is `None` until its
//! window is full, and stays `None` whenever the window contains an undefined
//! value or the statistic itself is not finite.

use itertools::Itertools;
use statrs::statistics::Statistics;

/// Simple moving average: mean of `values[i-window+1..=i]`
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let defined: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
    rolling_apply(&defined, window, |w| w.iter().mean())
}

/// Sample standard deviation (n - 1 denominator) over a trailing window
pub fn rolling_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    rolling_apply(values, window, |w| w.iter().std_dev())
}

/// Fractional change from the previous row: `(v[i] - v[i-1]) / v[i-1]`.
/// Row 0 has no predecessor. A zero predecessor leaves the row undefined.
pub fn pct_change(values: &[f64]) -> Vec<Option<f64>> {
    if values.is_empty() {
        return Vec::new();
    }

    std::iter::once(None)
        .chain(values.iter().tuple_windows().enumerate().map(|(i, (prev, curr))| {
            if *prev == 0.0 {
                log::warn!(
                    "Previous close is zero at row {}; daily return left undefined",
                    i + 1
                );
                return None;
            }
            Some((curr - prev) / prev).filter(|r| r.is_finite())
        }))
        .collect()
}

fn rolling_apply<F>(values: &[Option<f64>], window: usize, statistic: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    if window == 0 {
        return vec![None; values.len()];
    }

    let mut buffer: Vec<f64> = Vec::with_capacity(window);
    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            buffer.clear();
            for value in &values[i + 1 - window..=i] {
                buffer.push((*value)?);
            }
            Some(statistic(&buffer)).filter(|v| v.is_finite())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("value should be defined");
        assert!(
            (actual - expected).abs() < 1e-10,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rolling_mean_leading_window_undefined() {
        let means = rolling_mean(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(means.len(), 5);
        assert_eq!(means[0], None);
        assert_eq!(means[1], None);
        assert_close(means[2], 2.0);
        assert_close(means[3], 3.0);
        assert_close(means[4], 4.0);
    }

    #[test]
    fn test_rolling_mean_window_longer_than_series() {
        assert_eq!(rolling_mean(&[1.0, 2.0], 5), vec![None, None]);
        assert!(rolling_mean(&[], 5).is_empty());
    }

    #[test]
    fn test_rolling_mean_window_of_one_is_identity() {
        let means = rolling_mean(&[7.0, 8.0], 1);
        assert_close(means[0], 7.0);
        assert_close(means[1], 8.0);
    }

    #[test]
    fn test_zero_window_is_all_undefined() {
        assert_eq!(rolling_mean(&[1.0, 2.0], 0), vec![None, None]);
    }

    #[test]
    fn test_rolling_std_is_sample_std() {
        // Sample std of [2, 4, 4, 4, 5, 5, 7, 9] = sqrt(32 / 7)
        let values: Vec<Option<f64>> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .into_iter()
            .map(Some)
            .collect();
        let stds = rolling_std(&values, 8);
        assert!(stds[..7].iter().all(Option::is_none));
        assert_close(stds[7], (32.0_f64 / 7.0).sqrt());
    }

    #[test]
    fn test_rolling_std_waits_for_defined_window() {
        let values = [None, Some(1.0), Some(2.0), Some(3.0)];
        let stds = rolling_std(&values, 3);
        // Window at row 2 still contains the undefined row 0
        assert_eq!(stds[2], None);
        assert_close(stds[3], 1.0);
    }

    #[test]
    fn test_rolling_std_single_observation_is_undefined() {
        assert_eq!(rolling_std(&[Some(1.0), Some(2.0)], 1), vec![None, None]);
    }

    #[test]
    fn test_pct_change() {
        let changes = pct_change(&[100.0, 102.0, 101.0]);
        assert_eq!(changes[0], None);
        assert_close(changes[1], 0.02);
        assert_close(changes[2], (101.0 - 102.0) / 102.0);
        assert!(pct_change(&[]).is_empty());
        assert_eq!(pct_change(&[5.0]), vec![None]);
    }

    #[test]
    fn test_pct_change_zero_previous_close_is_undefined() {
        let changes = pct_change(&[100.0, 0.0, 50.0, 55.0]);
        assert_close(changes[1], -1.0);
        assert_eq!(changes[2], None);
        assert_close(changes[3], 0.1);
    }
}
