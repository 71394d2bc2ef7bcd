use argminmax::ArgMinMax;

/// One equal-width bucket of a histogram. `start` is inclusive, `end` exclusive
/// except for the last bucket, which also holds the maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Returns None for an empty slice (argminmax panics on empty input)
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    Some((get_min(vec), get_max(vec)))
}

/// Keep only defined, finite values (order preserved)
pub fn defined_values(values: &[Option<f64>]) -> Vec<f64> {
    values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect()
}

/// Bucket `values` into `n_bins` equal-width bins spanning [min, max].
/// A single distinct value gets one bin of width 1 centred on it.
pub fn histogram(values: &[f64], n_bins: usize) -> Vec<HistogramBin> {
    let Some((min, max)) = get_min_max(values) else {
        return Vec::new();
    };
    if n_bins == 0 {
        return Vec::new();
    }

    if max == min {
        return vec![HistogramBin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len(),
        }];
    }

    let bin_width = (max - min) / n_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..n_bins)
        .map(|i| HistogramBin {
            start: min + i as f64 * bin_width,
            end: min + (i + 1) as f64 * bin_width,
            count: 0,
        })
        .collect();

    for value in values {
        let index = ((value - min) / bin_width) as usize;
        // Clamping handles the maximum and floating-point inaccuracies at the boundary.
        bins[index.min(n_bins - 1)].count += 1;
    }
    bins
}
