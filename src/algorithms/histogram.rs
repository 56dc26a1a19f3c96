/// Bin count used when a histogram spec does not set one.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// One equal-width bin. `upper` is exclusive except for the last bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Count `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// A `bins` of 0 is treated as 1. When every value is equal, a single
/// unit-width bin centered on that value holds them all.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((&first, rest)) = values.split_first() else {
        return Vec::new();
    };
    let (min, max) = rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if max - min <= 0.0 {
        return vec![HistogramBin {
            lower: min - 0.5,
            upper: min + 0.5,
            count: values.len(),
        }];
    }

    let bins = bins.max(1);
    let step = (max - min) / bins as f64;
    let mut counts = vec![0_usize; bins];
    for &value in values {
        let index = (((value - min) / step) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: step.mul_add(i as f64, min),
            upper: if i + 1 == bins {
                max
            } else {
                step.mul_add((i + 1) as f64, min)
            },
            count,
        })
        .collect()
}

#[cfg(test)]
#[path = "histogram_tests.rs"]
mod tests;
