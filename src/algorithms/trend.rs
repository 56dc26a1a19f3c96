/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Fit an ordinary least-squares line through `(xs[i], ys[i])`.
///
/// Returns `None` for fewer than two points, mismatched lengths, or when
/// every x is equal (vertical line).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn trend_line(xs: &[f64], ys: &[f64]) -> Option<TrendLine> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let (lo, hi) = xs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    if hi - lo <= 0.0 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (sxy, sxx) = xs
        .iter()
        .zip(ys)
        .fold((0.0_f64, 0.0_f64), |(sxy, sxx), (&x, &y)| {
            let dx = x - mean_x;
            (dx.mul_add(y - mean_y, sxy), dx.mul_add(dx, sxx))
        });

    let slope = sxy / sxx;
    if !slope.is_finite() {
        return None;
    }

    Some(TrendLine {
        slope,
        intercept: slope.mul_add(-mean_x, mean_y),
    })
}

/// 1-based iteration numbers used as the x axis of line charts.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn iteration_axis(len: usize) -> Vec<f64> {
    (1..=len).map(|i| i as f64).collect()
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
