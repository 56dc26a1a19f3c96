/// Sample points along a density curve.
pub const KDE_POINTS: usize = 200;

/// Gaussian kernel density estimate of `values`, sampled at `points` evenly
/// spaced positions over `[lower, upper]`.
///
/// Bandwidth follows Scott's rule: sample standard deviation times
/// `n^(-1/5)`. Returns an empty curve for fewer than two values or when
/// all values are equal, since no bandwidth exists then.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn kde_curve(values: &[f64], lower: f64, upper: f64, points: usize) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 || points == 0 || upper < lower {
        return Vec::new();
    }

    let count = n as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1.0);
    let bandwidth = variance.sqrt() * count.powf(-0.2);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        return Vec::new();
    }

    let norm = 1.0 / (count * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let step = if points > 1 {
        (upper - lower) / (points - 1) as f64
    } else {
        0.0
    };

    (0..points)
        .map(|i| {
            let x = step.mul_add(i as f64, lower);
            let density = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}

#[cfg(test)]
#[path = "kde_tests.rs"]
mod tests;
