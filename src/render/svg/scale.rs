//! Value-to-coordinate mapping for chart axes.

/// Linear map from a data domain onto a coordinate range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// A zero-width domain is widened by 0.5 on each side.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (lo, hi) = domain;
        let domain = if (hi - lo).abs() < f64::EPSILON {
            (lo - 0.5, hi + 0.5)
        } else {
            domain
        };
        Self { domain, range }
    }

    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        ((value - d0) / (d1 - d0)).mul_add(r1 - r0, r0)
    }

    /// Position of `value` as a fraction of the domain.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        (value - d0) / (d1 - d0)
    }

    /// `count + 1` evenly spaced values from the low to the high end of the domain.
    #[must_use]
    pub fn ticks(&self, count: u32) -> Vec<f64> {
        let count = count.max(1);
        let (d0, d1) = self.domain;
        let step = (d1 - d0) / f64::from(count);
        (0..=count)
            .map(|i| step.mul_add(f64::from(i), d0))
            .collect()
    }
}

/// Domain covering `values` plus 10% headroom on each side.
///
/// With `include_zero` the domain is extended to 0 first, and no headroom is
/// added below a zero baseline. Empty input yields `(0, 1)`.
#[must_use]
pub fn padded_domain(values: impl IntoIterator<Item = f64>, include_zero: bool) -> (f64, f64) {
    let (mut lo, mut hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo > hi {
        return (0.0, 1.0);
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    let span = (hi - lo).max(f64::EPSILON);
    let pad = span * 0.1;
    let lo = if include_zero && lo >= 0.0 { 0.0 } else { lo - pad };
    let hi = if include_zero && hi <= 0.0 { 0.0 } else { hi + pad };
    if (hi - lo).abs() < f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
