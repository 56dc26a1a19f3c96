/// One iteration's slice of a stacked bar chart.
///
/// `values[j]` and `bottoms[j]` belong to the j-th suite of the input order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayer {
    /// 0-based iteration index.
    pub iteration: usize,
    pub values: Vec<f64>,
    /// Running offset: sum of this suite's earlier iterations.
    pub bottoms: Vec<f64>,
}

impl StackLayer {
    /// Top edge of each bar segment.
    #[must_use]
    pub fn tops(&self) -> Vec<f64> {
        self.values
            .iter()
            .zip(&self.bottoms)
            .map(|(v, b)| v + b)
            .collect()
    }
}

/// Layer for `iteration` across all suites. Suites shorter than
/// `iteration + 1` contribute 0.
#[must_use]
pub fn stack_accumulate<S: AsRef<[f64]>>(series: &[S], iteration: usize) -> StackLayer {
    let values = series
        .iter()
        .map(|s| s.as_ref().get(iteration).copied().unwrap_or(0.0))
        .collect();
    let bottoms = series
        .iter()
        .map(|s| s.as_ref().iter().take(iteration).sum())
        .collect();

    StackLayer {
        iteration,
        values,
        bottoms,
    }
}

/// Every layer up to the longest suite.
#[must_use]
pub fn stack_layers<S: AsRef<[f64]>>(series: &[S]) -> Vec<StackLayer> {
    let depth = series.iter().map(|s| s.as_ref().len()).max().unwrap_or(0);
    let mut bottoms = vec![0.0; series.len()];

    (0..depth)
        .map(|iteration| {
            let values: Vec<f64> = series
                .iter()
                .map(|s| s.as_ref().get(iteration).copied().unwrap_or(0.0))
                .collect();
            let layer = StackLayer {
                iteration,
                values,
                bottoms: bottoms.clone(),
            };
            for (bottom, value) in bottoms.iter_mut().zip(&layer.values) {
                *bottom += value;
            }
            layer
        })
        .collect()
}

#[cfg(test)]
#[path = "stack_tests.rs"]
mod tests;
