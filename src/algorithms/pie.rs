use super::AlgorithmError;

/// Fraction of the total contributed by each value, in input order.
///
/// # Errors
/// - `NoValues` for an empty slice
/// - `NegativeShare` if any value is below zero
/// - `ZeroTotal` if the values sum to zero
pub fn pie_shares(values: &[f64]) -> Result<Vec<f64>, AlgorithmError> {
    if values.is_empty() {
        return Err(AlgorithmError::NoValues);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0.0) {
        return Err(AlgorithmError::NegativeShare { index, value });
    }

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(AlgorithmError::ZeroTotal);
    }

    Ok(values.iter().map(|v| v / total).collect())
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
