//! Pearson correlation via `statrs` sample covariances.

use cinerec_core::errors::{CinerecError, CinerecResult};
use statrs::statistics::Statistics;

/// Pearson correlation coefficient of two equal-length sequences.
///
/// Fails with `InvalidInput` when lengths differ, either sequence has fewer
/// than two values, or either sequence is constant.
pub fn correlation(predicted: &[f64], actual: &[f64]) -> CinerecResult<f64> {
    if predicted.len() != actual.len() {
        return Err(CinerecError::invalid_input(format!(
            "correlation needs equal lengths, got {} and {}",
            predicted.len(),
            actual.len()
        )));
    }
    if predicted.len() < 2 {
        return Err(CinerecError::invalid_input(format!(
            "correlation needs at least 2 values, got {}",
            predicted.len()
        )));
    }
    if predicted.iter().chain(actual).any(|v| !v.is_finite()) {
        return Err(CinerecError::invalid_input(
            "correlation inputs must be finite",
        ));
    }

    // Pearson is scale invariant. Normalizing to [-1, 1] keeps the sums of
    // squares away from overflow and underflow.
    let x = scaled(predicted);
    let y = scaled(actual);
    let (x, y) = (x.as_slice(), y.as_slice());

    let var_x = x.covariance(x);
    let var_y = y.covariance(y);

    if var_x == 0.0 || var_y == 0.0 {
        return Err(CinerecError::invalid_input(
            "correlation is undefined for a constant sequence",
        ));
    }
    if predicted == actual {
        return Ok(1.0);
    }

    let r = x.covariance(y) / (var_x.sqrt() * var_y.sqrt());
    Ok(r.clamp(-1.0, 1.0))
}

/// `values` divided by their largest magnitude.
fn scaled(values: &[f64]) -> Vec<f64> {
    let max = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if max == 0.0 {
        return values.to_vec();
    }
    values.iter().map(|v| v / max).collect()
}
