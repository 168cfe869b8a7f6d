//! Hinge loss.

use crate::error::Result;
use crate::ml::linear::params::LinearParams;
use crate::ml::linear::trainer::validate_training_set;
use crate::ml::matrix::FeatureMatrix;

/// `max(0, 1 - label * (theta·x + theta0))` for a single example.
pub fn hinge_loss_single(x: &[f64], label: i8, params: &LinearParams) -> Result<f64> {
    params.check_width(x.len())?;
    Ok(hinge(params.agreement(x, label)))
}

/// Mean hinge loss over every row of `features`.
///
/// An empty matrix has zero loss.
pub fn hinge_loss_full(
    features: &FeatureMatrix,
    labels: &[i8],
    params: &LinearParams,
) -> Result<f64> {
    validate_training_set(features, labels)?;
    params.check_width(features.n_cols())?;
    if labels.is_empty() {
        return Ok(0.0);
    }

    let total: f64 = features
        .rows()
        .zip(labels)
        .map(|(x, &label)| hinge(params.agreement(x, label)))
        .sum();
    Ok(total / labels.len() as f64)
}

fn hinge(agreement: f64) -> f64 {
    (1.0 - agreement).max(0.0)
}
