//! Parameters of an affine separator.

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::ml::matrix::dot;

/// Weight vector `theta` and offset `theta0` of the separator
/// `theta·x + theta0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    pub theta: Vec<f64>,
    pub theta0: f64,
}

impl LinearParams {
    /// All-zero parameters for `n_features` features.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            theta: vec![0.0; n_features],
            theta0: 0.0,
        }
    }

    pub fn new(theta: Vec<f64>, theta0: f64) -> Self {
        Self { theta, theta0 }
    }

    pub fn n_features(&self) -> usize {
        self.theta.len()
    }

    /// `theta·x + theta0`.
    ///
    /// `x` must have [`n_features`](Self::n_features) entries.
    pub fn decision(&self, x: &[f64]) -> f64 {
        dot(&self.theta, x) + self.theta0
    }

    /// `label * (theta·x + theta0)`.
    pub fn agreement(&self, x: &[f64], label: i8) -> f64 {
        f64::from(label) * self.decision(x)
    }

    /// Fail unless `n_features` matches the length of `theta`.
    pub fn check_width(&self, n_features: usize) -> Result<()> {
        if n_features != self.theta.len() {
            return Err(PolarityError::dimension(format!(
                "{n_features} features against a theta of length {}",
                self.theta.len()
            )));
        }
        Ok(())
    }

    pub(crate) fn add_scaled(&mut self, other: &LinearParams, scale: f64) {
        for (t, o) in self.theta.iter_mut().zip(&other.theta) {
            *t += scale * o;
        }
        self.theta0 += scale * other.theta0;
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        for t in &mut self.theta {
            *t *= factor;
        }
        self.theta0 *= factor;
    }
}
