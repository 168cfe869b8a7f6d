//! Training configuration.
//!
//! A [`TrainingConfig`] can be read from JSON; every field is optional:
//!
//! ```json
//! {
//!   "algorithm": "average-perceptron",
//!   "epochs": 25,
//!   "lambda": 0.01,
//!   "order": { "directory": "data/orders", "seed": 1 }
//! }
//! ```

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::ml::linear::{AveragePerceptron, LinearClassifier, Pegasos, Perceptron};
use crate::ml::order::OrderConfig;

pub const DEFAULT_EPOCHS: usize = 10;
pub const DEFAULT_LAMBDA: f64 = 0.01;

/// Learning algorithm.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Perceptron,
    AveragePerceptron,
    #[default]
    Pegasos,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Perceptron => "perceptron",
            Algorithm::AveragePerceptron => "average-perceptron",
            Algorithm::Pegasos => "pegasos",
        };
        f.write_str(name)
    }
}

/// Hyperparameters of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub algorithm: Algorithm,
    /// Number of passes over the training set (`T`).
    pub epochs: usize,
    /// Pegasos regularization (`L`). Ignored by the perceptrons.
    pub lambda: f64,
    pub order: OrderConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            epochs: DEFAULT_EPOCHS,
            lambda: DEFAULT_LAMBDA,
            order: OrderConfig::default(),
        }
    }
}

impl TrainingConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: TrainingConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("loaded training config from {}", path.display());
        Ok(config)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_order(mut self, order: OrderConfig) -> Self {
        self.order = order;
        self
    }

    /// Reject a negative or non-finite `lambda`.
    pub fn validate(&self) -> Result<()> {
        if !self.lambda.is_finite() || self.lambda < 0.0 {
            return Err(PolarityError::config(format!(
                "lambda must be a non-negative number, got {}",
                self.lambda
            )));
        }
        Ok(())
    }

    /// The learner described by this configuration.
    pub fn build(&self) -> Box<dyn LinearClassifier> {
        let order = self.order.clone();
        match self.algorithm {
            Algorithm::Perceptron => Box::new(Perceptron::new(self.epochs).with_order(order)),
            Algorithm::AveragePerceptron => {
                Box::new(AveragePerceptron::new(self.epochs).with_order(order))
            }
            Algorithm::Pegasos => {
                Box::new(Pegasos::new(self.epochs, self.lambda).with_order(order))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainingConfig::default();
        assert_eq!(config.algorithm, Algorithm::Pegasos);
        assert_eq!(config.epochs, 10);
        assert_eq!(config.lambda, 0.01);
        assert_eq!(config.order, OrderConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config: TrainingConfig =
            serde_json::from_str(r#"{"algorithm": "average-perceptron", "epochs": 3}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::AveragePerceptron);
        assert_eq!(config.epochs, 3);
        assert_eq!(config.lambda, DEFAULT_LAMBDA);
    }

    #[test]
    fn test_build_picks_learner() {
        let config = TrainingConfig::default().with_algorithm(Algorithm::Perceptron);
        assert_eq!(config.build().name(), "perceptron");
        assert_eq!(
            config.with_algorithm(Algorithm::Pegasos).build().name(),
            "pegasos"
        );
    }

    #[test]
    fn test_validate_lambda() {
        assert!(TrainingConfig::default().with_lambda(-1.0).validate().is_err());
        assert!(TrainingConfig::default().with_lambda(0.0).validate().is_ok());
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::AveragePerceptron.to_string(), "average-perceptron");
    }
}
