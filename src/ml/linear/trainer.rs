//! Perceptron, averaged perceptron and Pegasos trainers.
//!
//! Each trainer starts from zero parameters and makes `epochs` passes over
//! the examples, visiting them in the order given by
//! [`get_order`](crate::ml::order::get_order). The order is fixed for the
//! whole run.
//!
//! # Example
//!
//! ```
//! use polarity::ml::linear::{LinearClassifier, Pegasos};
//! use polarity::ml::matrix::FeatureMatrix;
//! use polarity::ml::order::OrderConfig;
//!
//! let features = FeatureMatrix::from_rows(&[vec![2.0, 1.0], vec![-1.0, -2.0]]).unwrap();
//! let labels = [1, -1];
//!
//! let trainer = Pegasos::new(10, 0.01)
//!     .with_order(OrderConfig::default().with_directory("/nonexistent"));
//! let params = trainer.train(&features, &labels).unwrap();
//! assert!(params.decision(features.row(0)) > 0.0);
//! assert!(params.decision(features.row(1)) < 0.0);
//! ```

use log::{debug, info};

use crate::error::{PolarityError, Result};
use crate::ml::linear::params::LinearParams;
use crate::ml::linear::update::{
    pegasos_single_step_update, pegasos_step_size, perceptron_single_step_update,
};
use crate::ml::matrix::FeatureMatrix;
use crate::ml::order::{OrderConfig, get_order};

/// A learner that produces the parameters of a linear classifier.
pub trait LinearClassifier: Send + Sync {
    /// Train on `features` (one row per example) and ±1 `labels`.
    fn train(&self, features: &FeatureMatrix, labels: &[i8]) -> Result<LinearParams>;

    /// Get the name of this learner for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Check that every row has a label and every label is -1 or 1.
pub fn validate_training_set(features: &FeatureMatrix, labels: &[i8]) -> Result<()> {
    if features.n_rows() != labels.len() {
        return Err(PolarityError::dimension(format!(
            "{} examples but {} labels",
            features.n_rows(),
            labels.len()
        )));
    }
    validate_labels(labels)
}

/// Check that every label is -1 or 1.
pub fn validate_labels(labels: &[i8]) -> Result<()> {
    match labels.iter().position(|&l| l != 1 && l != -1) {
        Some(i) => Err(PolarityError::label(format!(
            "label {} at position {i} is not -1 or 1",
            labels[i]
        ))),
        None => Ok(()),
    }
}

/// The classic perceptron.
#[derive(Debug, Clone)]
pub struct Perceptron {
    epochs: usize,
    order: OrderConfig,
}

impl Perceptron {
    pub fn new(epochs: usize) -> Self {
        Self {
            epochs,
            order: OrderConfig::default(),
        }
    }

    pub fn with_order(mut self, order: OrderConfig) -> Self {
        self.order = order;
        self
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }
}

impl LinearClassifier for Perceptron {
    fn train(&self, features: &FeatureMatrix, labels: &[i8]) -> Result<LinearParams> {
        validate_training_set(features, labels)?;
        let order = get_order(features.n_rows(), &self.order)?;
        let mut params = LinearParams::zeros(features.n_cols());

        for epoch in 0..self.epochs {
            let mut mistakes = 0;
            for &i in &order {
                if perceptron_single_step_update(features.row(i), labels[i], &mut params) {
                    mistakes += 1;
                }
            }
            debug!("perceptron epoch {}: {mistakes} mistakes", epoch + 1);
        }

        info!(
            "perceptron trained on {} examples for {} epochs",
            features.n_rows(),
            self.epochs
        );
        Ok(params)
    }

    fn name(&self) -> &'static str {
        "perceptron"
    }
}

/// The perceptron, returning the average of the parameters after every step.
#[derive(Debug, Clone)]
pub struct AveragePerceptron {
    epochs: usize,
    order: OrderConfig,
}

impl AveragePerceptron {
    pub fn new(epochs: usize) -> Self {
        Self {
            epochs,
            order: OrderConfig::default(),
        }
    }

    pub fn with_order(mut self, order: OrderConfig) -> Self {
        self.order = order;
        self
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }
}

impl LinearClassifier for AveragePerceptron {
    fn train(&self, features: &FeatureMatrix, labels: &[i8]) -> Result<LinearParams> {
        validate_training_set(features, labels)?;
        let n_features = features.n_cols();
        let steps = features.n_rows() * self.epochs;
        if steps == 0 {
            return Ok(LinearParams::zeros(n_features));
        }

        let order = get_order(features.n_rows(), &self.order)?;
        let mut params = LinearParams::zeros(n_features);
        let mut sum = LinearParams::zeros(n_features);

        for epoch in 0..self.epochs {
            let mut mistakes = 0;
            for &i in &order {
                if perceptron_single_step_update(features.row(i), labels[i], &mut params) {
                    mistakes += 1;
                }
                sum.add_scaled(&params, 1.0);
            }
            debug!("average perceptron epoch {}: {mistakes} mistakes", epoch + 1);
        }

        sum.scale(1.0 / steps as f64);
        info!("average perceptron averaged over {steps} steps");
        Ok(sum)
    }

    fn name(&self) -> &'static str {
        "average_perceptron"
    }
}

/// Pegasos: sub-gradient descent on the L2-regularized hinge loss with step
/// size `1/sqrt(t)` at the `t`-th update.
#[derive(Debug, Clone)]
pub struct Pegasos {
    epochs: usize,
    lambda: f64,
    order: OrderConfig,
}

impl Pegasos {
    pub fn new(epochs: usize, lambda: f64) -> Self {
        Self {
            epochs,
            lambda,
            order: OrderConfig::default(),
        }
    }

    pub fn with_order(mut self, order: OrderConfig) -> Self {
        self.order = order;
        self
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl LinearClassifier for Pegasos {
    fn train(&self, features: &FeatureMatrix, labels: &[i8]) -> Result<LinearParams> {
        validate_training_set(features, labels)?;
        let order = get_order(features.n_rows(), &self.order)?;
        let mut params = LinearParams::zeros(features.n_cols());
        let mut t = 0;

        for epoch in 0..self.epochs {
            for &i in &order {
                t += 1;
                pegasos_single_step_update(
                    features.row(i),
                    labels[i],
                    self.lambda,
                    pegasos_step_size(t),
                    &mut params,
                );
            }
            debug!("pegasos epoch {}: {t} updates so far", epoch + 1);
        }

        info!(
            "pegasos trained on {} examples for {} epochs (lambda = {})",
            features.n_rows(),
            self.epochs,
            self.lambda
        );
        Ok(params)
    }

    fn name(&self) -> &'static str {
        "pegasos"
    }
}

/// Run the perceptron for `t` epochs with the default training order.
pub fn perceptron(features: &FeatureMatrix, labels: &[i8], t: usize) -> Result<LinearParams> {
    Perceptron::new(t).train(features, labels)
}

/// Run the averaged perceptron for `t` epochs with the default training order.
pub fn average_perceptron(
    features: &FeatureMatrix,
    labels: &[i8],
    t: usize,
) -> Result<LinearParams> {
    AveragePerceptron::new(t).train(features, labels)
}

/// Run Pegasos for `t` epochs with regularization `l` and the default
/// training order.
pub fn pegasos(features: &FeatureMatrix, labels: &[i8], t: usize, l: f64) -> Result<LinearParams> {
    Pegasos::new(t, l).train(features, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_order_file() -> OrderConfig {
        OrderConfig::default().with_directory("/nonexistent/polarity-orders")
    }

    fn separable() -> (FeatureMatrix, Vec<i8>) {
        let features = FeatureMatrix::from_rows(&[
            vec![2.0, 1.0],
            vec![1.5, 2.0],
            vec![3.0, 0.5],
            vec![-1.0, -2.0],
            vec![-2.0, -0.5],
            vec![-0.5, -3.0],
        ])
        .unwrap();
        (features, vec![1, 1, 1, -1, -1, -1])
    }

    #[test]
    fn test_zero_epochs_gives_zero_params() {
        let (features, labels) = separable();
        let zero = LinearParams::zeros(2);

        let trainers: Vec<Box<dyn LinearClassifier>> = vec![
            Box::new(Perceptron::new(0).with_order(no_order_file())),
            Box::new(AveragePerceptron::new(0).with_order(no_order_file())),
            Box::new(Pegasos::new(0, 0.1).with_order(no_order_file())),
        ];
        for trainer in trainers {
            assert_eq!(trainer.train(&features, &labels).unwrap(), zero, "{}", trainer.name());
        }
    }

    #[test]
    fn test_perceptron_separates_training_set() {
        let (features, labels) = separable();
        let params = Perceptron::new(10)
            .with_order(no_order_file())
            .train(&features, &labels)
            .unwrap();

        for (x, &label) in features.rows().zip(&labels) {
            assert!(params.agreement(x, label) > 0.0);
        }
    }

    #[test]
    fn test_perceptron_matches_manual_loop() {
        let (features, labels) = separable();
        let order = get_order(features.n_rows(), &no_order_file()).unwrap();

        let mut expected = LinearParams::zeros(2);
        for _ in 0..3 {
            for &i in &order {
                perceptron_single_step_update(features.row(i), labels[i], &mut expected);
            }
        }

        let params = Perceptron::new(3)
            .with_order(no_order_file())
            .train(&features, &labels)
            .unwrap();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_average_perceptron_single_example() {
        // One positive example: the first step updates to ([1, 0], 1) and
        // every later step leaves it there, so the average equals it.
        let features = FeatureMatrix::from_rows(&[vec![1.0, 0.0]]).unwrap();
        let params = AveragePerceptron::new(4)
            .with_order(no_order_file())
            .train(&features, &[1])
            .unwrap();

        assert_eq!(params, LinearParams::new(vec![1.0, 0.0], 1.0));
    }

    #[test]
    fn test_average_perceptron_averages_every_step() {
        // Order is [0, 1] for two examples only if the shuffle says so, so use
        // two identical rows to make the run order-independent.
        let features = FeatureMatrix::from_rows(&[vec![1.0], vec![1.0]]).unwrap();
        let params = AveragePerceptron::new(1)
            .with_order(no_order_file())
            .train(&features, &[-1, -1])
            .unwrap();

        // step 1: mistake -> (-1, -1); step 2: agreement 2 > 0 -> unchanged
        assert_eq!(params, LinearParams::new(vec![-1.0], -1.0));
    }

    #[test]
    fn test_pegasos_first_step() {
        let features = FeatureMatrix::from_rows(&[vec![1.0, 0.0]]).unwrap();
        let params = Pegasos::new(1, 0.5)
            .with_order(no_order_file())
            .train(&features, &[1])
            .unwrap();

        // eta = 1: theta = 0.5 * 0 + 1 * [1, 0], theta0 = 1
        assert_eq!(params, LinearParams::new(vec![1.0, 0.0], 1.0));
    }

    #[test]
    fn test_pegasos_separates_training_set() {
        let (features, labels) = separable();
        let params = pegasos_with(&features, &labels, 20, 0.01);

        for (x, &label) in features.rows().zip(&labels) {
            assert!(params.agreement(x, label) > 0.0);
        }
    }

    fn pegasos_with(features: &FeatureMatrix, labels: &[i8], t: usize, l: f64) -> LinearParams {
        Pegasos::new(t, l)
            .with_order(no_order_file())
            .train(features, labels)
            .unwrap()
    }

    #[test]
    fn test_rejects_mismatched_labels() {
        let (features, _) = separable();
        let result = Perceptron::new(1).train(&features, &[1, -1]);
        assert!(matches!(result, Err(PolarityError::Dimension(_))));
    }

    #[test]
    fn test_rejects_non_unit_labels() {
        let features = FeatureMatrix::from_rows(&[vec![1.0], vec![2.0]]).unwrap();
        let result = Pegasos::new(1, 0.1).train(&features, &[1, 0]);
        assert!(matches!(result, Err(PolarityError::Label(_))));
    }

    #[test]
    fn test_trainer_names() {
        assert_eq!(Perceptron::new(1).name(), "perceptron");
        assert_eq!(AveragePerceptron::new(1).name(), "average_perceptron");
        assert_eq!(Pegasos::new(1, 0.1).name(), "pegasos");
    }
}
