//! Prediction, accuracy and hyperparameter search.

use std::cmp::Ordering;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::ml::features::Vocabulary;
use crate::ml::linear::{LinearClassifier, LinearParams, validate_labels};
use crate::ml::matrix::FeatureMatrix;

/// A row is labeled `+1` only when `theta·x + theta0` exceeds this threshold.
pub const DECISION_EPSILON: f64 = 2e-7;

/// Predict a ±1 label for every row of `features`.
pub fn classify(features: &FeatureMatrix, params: &LinearParams) -> Result<Vec<i8>> {
    params.check_width(features.n_cols())?;
    Ok(features
        .rows()
        .map(|x| {
            if params.decision(x) > DECISION_EPSILON {
                1
            } else {
                -1
            }
        })
        .collect())
}

/// Fraction of `predictions` equal to `targets`. Empty input scores 0.
pub fn accuracy(predictions: &[i8], targets: &[i8]) -> Result<f64> {
    if predictions.len() != targets.len() {
        return Err(PolarityError::dimension(format!(
            "{} predictions but {} targets",
            predictions.len(),
            targets.len()
        )));
    }
    if targets.is_empty() {
        return Ok(0.0);
    }

    let correct = predictions
        .iter()
        .zip(targets)
        .filter(|(p, t)| p == t)
        .count();
    Ok(correct as f64 / targets.len() as f64)
}

/// Train `classifier` on the training set, then return its accuracy on the
/// training and validation sets.
pub fn classifier_accuracy(
    classifier: &dyn LinearClassifier,
    train_features: &FeatureMatrix,
    val_features: &FeatureMatrix,
    train_labels: &[i8],
    val_labels: &[i8],
) -> Result<(f64, f64)> {
    validate_labels(val_labels)?;
    let params = classifier.train(train_features, train_labels)?;

    let train_accuracy = accuracy(&classify(train_features, &params)?, train_labels)?;
    let val_accuracy = accuracy(&classify(val_features, &params)?, val_labels)?;
    debug!(
        "{}: train accuracy {train_accuracy:.4}, validation accuracy {val_accuracy:.4}",
        classifier.name()
    );
    Ok((train_accuracy, val_accuracy))
}

/// Accuracy of one hyperparameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningPoint {
    pub value: f64,
    pub train_accuracy: f64,
    pub val_accuracy: f64,
}

/// Outcome of a hyperparameter search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningResult {
    pub points: Vec<TuningPoint>,
    /// The point with the highest validation accuracy. The earliest value
    /// wins a tie.
    pub best: TuningPoint,
}

/// Grid search over `values`.
///
/// `factory` builds a learner for each value; every learner is trained on the
/// training set and scored on both sets.
pub fn tune<F>(
    factory: F,
    values: &[f64],
    train_features: &FeatureMatrix,
    val_features: &FeatureMatrix,
    train_labels: &[i8],
    val_labels: &[i8],
) -> Result<TuningResult>
where
    F: Fn(f64) -> Box<dyn LinearClassifier>,
{
    let mut points = Vec::with_capacity(values.len());
    for &value in values {
        let classifier = factory(value);
        let (train_accuracy, val_accuracy) = classifier_accuracy(
            classifier.as_ref(),
            train_features,
            val_features,
            train_labels,
            val_labels,
        )?;
        info!("{} @ {value}: validation accuracy {val_accuracy:.4}", classifier.name());
        points.push(TuningPoint {
            value,
            train_accuracy,
            val_accuracy,
        });
    }

    let best = points
        .iter()
        .fold(None::<&TuningPoint>, |best, point| match best {
            Some(b) if b.val_accuracy >= point.val_accuracy => Some(b),
            _ => Some(point),
        })
        .cloned()
        .ok_or_else(|| PolarityError::invalid_argument("no hyperparameter values to tune"))?;

    Ok(TuningResult { points, best })
}

/// A vocabulary word and its weight in `theta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedWord {
    pub word: String,
    pub weight: f64,
}

/// The `k` words with the largest weights, heaviest first.
pub fn explanatory_words(
    params: &LinearParams,
    vocabulary: &Vocabulary,
    k: usize,
) -> Result<Vec<WeightedWord>> {
    params.check_width(vocabulary.len())?;

    let mut words: Vec<WeightedWord> = vocabulary
        .iter()
        .map(|(idx, word)| WeightedWord {
            word: word.to_string(),
            weight: params.theta[idx],
        })
        .collect();
    words.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    words.truncate(k);
    Ok(words)
}
