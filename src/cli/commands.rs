//! Command implementations for the polarity CLI.

use std::path::Path;

use log::{info, warn};

use crate::analysis::token_filter::StopFilter;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{Algorithm, TrainingConfig};
use crate::data::{Review, load_reviews, load_texts, split_reviews};
use crate::error::{PolarityError, Result};
use crate::ml::evaluation::{accuracy, classify, explanatory_words, tune};
use crate::ml::features::{Vocabulary, bag_of_words, extract_bow_feature_vectors};
use crate::ml::linear::hinge_loss_full;
use crate::ml::matrix::FeatureMatrix;
use crate::ml::order::{OrderConfig, get_order, write_order};

/// Execute a CLI command.
pub fn execute_command(args: PolarityArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train_classifier(train_args, &args),
        Command::Tune(tune_args) => tune_classifier(tune_args, &args),
        Command::Vocab(vocab_args) => show_vocabulary(vocab_args, &args),
        Command::Explain(explain_args) => explain_classifier(explain_args, &args),
        Command::Order(order_args) => show_order(order_args, &args),
    }
}

/// A labeled feature matrix.
struct LabeledSet {
    features: FeatureMatrix,
    labels: Vec<i8>,
}

/// Stopword file picked up from the working directory when none is given.
const DEFAULT_STOPWORDS_FILE: &str = "stopwords.txt";

/// Load the stop list from `path`, else `./stopwords.txt` if present, else
/// an empty one.
fn load_stop_words(path: Option<&Path>) -> Result<StopFilter> {
    resolve_stop_words(path, Path::new(DEFAULT_STOPWORDS_FILE))
}

fn resolve_stop_words(path: Option<&Path>, fallback: &Path) -> Result<StopFilter> {
    match path {
        Some(path) => StopFilter::from_file(path),
        None if fallback.is_file() => {
            info!("using stop words from {}", fallback.display());
            StopFilter::from_file(fallback)
        }
        None => Ok(StopFilter::default()),
    }
}

/// Build the vocabulary from `train` and featurize every set over it.
fn featurize(
    train: &[Review],
    others: &[&[Review]],
    stop_words: &StopFilter,
) -> Result<(Vocabulary, LabeledSet, Vec<LabeledSet>)> {
    let (train_texts, train_labels) = split_reviews(train);
    let vocabulary = bag_of_words(&train_texts, stop_words)?;
    info!("vocabulary has {} words", vocabulary.len());

    let train_set = LabeledSet {
        features: extract_bow_feature_vectors(&train_texts, &vocabulary)?,
        labels: train_labels,
    };
    let other_sets = others
        .iter()
        .map(|reviews| {
            let (texts, labels) = split_reviews(reviews);
            Ok(LabeledSet {
                features: extract_bow_feature_vectors(&texts, &vocabulary)?,
                labels,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((vocabulary, train_set, other_sets))
}

/// Load the training and validation sets named on the command line.
fn load_train_val(
    train_file: &Path,
    val_file: &Path,
    stop_words: &StopFilter,
) -> Result<(Vocabulary, LabeledSet, LabeledSet)> {
    let train = load_reviews(train_file)?;
    let val = load_reviews(val_file)?;
    if train.is_empty() {
        warn!("training set {} is empty", train_file.display());
    }

    let (vocabulary, train_set, mut others) = featurize(&train, &[val.as_slice()], stop_words)?;
    let val_set = others
        .pop()
        .ok_or_else(|| PolarityError::other("validation set was not featurized"))?;
    Ok((vocabulary, train_set, val_set))
}

fn lambda_of(config: &TrainingConfig) -> Option<f64> {
    (config.algorithm == Algorithm::Pegasos).then_some(config.lambda)
}

/// Train a classifier and report its accuracy.
fn train_classifier(args: &TrainArgs, cli_args: &PolarityArgs) -> Result<()> {
    let config = args.training.training_config()?;
    let stop_words = load_stop_words(args.training.stopwords.as_deref())?;
    let (vocabulary, train, val) = load_train_val(&args.train_file, &args.val_file, &stop_words)?;

    let classifier = config.build();
    let params = classifier.train(&train.features, &train.labels)?;

    let report = TrainingReport {
        algorithm: config.algorithm.to_string(),
        epochs: config.epochs,
        lambda: lambda_of(&config),
        vocabulary_size: vocabulary.len(),
        train_accuracy: accuracy(&classify(&train.features, &params)?, &train.labels)?,
        val_accuracy: accuracy(&classify(&val.features, &params)?, &val.labels)?,
        train_hinge_loss: hinge_loss_full(&train.features, &train.labels, &params)?,
    };
    output_result("Training complete", &report, cli_args)
}

/// Grid-search the epoch count, then lambda with the best epoch count.
fn tune_classifier(args: &TuneArgs, cli_args: &PolarityArgs) -> Result<()> {
    if args.epochs_grid.is_empty() && args.lambdas.is_empty() {
        return Err(PolarityError::invalid_argument(
            "give --epochs-grid and/or --lambdas to tune",
        ));
    }

    let mut config = args.training.training_config()?;
    let stop_words = load_stop_words(args.training.stopwords.as_deref())?;
    let (_, train, val) = load_train_val(&args.train_file, &args.val_file, &stop_words)?;

    let epochs = if args.epochs_grid.is_empty() {
        None
    } else {
        let values: Vec<f64> = args.epochs_grid.iter().map(|&t| t as f64).collect();
        let base = config.clone();
        let result = tune(
            |t| base.clone().with_epochs(t as usize).build(),
            &values,
            &train.features,
            &val.features,
            &train.labels,
            &val.labels,
        )?;
        config.epochs = result.best.value as usize;
        info!("best epoch count: {}", config.epochs);
        Some(result)
    };

    let lambda = if args.lambdas.is_empty() {
        None
    } else {
        if config.algorithm != Algorithm::Pegasos {
            warn!("{} ignores lambda", config.algorithm);
        }
        let base = config.clone();
        Some(tune(
            |l| base.clone().with_lambda(l).build(),
            &args.lambdas,
            &train.features,
            &val.features,
            &train.labels,
            &val.labels,
        )?)
    };

    let report = TuningReport {
        algorithm: config.algorithm.to_string(),
        epochs,
        lambda,
    };
    output_result("Tuning complete", &report, cli_args)
}

/// Show the vocabulary of a dataset.
fn show_vocabulary(args: &VocabArgs, cli_args: &PolarityArgs) -> Result<()> {
    let stop_words = load_stop_words(args.stopwords.as_deref())?;
    let texts = load_texts(&args.data_file)?;
    let vocabulary = bag_of_words(&texts, &stop_words)?;

    let report = VocabularyReport {
        documents: texts.len(),
        vocabulary_size: vocabulary.len(),
        words: vocabulary
            .words()
            .iter()
            .take(args.limit)
            .cloned()
            .collect(),
    };
    output_result("Vocabulary", &report, cli_args)
}

/// Train on the whole training set and show the heaviest words.
fn explain_classifier(args: &ExplainArgs, cli_args: &PolarityArgs) -> Result<()> {
    let config = args.training.training_config()?;
    let stop_words = load_stop_words(args.training.stopwords.as_deref())?;
    let train = load_reviews(&args.train_file)?;
    let (vocabulary, train, _) = featurize(&train, &[], &stop_words)?;

    let params = config.build().train(&train.features, &train.labels)?;
    let report = ExplanationReport {
        algorithm: config.algorithm.to_string(),
        words: explanatory_words(&params, &vocabulary, args.top)?,
    };
    output_result("Most explanatory words", &report, cli_args)
}

/// Show the training order for `n` samples, writing it out if asked.
fn show_order(args: &OrderArgs, cli_args: &PolarityArgs) -> Result<()> {
    let config = OrderConfig::default()
        .with_directory(&args.dir)
        .with_seed(args.seed);
    let order = get_order(args.n_samples, &config)?;

    let written_to = if args.write {
        let path = write_order(&args.dir, &order)?;
        Some(path.display().to_string())
    } else {
        None
    };

    let report = OrderReport {
        n_samples: args.n_samples,
        order,
        written_to,
    };
    output_result("Training order", &report, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(sentiment: i8, text: &str) -> Review {
        Review {
            sentiment,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_featurize_shares_vocabulary() {
        let train = vec![review(1, "good food"), review(-1, "bad food")];
        let val = vec![review(1, "good good unseen")];

        let (vocabulary, train_set, others) =
            featurize(&train, &[val.as_slice()], &StopFilter::default()).unwrap();

        assert_eq!(vocabulary.len(), 3);
        assert_eq!(train_set.features.shape(), (2, 3));
        assert_eq!(train_set.labels, vec![1, -1]);
        assert_eq!(others[0].features.row(0), &[2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_stop_words_fall_back_to_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join(DEFAULT_STOPWORDS_FILE);

        assert!(resolve_stop_words(None, &fallback).unwrap().is_empty());

        std::fs::write(&fallback, "the\nand\n").unwrap();
        assert_eq!(resolve_stop_words(None, &fallback).unwrap().len(), 2);

        let explicit = dir.path().join("custom.txt");
        std::fs::write(&explicit, "only\n").unwrap();
        assert_eq!(
            resolve_stop_words(Some(&explicit), &fallback).unwrap().len(),
            1
        );
    }

    #[test]
    fn test_lambda_only_reported_for_pegasos() {
        let config = TrainingConfig::default();
        assert_eq!(lambda_of(&config), Some(config.lambda));
        assert_eq!(
            lambda_of(&config.with_algorithm(Algorithm::Perceptron)),
            None
        );
    }
}
