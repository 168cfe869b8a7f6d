//! Command line argument parsing for the polarity CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{Algorithm, TrainingConfig};
use crate::error::Result;

/// polarity - linear sentiment classifiers for review text
#[derive(Parser, Debug, Clone)]
#[command(name = "polarity")]
#[command(about = "Train and evaluate linear sentiment classifiers on review text")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct PolarityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PolarityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier and report its accuracy
    Train(TrainArgs),

    /// Grid-search the number of epochs and/or lambda
    Tune(TuneArgs),

    /// Show the vocabulary of a dataset
    Vocab(VocabArgs),

    /// Show the words with the largest weights of a trained classifier
    Explain(ExplainArgs),

    /// Show (and optionally cache) the training order for n samples
    Order(OrderArgs),
}

/// Learner options shared by the training commands.
#[derive(Args, Debug, Clone)]
pub struct TrainingOptions {
    /// Learning algorithm
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Number of epochs (T)
    #[arg(short = 'T', long = "epochs")]
    pub epochs: Option<usize>,

    /// Pegasos regularization (L)
    #[arg(short = 'L', long = "lambda")]
    pub lambda: Option<f64>,

    /// Training configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "POLARITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory searched for <n>.txt training order files
    #[arg(long, value_name = "DIR")]
    pub order_dir: Option<PathBuf>,

    /// Stopword file (defaults to ./stopwords.txt when present)
    #[arg(short, long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,
}

impl TrainingOptions {
    /// The configuration file (or the defaults) with the flags applied on top.
    pub fn training_config(&self) -> Result<TrainingConfig> {
        let mut config = match &self.config {
            Some(path) => TrainingConfig::from_file(path)?,
            None => TrainingConfig::default(),
        };
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(lambda) = self.lambda {
            config.lambda = lambda;
        }
        if let Some(dir) = &self.order_dir {
            config.order.directory = dir.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Training dataset (TSV)
    #[arg(long = "train", value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Validation dataset (TSV)
    #[arg(long = "val", value_name = "VAL_FILE")]
    pub val_file: PathBuf,

    #[command(flatten)]
    pub training: TrainingOptions,
}

/// Arguments for hyperparameter tuning
#[derive(Parser, Debug, Clone)]
pub struct TuneArgs {
    /// Training dataset (TSV)
    #[arg(long = "train", value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Validation dataset (TSV)
    #[arg(long = "val", value_name = "VAL_FILE")]
    pub val_file: PathBuf,

    /// Epoch counts to try (comma-separated)
    #[arg(long = "epochs-grid", value_delimiter = ',', value_name = "T,...")]
    pub epochs_grid: Vec<usize>,

    /// Lambdas to try (comma-separated)
    #[arg(long = "lambdas", value_delimiter = ',', value_name = "L,...")]
    pub lambdas: Vec<f64>,

    #[command(flatten)]
    pub training: TrainingOptions,
}

/// Arguments for the vocabulary listing
#[derive(Parser, Debug, Clone)]
pub struct VocabArgs {
    /// Dataset (TSV)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Stopword file (defaults to ./stopwords.txt when present)
    #[arg(short, long, value_name = "STOPWORDS_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Number of words to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Arguments for the explanatory words
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Training dataset (TSV)
    #[arg(long = "train", value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Number of words to show
    #[arg(short = 'k', long = "top", default_value = "10")]
    pub top: usize,

    #[command(flatten)]
    pub training: TrainingOptions,
}

/// Arguments for the training order
#[derive(Parser, Debug, Clone)]
pub struct OrderArgs {
    /// Number of samples
    #[arg(value_name = "N")]
    pub n_samples: usize,

    /// Directory searched for (and written with) <n>.txt
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Seed of the shuffle used when no order file exists
    #[arg(long, default_value = "1")]
    pub seed: u64,

    /// Write the order to <dir>/<n>.txt
    #[arg(short, long)]
    pub write: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
