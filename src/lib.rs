//! # Polarity
//!
//! Linear sentiment classifiers for review text.
//!
//! ## Features
//!
//! - Bag-of-words featurization with a configurable stop list
//! - Perceptron, averaged perceptron and Pegasos learners
//! - Reproducible training order, cacheable on disk
//! - Accuracy, hinge loss and hyperparameter grid search

pub mod analysis;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod ml;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
