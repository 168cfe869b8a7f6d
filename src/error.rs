//! Error types for the Polarity library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`PolarityError`] enum.
//!
//! # Examples
//!
//! ```
//! use polarity::error::{PolarityError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PolarityError::dimension("3 rows but 2 labels"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Polarity operations.
#[derive(Error, Debug)]
pub enum PolarityError {
    /// I/O errors (stopword files, order files, datasets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Shape mismatches between matrices, labels and parameters
    #[error("Dimension mismatch: {0}")]
    Dimension(String),

    /// Labels outside of {-1, 1}
    #[error("Label error: {0}")]
    Label(String),

    /// Malformed training order files
    #[error("Order error: {0}")]
    Order(String),

    /// Malformed datasets
    #[error("Data error: {0}")]
    Data(String),

    /// Invalid training configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV/TSV reader errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid regular expressions
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PolarityError.
pub type Result<T> = std::result::Result<T, PolarityError>;

impl PolarityError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PolarityError::Analysis(msg.into())
    }

    /// Create a new dimension mismatch error.
    pub fn dimension<S: Into<String>>(msg: S) -> Self {
        PolarityError::Dimension(msg.into())
    }

    /// Create a new label error.
    pub fn label<S: Into<String>>(msg: S) -> Self {
        PolarityError::Label(msg.into())
    }

    /// Create a new order file error.
    pub fn order<S: Into<String>>(msg: S) -> Self {
        PolarityError::Order(msg.into())
    }

    /// Create a new data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        PolarityError::Data(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PolarityError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PolarityError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PolarityError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
