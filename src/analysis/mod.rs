//! Text analysis module for Polarity.
//!
//! Tokenization and filtering of review text ahead of bag-of-words
//! featurization.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
