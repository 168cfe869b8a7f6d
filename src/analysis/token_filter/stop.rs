//! Stop filter implementation.
//!
//! Removes stop words from a token stream. The stop word list is supplied by
//! the caller, usually loaded from a `stopwords.txt` file with
//! [`StopFilter::from_file`].
//!
//! # Examples
//!
//! ```
//! use polarity::analysis::token_filter::Filter;
//! use polarity::analysis::token_filter::stop::StopFilter;
//! use polarity::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the", "a"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("movie", 1),
//!     Token::new("rocks", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "movie");
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Characters that make up a stop word in a stopword file.
const STOP_WORD_PATTERN: &str = r"[a-zA-Z\-\.'/]+";

/// A filter that removes stop words from the token stream.
///
/// Tokens are compared verbatim, so the filter belongs after a
/// [`LowercaseFilter`](super::lowercase::LowercaseFilter) when the list is
/// lowercase.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use polarity::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Parse stop words out of the contents of a stopword file.
    ///
    /// Every maximal run of ASCII letters, `-`, `.`, `'` and `/` is one stop
    /// word; everything else separates words.
    ///
    /// ```
    /// use polarity::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::parse("i\nme\nisn't 42\n").unwrap();
    /// assert!(filter.is_stop_word("isn't"));
    /// assert!(!filter.is_stop_word("42"));
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let pattern = Regex::new(STOP_WORD_PATTERN)?;
        Ok(Self::from_words(
            pattern.find_iter(content).map(|m| m.as_str()),
        ))
    }

    /// Load stop words from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let filter = Self::parse(&content)?;
        debug!(
            "loaded {} stop words from {}",
            filter.len(),
            path.display()
        );
        Ok(filter)
    }

    /// Set whether to remove stopped tokens entirely or just mark them as stopped.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::with_stop_words(HashSet::new())
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_stopped() {
                    Some(token)
                } else if self.is_stop_word(&token.text) {
                    if self.remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
