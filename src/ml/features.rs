//! Bag-of-words featurization.
//!
//! A [`Vocabulary`] assigns every distinct word of a training corpus a dense
//! column index in first-seen order. [`BagOfWordsVectorizer`] builds the
//! vocabulary from documents and turns documents into per-word count rows.
//!
//! # Example
//!
//! ```
//! use polarity::analysis::token_filter::StopFilter;
//! use polarity::ml::features::{bag_of_words, extract_bow_feature_vectors};
//!
//! let reviews = vec!["Great food!".to_string(), "The food was cold".to_string()];
//! let stop_words = StopFilter::from_words(vec!["the", "was"]);
//!
//! let vocabulary = bag_of_words(&reviews, &stop_words).unwrap();
//! assert_eq!(vocabulary.index_of("food"), Some(1));
//!
//! let features = extract_bow_feature_vectors(&reviews, &vocabulary).unwrap();
//! assert_eq!(features.shape(), (2, vocabulary.len()));
//! ```

use std::sync::Arc;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, ReviewAnalyzer};
use crate::analysis::token_filter::StopFilter;
use crate::error::Result;
use crate::ml::matrix::FeatureMatrix;

/// Mapping from word to column index.
///
/// Indices are assigned in insertion order and always cover
/// `0..vocabulary.len()` without gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` if absent and return its index.
    pub fn insert(&mut self, word: &str) -> usize {
        if let Some(&idx) = self.index.get(word) {
            return idx;
        }
        let idx = self.words.len();
        self.words.push(word.to_string());
        self.index.insert(word.to_string(), idx);
        idx
    }

    /// Index of `word`, if it is part of the vocabulary.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Word stored at `index`.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(index, word)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.words.iter().map(String::as_str).enumerate()
    }

    /// Words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for Vocabulary {}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for word in iter {
            vocabulary.insert(word.as_ref());
        }
        vocabulary
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.words
    }
}

/// Bag-of-words vectorizer.
pub struct BagOfWordsVectorizer {
    /// Vocabulary: word -> column mapping.
    vocabulary: Vocabulary,
    /// Clip counts to 1 instead of counting occurrences.
    binary: bool,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for BagOfWordsVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BagOfWordsVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("binary", &self.binary)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl BagOfWordsVectorizer {
    /// Create a new vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: Vocabulary::new(),
            binary: false,
            analyzer,
        }
    }

    /// Create a vectorizer over an existing vocabulary.
    pub fn with_vocabulary(analyzer: Arc<dyn Analyzer>, vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            binary: false,
            analyzer,
        }
    }

    /// Record word presence (0/1) instead of word counts.
    pub fn with_binary(mut self, binary: bool) -> Self {
        self.binary = binary;
        self
    }

    /// Build the vocabulary from training documents, replacing any previous one.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<&Vocabulary> {
        let mut vocabulary = Vocabulary::new();
        for doc in documents {
            for word in self.analyzer.analyze_to_strings(doc.as_ref())? {
                vocabulary.insert(&word);
            }
        }
        debug!(
            "built vocabulary of {} words from {} documents",
            vocabulary.len(),
            documents.len()
        );

        self.vocabulary = vocabulary;
        Ok(&self.vocabulary)
    }

    /// Turn documents into an n×|vocabulary| matrix of word counts.
    ///
    /// Words outside the vocabulary are ignored.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<FeatureMatrix> {
        let mut features = FeatureMatrix::zeros(documents.len(), self.vocabulary.len());

        for (i, doc) in documents.iter().enumerate() {
            let row = features.row_mut(i);
            for word in self.analyzer.analyze_to_strings(doc.as_ref())? {
                if let Some(idx) = self.vocabulary.index_of(&word) {
                    if self.binary {
                        row[idx] = 1.0;
                    } else {
                        row[idx] += 1.0;
                    }
                }
            }
        }

        Ok(features)
    }

    /// Fit on `documents` and transform them in one go.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<FeatureMatrix> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// The fitted vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn into_vocabulary(self) -> Vocabulary {
        self.vocabulary
    }
}

/// Lowercase `text` and split it into words, with every ASCII punctuation
/// character and digit as a word of its own.
///
/// ```
/// use polarity::ml::features::extract_words;
///
/// assert_eq!(
///     extract_words("It's 5 stars!").unwrap(),
///     vec!["it", "'", "s", "5", "stars", "!"]
/// );
/// ```
pub fn extract_words(text: &str) -> Result<Vec<String>> {
    ReviewAnalyzer::new().analyze_to_strings(text)
}

/// Build the vocabulary of `texts`, leaving out every word in `stop_words`.
pub fn bag_of_words<S: AsRef<str>>(texts: &[S], stop_words: &StopFilter) -> Result<Vocabulary> {
    let analyzer = Arc::new(ReviewAnalyzer::with_stop_filter(stop_words.clone()));
    let mut vectorizer = BagOfWordsVectorizer::new(analyzer);
    vectorizer.fit(texts)?;
    Ok(vectorizer.into_vocabulary())
}

/// Word-count rows of `texts` over a fixed `vocabulary`.
pub fn extract_bow_feature_vectors<S: AsRef<str>>(
    texts: &[S],
    vocabulary: &Vocabulary,
) -> Result<FeatureMatrix> {
    BagOfWordsVectorizer::with_vocabulary(Arc::new(ReviewAnalyzer::new()), vocabulary.clone())
        .transform(texts)
}
