use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::PunctuationTokenizer;
use crate::error::Result;

/// The analyzer used for review text.
///
/// Punctuation and digits become standalone tokens, everything is
/// lowercased, and an optional stop list is applied last.
pub struct ReviewAnalyzer {
    inner: PipelineAnalyzer,
    stop_words: usize,
}

impl ReviewAnalyzer {
    pub fn new() -> Self {
        Self {
            inner: Self::base(),
            stop_words: 0,
        }
    }

    /// Same pipeline, with `stop_filter` applied after lowercasing.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let stop_words = stop_filter.len();
        Self {
            inner: Self::base().add_filter(Arc::new(stop_filter)),
            stop_words,
        }
    }

    fn base() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(PunctuationTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("review")
    }
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ReviewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "review"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Debug for ReviewAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewAnalyzer")
            .field("inner", &self.inner)
            .field("stop_words", &self.stop_words)
            .finish()
    }
}
