//! Punctuation-aware whitespace tokenizer.
//!
//! Splits on whitespace (including the ASCII information separators), and additionally emits every ASCII punctuation
//! character and every ASCII digit as a token of its own. The result is the
//! same as padding each such character with spaces and then splitting on
//! whitespace, so `"It's 10/10"` yields `It`, `'`, `s`, `1`, `0`, `/`, `1`,
//! `0`.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::Result;

/// A tokenizer that splits on whitespace and isolates punctuation and digits.
#[derive(Clone, Debug, Default)]
pub struct PunctuationTokenizer;

impl PunctuationTokenizer {
    /// Create a new punctuation tokenizer.
    pub fn new() -> Self {
        PunctuationTokenizer
    }

    /// Whether `c` is split out as a standalone token.
    pub fn is_separate(c: char) -> bool {
        c.is_ascii_punctuation() || c.is_ascii_digit()
    }

    /// Whether `c` ends a word. Besides Unicode whitespace this includes the
    /// ASCII information separators U+001C..=U+001F.
    pub fn is_separator(c: char) -> bool {
        c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
    }

    fn flush(text: &str, start: &mut Option<usize>, end: usize, tokens: &mut Vec<Token>) {
        if let Some(word_start) = start.take() {
            let position = tokens.len();
            tokens.push(Token::with_offsets(
                &text[word_start..end],
                position,
                word_start,
                end,
            ));
        }
    }
}

impl Tokenizer for PunctuationTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (offset, c) in text.char_indices() {
            if Self::is_separator(c) {
                Self::flush(text, &mut word_start, offset, &mut tokens);
            } else if Self::is_separate(c) {
                Self::flush(text, &mut word_start, offset, &mut tokens);
                let kind = if c.is_ascii_digit() {
                    TokenKind::Digit
                } else {
                    TokenKind::Punctuation
                };
                let position = tokens.len();
                let end = offset + c.len_utf8();
                tokens.push(
                    Token::with_offsets(&text[offset..end], position, offset, end).with_kind(kind),
                );
            } else if word_start.is_none() {
                word_start = Some(offset);
            }
        }
        Self::flush(text, &mut word_start, text.len(), &mut tokens);

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        PunctuationTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_splits_punctuation_and_digits() {
        assert_eq!(
            texts("It's 10/10!"),
            vec!["It", "'", "s", "1", "0", "/", "1", "0", "!"]
        );
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(texts("  hello \t\n world  "), vec!["hello", "world"]);
        assert!(texts("   ").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn test_information_separators_split_words() {
        assert_eq!(texts("a\x1fb c"), vec!["a", "b", "c"]);
        assert_eq!(texts("x\x1cy\x1dz\x1e"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_offsets_and_kinds() {
        let tokens: Vec<Token> = PunctuationTokenizer::new()
            .tokenize("ok, 7")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 2));
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].kind, TokenKind::Digit);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_non_ascii_words_are_kept_whole() {
        assert_eq!(texts("café—déjà vu"), vec!["café—déjà", "vu"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(PunctuationTokenizer::new().name(), "punctuation");
    }
}
