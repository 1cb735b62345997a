//! # Line Tokenizers
//!
//! The vocabulary builder and the encoder see text only through
//! the [`TextTokenizer`] capability: one line in, an ordered list of tokens out.
//!
//! Provided implementations:
//! * [`RegexTokenizer`] - tokens are the non-overlapping matches of a pattern;
//!   the default pattern is [`DEFAULT_WORD_PATTERN`].
//! * [`WhitespaceTokenizer`] - tokens are the whitespace separated fields.

mod regex_tokenizer;
mod whitespace_tokenizer;

use std::sync::Arc;

#[doc(inline)]
pub use regex_tokenizer::{DEFAULT_WORD_PATTERN, RegexTokenizer};
#[doc(inline)]
pub use whitespace_tokenizer::WhitespaceTokenizer;

use crate::errors::WMResult;

/// Splits a line of text into an ordered sequence of token strings.
///
/// Implementations must be deterministic: the same line always
/// yields the same tokens, or vocabulary ids will not line up
/// between building and encoding.
pub trait TextTokenizer {
    /// Tokenize one line of text.
    ///
    /// Line terminators are not tokens; an empty or blank line
    /// yields an empty list.
    ///
    /// ## Errors
    /// [`crate::WordmillError::Tokenizer`] if the line cannot be tokenized.
    fn try_tokenize(
        &self,
        text: &str,
    ) -> WMResult<Vec<String>>;
}

impl<T: TextTokenizer + ?Sized> TextTokenizer for &T {
    fn try_tokenize(
        &self,
        text: &str,
    ) -> WMResult<Vec<String>> {
        (**self).try_tokenize(text)
    }
}

impl<T: TextTokenizer + ?Sized> TextTokenizer for Box<T> {
    fn try_tokenize(
        &self,
        text: &str,
    ) -> WMResult<Vec<String>> {
        (**self).try_tokenize(text)
    }
}

impl<T: TextTokenizer + ?Sized> TextTokenizer for Arc<T> {
    fn try_tokenize(
        &self,
        text: &str,
    ) -> WMResult<Vec<String>> {
        (**self).try_tokenize(text)
    }
}
