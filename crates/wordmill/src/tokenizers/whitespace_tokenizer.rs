//! # Whitespace Tokenizer

use crate::{errors::WMResult, tokenizers::TextTokenizer};

/// Splits on Unicode whitespace; never fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl TextTokenizer for WhitespaceTokenizer {
    fn try_tokenize(
        &self,
        text: &str,
    ) -> WMResult<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
