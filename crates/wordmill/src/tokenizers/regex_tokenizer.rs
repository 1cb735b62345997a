//! # Regex Tokenizer

use crate::{
    errors::{WMResult, WordmillError},
    regex::{ConstRegexPattern, RegexPattern, RegexWrapper},
    tokenizers::TextTokenizer,
};

/// The default word pattern.
///
/// * runs of word characters, joined across inner `'`, `’` or `-`;
/// * runs of punctuation / symbols.
///
/// Whitespace is never part of a token.
pub const DEFAULT_WORD_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r"\w+(?:['’-]\w+)*|[^\w\s]+");

/// Tokenizer which yields each non-overlapping match of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexTokenizer {
    regex: RegexWrapper,
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        // The default pattern is a compile-time constant known to compile.
        Self::from_pattern(DEFAULT_WORD_PATTERN).unwrap()
    }
}

impl From<RegexWrapper> for RegexTokenizer {
    fn from(regex: RegexWrapper) -> Self {
        Self::new(regex)
    }
}

impl RegexTokenizer {
    /// Build a new [`RegexTokenizer`] from a compiled regex.
    pub fn new(regex: RegexWrapper) -> Self {
        Self { regex }
    }

    /// Build a new [`RegexTokenizer`] from a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - the token pattern; see [`RegexPattern`].
    ///
    /// ## Errors
    /// [`WordmillError::Regex`] if the pattern does not compile.
    pub fn from_pattern<P: Into<RegexPattern>>(pattern: P) -> WMResult<Self> {
        Ok(Self::new(pattern.into().compile()?))
    }

    /// Get the token regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }
}

impl TextTokenizer for RegexTokenizer {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    fn try_tokenize(
        &self,
        text: &str,
    ) -> WMResult<Vec<String>> {
        self.regex
            .find_iter(text)
            .map(|m| {
                m.map(str::to_string)
                    .map_err(|e| WordmillError::Tokenizer(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern() {
        let tokenizer = RegexTokenizer::default();
        assert!(tokenizer.regex().is_basic());

        assert_eq!(
            tokenizer
                .try_tokenize("The cat's well-fed; room 12 costs $40...\n")
                .unwrap(),
            vec![
                "The", "cat's", "well-fed", ";", "room", "12", "costs", "$", "40", "..."
            ]
        );
        assert!(tokenizer.try_tokenize("  \r\n").unwrap().is_empty());
        assert_eq!(
            tokenizer.try_tokenize("Ça va, très bien").unwrap(),
            vec!["Ça", "va", ",", "très", "bien"]
        );
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::from_pattern(r"[a-z]+").unwrap();
        assert_eq!(
            tokenizer.try_tokenize("abc DEF ghi").unwrap(),
            vec!["abc", "ghi"]
        );

        // Look-behind requires the fancy engine.
        let tokenizer = RegexTokenizer::from_pattern(r"(?<=#)\w+").unwrap();
        assert!(tokenizer.regex().is_fancy());
        assert_eq!(
            tokenizer.try_tokenize("#rust and #nlp").unwrap(),
            vec!["rust", "nlp"]
        );
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            RegexTokenizer::from_pattern(r"(unclosed"),
            Err(WordmillError::Regex(_))
        ));
    }

    #[test]
    fn test_match_failure_is_tokenizer_error() {
        // Catastrophic backtracking trips the fancy engine's backtrack limit.
        let regex = fancy_regex::RegexBuilder::new(r"(a+)+\1b")
            .backtrack_limit(100)
            .build()
            .unwrap();
        let tokenizer = RegexTokenizer::new(regex.into());

        let text = "a".repeat(64);
        assert!(matches!(
            tokenizer.try_tokenize(&text),
            Err(WordmillError::Tokenizer(_))
        ));
    }
}
