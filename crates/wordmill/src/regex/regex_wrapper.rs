//! # Regex Wrapper

use core::fmt::Debug;

use crate::{errors::WordmillError, regex::RegexPattern};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

impl From<ErrorWrapper> for WordmillError {
    fn from(err: ErrorWrapper) -> Self {
        WordmillError::Regex(err.to_string())
    }
}

impl TryFrom<RegexPattern> for RegexWrapper {
    type Error = ErrorWrapper;

    fn try_from(pattern: RegexPattern) -> Result<Self, Self::Error> {
        pattern.compile()
    }
}

/// Wrapper for compiled regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Wrapper for `find_iter`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A [`MatchesWrapper`] iterator over the matched text.
    ///
    /// `fancy_regex` can fail mid-search (backtrack limits);
    /// those failures are yielded as `Err` items.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => regex.find_iter(haystack).into(),
            Self::Fancy(regex) => regex.find_iter(haystack).into(),
        }
    }
}

/// Wrapper for regex matches.
pub enum MatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Regex(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    FancyRegex(fancy_regex::Matches<'r, 'h>),
}

impl<'r, 'h> From<regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: regex::Matches<'r, 'h>) -> Self {
        Self::Regex(matches)
    }
}

impl<'r, 'h> From<fancy_regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: fancy_regex::Matches<'r, 'h>) -> Self {
        Self::FancyRegex(matches)
    }
}

impl<'r, 'h> Iterator for MatchesWrapper<'r, 'h> {
    type Item = Result<&'h str, ErrorWrapper>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Regex(matches) => matches.next().map(|m| Ok(m.as_str())),
            Self::FancyRegex(matches) => matches
                .next()
                .map(|m| m.map(|m| m.as_str()).map_err(ErrorWrapper::from)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_eq() {
        let b0 = RegexPattern::Basic("hello world".to_string())
            .compile()
            .unwrap();
        let b1 = RegexPattern::Basic("world".to_string()).compile().unwrap();
        let f0 = RegexPattern::Fancy("hello world".to_string())
            .compile()
            .unwrap();

        assert_eq!(&b0, &b0);
        assert_ne!(&b0, &b1);
        assert_eq!(&f0, &f0);

        // Same text, different engines.
        assert_ne!(&b0, &f0);
    }

    #[test]
    fn test_find_iter() {
        for pattern in [
            RegexPattern::Basic(r"\w+".to_string()),
            RegexPattern::Fancy(r"\w+".to_string()),
        ] {
            let re = pattern.compile().unwrap();
            let words = re
                .find_iter("the cat, sat")
                .collect::<Result<Vec<_>, _>>()
                .unwrap();
            assert_eq!(words, vec!["the", "cat", "sat"]);
        }
    }

    #[test]
    fn test_error_conversion() {
        let err = RegexPattern::Basic("(".to_string()).compile().unwrap_err();
        let err: WordmillError = err.into();
        assert!(matches!(err, WordmillError::Regex(_)));
    }
}
