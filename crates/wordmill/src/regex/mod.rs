//! # Regex Utilities
//!
//! Mechanisms to mix `regex` and `fancy_regex` patterns behind one type.
//!
//! Patterns which the `regex` crate can compile are compiled there;
//! patterns that need look-around or backreferences fall back to `fancy_regex`.

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::{ConstRegexPattern, RegexPattern};
#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, MatchesWrapper, RegexWrapper};
