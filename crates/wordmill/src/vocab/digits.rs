//! # Digit Normalization

use std::{borrow::Cow, sync::LazyLock};

/// The canonical digit; every digit character is replaced by it.
pub const DIGIT_MARKER: &str = "0";

/// Matches a single Unicode decimal digit.
static DIGIT_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\d").expect("digit pattern compilation failed"));

/// Replace every decimal digit in `token` with [`DIGIT_MARKER`].
///
/// Borrows when the token holds no digits.
pub fn normalize_digits(token: &str) -> Cow<'_, str> {
    DIGIT_RE.replace_all(token, DIGIT_MARKER)
}

/// Normalize `token` if `enabled`; borrow it unchanged otherwise.
pub fn maybe_normalize_digits(
    token: &str,
    enabled: bool,
) -> Cow<'_, str> {
    if enabled {
        normalize_digits(token)
    } else {
        Cow::Borrowed(token)
    }
}
