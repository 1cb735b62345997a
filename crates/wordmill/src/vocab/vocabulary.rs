//! # Vocabulary

use crate::{
    errors::{WMResult, WordmillError},
    types::{TokenType, WMHashMap, hash_map_with_capacity},
    vocab::{RESERVED_TOKENS, VocabIndex, validators::try_min_vocab_size},
};

/// An id-ordered list of unique tokens.
///
/// * the position of a token is its id;
/// * the list always starts with [`RESERVED_TOKENS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::reserved_only()
    }
}

impl Vocabulary {
    /// A vocabulary holding only the reserved tokens.
    pub fn reserved_only() -> Self {
        Self {
            tokens: RESERVED_TOKENS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a vocabulary from tokens ordered by rank.
    ///
    /// The result is the reserved tokens followed by `ranked`,
    /// truncated to `max_vocab_size` entries.
    ///
    /// ## Arguments
    /// * `ranked` - corpus tokens, most frequent first.
    /// * `max_vocab_size` - the size limit, including the reserved tokens.
    ///
    /// ## Errors
    /// * [`WordmillError::VocabSizeTooSmall`] if `max_vocab_size < 4`.
    /// * [`WordmillError::DuplicateToken`] if `ranked` repeats a token,
    ///   or contains a reserved token.
    /// * [`WordmillError::VocabConflict`] if a token has trailing whitespace
    ///   or a line break.
    pub fn from_ranked_tokens<I, S>(
        ranked: I,
        max_vocab_size: usize,
    ) -> WMResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        try_min_vocab_size(max_vocab_size)?;

        let mut vocab = Self::reserved_only();
        for token in ranked {
            if vocab.len() >= max_vocab_size {
                break;
            }
            vocab.tokens.push(token.as_ref().to_string());
        }

        vocab.validate()?;
        Ok(vocab)
    }

    /// Build a vocabulary from a full, id-ordered token list.
    ///
    /// ## Errors
    /// * [`WordmillError::VocabConflict`] if the list does not start
    ///   with the reserved tokens.
    /// * [`WordmillError::DuplicateToken`] on a repeated token.
    pub fn try_from_tokens(tokens: Vec<String>) -> WMResult<Self> {
        let vocab = Self { tokens };
        vocab.validate()?;
        Ok(vocab)
    }

    fn validate(&self) -> WMResult<()> {
        check_reserved_prefix(&self.tokens)?;

        let mut seen: WMHashMap<&str, usize> = hash_map_with_capacity(self.tokens.len());
        for (idx, token) in self.tokens.iter().enumerate() {
            if token.contains('\n') || token.trim_end() != token {
                return Err(WordmillError::VocabConflict(format!(
                    "token {token:?} at id {idx} cannot be stored on one vocabulary line"
                )));
            }
            if let Some(&first) = seen.get(token.as_str()) {
                return Err(WordmillError::DuplicateToken {
                    token: token.clone(),
                    first,
                    duplicate: idx,
                });
            }
            seen.insert(token.as_str(), idx);
        }
        Ok(())
    }

    /// The tokens, in id order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Release the token list.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// The number of tokens, including the reserved tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`; the reserved tokens are always present.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token for `id`, if any.
    pub fn get(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.tokens.get(id).map(String::as_str)
    }

    /// Iterate over `(id, token)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tokens.iter().map(String::as_str).enumerate()
    }

    /// Build the [`VocabIndex`] for this vocabulary.
    pub fn to_index<T: TokenType>(&self) -> WMResult<VocabIndex<T>> {
        VocabIndex::from_vocabulary(self)
    }
}

/// Check that `tokens` starts with the reserved tokens, in order.
pub(crate) fn check_reserved_prefix<S: AsRef<str>>(tokens: &[S]) -> WMResult<()> {
    for (id, expected) in RESERVED_TOKENS.iter().enumerate() {
        match tokens.get(id) {
            Some(token) if token.as_ref() == *expected => {}
            Some(token) => {
                return Err(WordmillError::VocabConflict(format!(
                    "expected reserved token {expected:?} at id {id}, found {:?}",
                    token.as_ref()
                )));
            }
            None => {
                return Err(WordmillError::VocabConflict(format!(
                    "vocabulary ends before reserved token {expected:?} (id {id})"
                )));
            }
        }
    }
    Ok(())
}
