//! # Vocabulary Index
//!
//! A read-only bidirectional view of a vocabulary:
//! * `{ token -> T }` for encoding;
//! * `[ token ]` indexed by id, for decoding.

use crate::{
    errors::{WMResult, WordmillError},
    types::{TokenType, WMHashMap, hash_map_with_capacity},
    vocab::{UNK_ID, Vocabulary, validators::try_vocab_size, vocabulary::check_reserved_prefix},
};

/// How to treat a token which appears on more than one vocabulary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplicateTokenPolicy {
    /// Fail with [`WordmillError::DuplicateToken`].
    #[default]
    Reject,

    /// The first line wins in the token map.
    ///
    /// The id list still holds every line, so later duplicates decode
    /// to the token but the token encodes to its first id.
    FirstWins,
}

/// Options for loading a [`VocabIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabLoadOptions {
    /// Duplicate line handling.
    pub duplicates: DuplicateTokenPolicy,

    /// Require the list to start with the reserved tokens.
    pub require_reserved: bool,
}

impl Default for VocabLoadOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicateTokenPolicy::Reject,
            require_reserved: true,
        }
    }
}

impl VocabLoadOptions {
    /// Sets the duplicate line policy.
    pub fn with_duplicates(
        self,
        duplicates: DuplicateTokenPolicy,
    ) -> Self {
        Self { duplicates, ..self }
    }

    /// Sets whether the reserved tokens are required.
    pub fn with_require_reserved(
        self,
        require_reserved: bool,
    ) -> Self {
        Self {
            require_reserved,
            ..self
        }
    }
}

/// Bidirectional `token <-> id` index over a vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabIndex<T: TokenType = u32> {
    /// `{ token -> id }`.
    token_ids: WMHashMap<String, T>,

    /// `[ token ]`, indexed by id.
    tokens: Vec<String>,

    unk_id: T,
}

impl<T: TokenType> VocabIndex<T> {
    /// Build an index over a validated [`Vocabulary`].
    pub fn from_vocabulary(vocab: &Vocabulary) -> WMResult<Self> {
        Self::from_tokens(vocab.tokens().to_vec(), &VocabLoadOptions::default())
    }

    /// Build an index from an id-ordered token list.
    ///
    /// ## Arguments
    /// * `tokens` - the tokens; a token's id is its position.
    /// * `options` - duplicate and reserved token checks.
    ///
    /// ## Errors
    /// * [`WordmillError::DuplicateToken`] under [`DuplicateTokenPolicy::Reject`].
    /// * [`WordmillError::VocabConflict`] if the reserved tokens are required and missing.
    /// * [`WordmillError::VocabSizeOverflow`] if an id does not fit in `T`.
    pub fn from_tokens(
        tokens: Vec<String>,
        options: &VocabLoadOptions,
    ) -> WMResult<Self> {
        try_vocab_size::<T>(tokens.len())?;
        if options.require_reserved {
            check_reserved_prefix(&tokens)?;
        }

        let mut token_ids: WMHashMap<String, T> = hash_map_with_capacity(tokens.len());
        let mut first_ids: WMHashMap<&str, usize> = hash_map_with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            if let Some(&first) = first_ids.get(token.as_str()) {
                match options.duplicates {
                    DuplicateTokenPolicy::Reject => {
                        return Err(WordmillError::DuplicateToken {
                            token: token.clone(),
                            first,
                            duplicate: idx,
                        });
                    }
                    DuplicateTokenPolicy::FirstWins => {
                        log::warn!("duplicate vocabulary token {token:?} at line {idx}; keeping id {first}");
                        continue;
                    }
                }
            }
            first_ids.insert(token.as_str(), idx);
            token_ids.insert(token.clone(), to_token::<T>(idx)?);
        }
        drop(first_ids);

        Ok(Self {
            token_ids,
            tokens,
            unk_id: to_token::<T>(UNK_ID)?,
        })
    }

    /// The number of ids (vocabulary lines).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the index empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The tokens, in id order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The id substituted for unknown tokens.
    pub fn unk_id(&self) -> T {
        self.unk_id
    }

    /// The largest id, if any.
    pub fn max_token(&self) -> Option<T> {
        self.token_ids.values().max().copied()
    }

    /// The id of `token`, if present.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_ids.get(token).copied()
    }

    /// The id of `token`; [`UNK_ID`] when absent.
    pub fn id_or_unk(
        &self,
        token: &str,
    ) -> T {
        self.lookup_id(token).unwrap_or(self.unk_id)
    }

    /// The token for `id`, if present.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.tokens.get(idx))
            .map(String::as_str)
    }

    /// Decode ids to tokens.
    ///
    /// ## Errors
    /// [`WordmillError::TokenOutOfRange`] for an id past the end of the vocabulary.
    pub fn try_decode(
        &self,
        ids: &[T],
    ) -> WMResult<Vec<&str>> {
        ids.iter()
            .map(|&id| {
                self.lookup_token(id)
                    .ok_or_else(|| WordmillError::TokenOutOfRange {
                        id: id.to_u64().unwrap_or(u64::MAX),
                    })
            })
            .collect()
    }
}

fn to_token<T: TokenType>(idx: usize) -> WMResult<T> {
    T::from_usize(idx).ok_or(WordmillError::VocabSizeOverflow { size: idx + 1 })
}
