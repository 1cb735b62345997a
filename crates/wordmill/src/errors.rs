//! # Error Types

use std::path::PathBuf;

/// Errors from wordmill operations.
#[derive(Debug, thiserror::Error)]
pub enum WordmillError {
    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Attempt to load a vocabulary from a path that does not exist.
    #[error("vocabulary file {} not found", path.display())]
    VocabularyNotFound {
        /// The missing vocabulary path.
        path: PathBuf,
    },

    /// Failure from the pluggable tokenizer.
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Vocab size is below the minimum (the reserved tokens).
    #[error("vocab size ({size}) must be >= {min}")]
    VocabSizeTooSmall {
        /// The vocab size that was too small.
        size: usize,

        /// The minimum size.
        min: usize,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A token appears on more than one vocabulary line.
    #[error("duplicate token {token:?} at line {duplicate} (first seen at line {first})")]
    DuplicateToken {
        /// The duplicated token.
        token: String,

        /// The id (0-based line) of the first occurrence.
        first: usize,

        /// The id (0-based line) of the duplicate.
        duplicate: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token id out of range for the vocabulary.
    #[error("token id {id} out of range")]
    TokenOutOfRange {
        /// The offending id.
        id: u64,
    },

    /// Regex pattern compilation failed.
    #[error("regex error: {0}")]
    Regex(String),

    /// Parse error (token id lists, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordmill operations.
pub type WMResult<T> = core::result::Result<T, WordmillError>;
