//! # Vocabulary
//!
//! This module provides vocabularies and their io.
//!
//! ## Building
//!
//! [`VocabCounter`] counts (optionally digit normalized) token frequencies,
//! and ranks them into a [`Vocabulary`]: the [`RESERVED_TOKENS`] followed by
//! the most frequent tokens, truncated to the size limit.
//!
//! ## Loading
//!
//! [`VocabIndex`] is the read-only `token <-> id` view used by encoders;
//! it is loaded from a vocabulary file with [`io::load_vocab_index_path`].
//!
//! ## File Format
//!
//! One token per line, no header; the line number (from 0) is the id.

pub mod io;

mod digits;
mod reserved;
mod validators;
mod vocab_counter;
mod vocab_index;
mod vocabulary;

#[doc(inline)]
pub use digits::{DIGIT_MARKER, maybe_normalize_digits, normalize_digits};
#[doc(inline)]
pub use reserved::{
    EOS_ID,
    GO_ID,
    NUM_RESERVED_TOKENS,
    PAD_ID,
    RESERVED_TOKENS,
    ReservedToken,
    UNK_ID,
};
#[doc(inline)]
pub use validators::{try_min_vocab_size, try_vocab_size};
#[doc(inline)]
pub use vocab_counter::{
    DEFAULT_PROGRESS_INTERVAL,
    TokenCount,
    VocabBuilderOptions,
    VocabCounter,
};
#[doc(inline)]
pub use vocab_index::{DuplicateTokenPolicy, VocabIndex, VocabLoadOptions};
#[doc(inline)]
pub use vocabulary::Vocabulary;
