//! # `wordmill` Corpus Vocabulary Suite
//!
//! `wordmill` turns line-parallel text corpora into integer token-id files
//! for sequence-to-sequence translation models.
//!
//! See:
//! * [`tokenizers`] for the pluggable line tokenizer.
//! * [`vocab`] to build, save and load token vocabularies.
//! * [`encoders`] to encode text into token ids.
//! * [`pipeline`] to prepare a full `train` / `dev` corpus.
//!
//! ## Reserved Tokens
//!
//! Every vocabulary starts with the same four reserved tokens:
//!
//! | id | token   |
//! |----|---------|
//! | 0  | `_PAD`  |
//! | 1  | `_GO`   |
//! | 2  | `_EOS`  |
//! | 3  | `_UNK`  |
//!
//! See [`vocab::ReservedToken`].
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Preparing a Corpus
//!
//! ```rust,no_run
//! use wordmill::pipeline::prepare_wmt_data;
//!
//! fn example() -> wordmill::WMResult<()> {
//!     let prepared = prepare_wmt_data("data/", 40_000, 40_000)?;
//!     println!("- from train ids: {:?}", prepared.from_train_ids);
//!     println!("- to vocab: {:?}", prepared.to_vocab);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod encoders;
pub mod errors;
pub mod pipeline;
pub mod regex;
pub mod support;
pub mod tokenizers;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoders::{TokenEncoder, TokenEncoderOptions};
#[doc(inline)]
pub use errors::{WMResult, WordmillError};
#[doc(inline)]
pub use tokenizers::{RegexTokenizer, TextTokenizer, WhitespaceTokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{VocabIndex, Vocabulary};
