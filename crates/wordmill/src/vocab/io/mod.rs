//! # Vocabulary IO
//!
//! Vocabulary files hold one token per line, with no header;
//! a token's id is its (0-based) line number.
//!
//! ## Building and Loading
//!
//! ```rust,no_run
//! use wordmill::{
//!     tokenizers::RegexTokenizer,
//!     vocab::{
//!         VocabBuilderOptions,
//!         VocabIndex,
//!         VocabLoadOptions,
//!         io::{create_vocabulary, load_vocab_index_path},
//!     },
//! };
//!
//! fn example() -> wordmill::WMResult<VocabIndex<u32>> {
//!     let tokenizer = RegexTokenizer::default();
//!
//!     create_vocabulary(
//!         "data/vocab40000.from",
//!         "data/train.en",
//!         &VocabBuilderOptions::new(40_000),
//!         &tokenizer,
//!     )?;
//!
//!     load_vocab_index_path("data/vocab40000.from", &VocabLoadOptions::default())
//! }
//! ```

mod create_vocabulary;
mod vocab_file;

#[doc(inline)]
pub use create_vocabulary::{build_vocabulary_from_reader, create_vocabulary};
#[doc(inline)]
pub use vocab_file::{
    load_vocab_index_path,
    load_vocabulary_path,
    read_vocab_tokens,
    write_vocabulary,
};
