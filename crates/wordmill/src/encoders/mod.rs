//! # Token Encoders
//!
//! [`TokenEncoder`] maps a line of text to token ids through a [`crate::VocabIndex`];
//! tokens missing from the vocabulary become [`crate::vocab::UNK_ID`].
//!
//! Digit normalization is off by default. It must match the setting used to
//! build the vocabulary, or numeric tokens will encode as unknown.
//!
//! ## Encoded File Format
//!
//! One line per input line; space separated decimal ids.
//! See [`write_id_line`] and [`parse_id_line`].

mod file_encoder;
mod id_lines;
mod token_encoder;

#[doc(inline)]
pub use file_encoder::{data_to_token_ids, encode_lines};
#[doc(inline)]
pub use id_lines::{parse_id_line, write_id_line};
#[doc(inline)]
pub use token_encoder::{TokenEncoder, TokenEncoderOptions};
