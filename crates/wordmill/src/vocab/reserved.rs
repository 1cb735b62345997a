//! # Reserved Tokens
//!
//! Every vocabulary begins with the same four tokens, in this order.
//! They are part of the on-disk format: a model trained against
//! a vocabulary relies on `_PAD` being id 0, `_UNK` being id 3, etc.

/// The reserved tokens, in id order.
pub const RESERVED_TOKENS: [&str; 4] = ["_PAD", "_GO", "_EOS", "_UNK"];

/// The number of reserved tokens; also the smallest legal vocab size.
pub const NUM_RESERVED_TOKENS: usize = RESERVED_TOKENS.len();

/// Padding token id.
pub const PAD_ID: usize = 0;

/// Decoder start token id.
pub const GO_ID: usize = 1;

/// End of sequence token id.
pub const EOS_ID: usize = 2;

/// Unknown token id.
pub const UNK_ID: usize = 3;

/// A reserved vocabulary token.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum ReservedToken {
    /// Padding.
    #[strum(serialize = "_PAD")]
    Pad,

    /// Decoder start.
    #[strum(serialize = "_GO")]
    Go,

    /// End of sequence.
    #[strum(serialize = "_EOS")]
    Eos,

    /// Unknown / out of vocabulary.
    #[strum(serialize = "_UNK")]
    Unk,
}

impl ReservedToken {
    /// The token's fixed id.
    pub const fn id(self) -> usize {
        match self {
            Self::Pad => PAD_ID,
            Self::Go => GO_ID,
            Self::Eos => EOS_ID,
            Self::Unk => UNK_ID,
        }
    }

    /// The token's text.
    pub const fn as_str(self) -> &'static str {
        RESERVED_TOKENS[self.id()]
    }

    /// Is `token` the text of a reserved token?
    pub fn is_reserved(token: &str) -> bool {
        RESERVED_TOKENS.contains(&token)
    }
}
