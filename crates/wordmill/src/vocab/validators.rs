//! Validators for vocabulary sizes.
use crate::{
    errors::{WMResult, WordmillError},
    types::TokenType,
    vocab::NUM_RESERVED_TOKENS,
};

/// Check that `size` can hold the reserved tokens.
pub fn try_min_vocab_size(size: usize) -> WMResult<usize> {
    if size < NUM_RESERVED_TOKENS {
        return Err(WordmillError::VocabSizeTooSmall {
            size,
            min: NUM_RESERVED_TOKENS,
        });
    }
    Ok(size)
}

/// Check that every id of a `size` vocabulary fits in `T`.
pub fn try_vocab_size<T: TokenType>(size: usize) -> WMResult<usize> {
    if size > 0 && T::from_usize(size - 1).is_none() {
        return Err(WordmillError::VocabSizeOverflow { size });
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_min_vocab_size() {
        assert_eq!(try_min_vocab_size(4).unwrap(), 4);
        assert_eq!(try_min_vocab_size(40_000).unwrap(), 40_000);
        assert!(matches!(
            try_min_vocab_size(3),
            Err(WordmillError::VocabSizeTooSmall { size: 3, min: 4 })
        ));
    }

    #[test]
    fn test_try_vocab_size() {
        assert_eq!(try_vocab_size::<u8>(256).unwrap(), 256);
        assert!(matches!(
            try_vocab_size::<u8>(257),
            Err(WordmillError::VocabSizeOverflow { size: 257 })
        ));
        assert!(try_vocab_size::<u16>(65_536).is_ok());
        assert!(try_vocab_size::<u32>(65_537).is_ok());
        assert!(try_vocab_size::<u16>(0).is_ok());
    }
}
