//! # Token Encoder

use std::sync::Arc;

use crate::{
    errors::WMResult,
    tokenizers::TextTokenizer,
    types::TokenType,
    vocab::{VocabIndex, maybe_normalize_digits},
};

/// Options for [`TokenEncoder`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenEncoderOptions {
    /// Replace digits with `0` before lookup.
    ///
    /// Should match the setting the vocabulary was built with.
    pub normalize_digits: bool,
}

impl TokenEncoderOptions {
    /// Sets digit normalization.
    pub fn with_normalize_digits(
        self,
        normalize_digits: bool,
    ) -> Self {
        Self { normalize_digits }
    }
}

/// Encodes text into token ids.
///
/// # Parameters
/// * `T` - the token id type.
/// * `Z` - the tokenizer.
#[derive(Debug, Clone)]
pub struct TokenEncoder<T: TokenType, Z: TextTokenizer> {
    vocab: Arc<VocabIndex<T>>,
    tokenizer: Z,
    options: TokenEncoderOptions,
}

impl<T: TokenType, Z: TextTokenizer> TokenEncoder<T, Z> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary index.
    /// * `tokenizer` - the line tokenizer; should be the one the vocabulary was built with.
    /// * `options` - encoder options.
    pub fn new<V: Into<Arc<VocabIndex<T>>>>(
        vocab: V,
        tokenizer: Z,
        options: TokenEncoderOptions,
    ) -> Self {
        Self {
            vocab: vocab.into(),
            tokenizer,
            options,
        }
    }

    /// The vocabulary index.
    pub fn vocab(&self) -> &Arc<VocabIndex<T>> {
        &self.vocab
    }

    /// The tokenizer.
    pub fn tokenizer(&self) -> &Z {
        &self.tokenizer
    }

    /// The encoder options.
    pub fn options(&self) -> &TokenEncoderOptions {
        &self.options
    }

    /// Map already tokenized tokens to ids.
    ///
    /// Never fails; unknown tokens map to the vocabulary's unknown id.
    /// Trailing whitespace is dropped before lookup, as when building.
    pub fn encode_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        tokens
            .iter()
            .map(|token| {
                let token = maybe_normalize_digits(
                    token.as_ref().trim_end(),
                    self.options.normalize_digits,
                );
                self.vocab.id_or_unk(&token)
            })
            .collect()
    }

    /// Encode a line of text.
    ///
    /// ## Errors
    /// Propagates tokenizer failures; unknown tokens are not errors.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn try_encode(
        &self,
        text: &str,
    ) -> WMResult<Vec<T>> {
        let tokens = self.tokenizer.try_tokenize(text)?;
        Ok(self.encode_tokens(&tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        tokenizers::{RegexTokenizer, WhitespaceTokenizer},
        vocab::{UNK_ID, VocabBuilderOptions, VocabCounter, Vocabulary},
    };

    fn cat_sat_vocab() -> Vocabulary {
        let mut counter: VocabCounter = VocabBuilderOptions::new(10).init();
        counter
            .update_from_samples(&WhitespaceTokenizer, ["the cat sat", "the dog sat"])
            .unwrap();
        counter.finish().unwrap()
    }

    #[test]
    fn test_unknown_fallback() {
        let index: VocabIndex<u32> = cat_sat_vocab().to_index().unwrap();
        let the = index.lookup_id("the").unwrap();
        let cat = index.lookup_id("cat").unwrap();

        let encoder = TokenEncoder::new(index, WhitespaceTokenizer, Default::default());
        assert_eq!(
            encoder.try_encode("the cat ran").unwrap(),
            vec![the, cat, UNK_ID as u32]
        );
        assert!(encoder.try_encode("").unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let index: VocabIndex<u32> = cat_sat_vocab().to_index().unwrap();
        let encoder = TokenEncoder::new(index, WhitespaceTokenizer, Default::default());

        let line = "the dog sat the cat";
        let ids = encoder.try_encode(line).unwrap();
        assert!(!ids.contains(&(UNK_ID as u32)));

        let decoded = encoder.vocab().try_decode(&ids).unwrap();
        assert_eq!(decoded.join(" "), line);
    }

    #[test]
    fn test_normalize_digits() {
        let vocab = Vocabulary::from_ranked_tokens(["room00", "room"], 10).unwrap();
        let index: Arc<VocabIndex<u16>> = Arc::new(vocab.to_index().unwrap());

        let plain = TokenEncoder::new(
            index.clone(),
            RegexTokenizer::default(),
            TokenEncoderOptions::default(),
        );
        assert_eq!(plain.try_encode("room12").unwrap(), vec![3]);

        let normalizing = TokenEncoder::new(
            index,
            RegexTokenizer::default(),
            TokenEncoderOptions::default().with_normalize_digits(true),
        );
        assert!(normalizing.options().normalize_digits);
        assert_eq!(normalizing.try_encode("room12 room45 room").unwrap(), vec![4, 4, 5]);
    }

    #[test]
    fn test_trailing_whitespace_tokens() {
        let index: VocabIndex<u32> = cat_sat_vocab().to_index().unwrap();
        let encoder = TokenEncoder::new(
            index,
            RegexTokenizer::from_pattern(r"\w+ ?").unwrap(),
            Default::default(),
        );
        assert_eq!(encoder.try_encode("the cat the").unwrap(), vec![4, 6, 4]);
    }

    #[test]
    fn test_dyn_tokenizer() {
        let index: VocabIndex<u32> = cat_sat_vocab().to_index().unwrap();
        let tokenizer: &dyn TextTokenizer = &WhitespaceTokenizer;
        let encoder = TokenEncoder::new(index, tokenizer, Default::default());
        assert_eq!(encoder.encode_tokens(&["sat", "bird"]), vec![5, 3]);
    }
}
