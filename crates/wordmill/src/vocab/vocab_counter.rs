//! # Vocabulary Builder
//!
//! Counts token frequencies over a corpus and ranks them into a [`Vocabulary`].
//!
//! Ranking is by descending count; equal counts keep the order in which the
//! tokens were first seen, so the result never depends on hash ordering.

use core::cmp::Reverse;

use crate::{
    errors::WMResult,
    tokenizers::TextTokenizer,
    types::{CountType, StringChunkType, WMHashMap, hash_map_with_capacity},
    vocab::{ReservedToken, Vocabulary, maybe_normalize_digits, validators::try_min_vocab_size},
};

/// Default interval, in lines, between progress log messages.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100_000;

/// Options for [`VocabCounter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabBuilderOptions {
    /// The vocab size limit, including the reserved tokens.
    pub max_vocab_size: usize,

    /// Replace digits with `0` before counting.
    pub normalize_digits: bool,

    /// Log progress every `progress_interval` lines; `0` disables.
    pub progress_interval: usize,
}

impl VocabBuilderOptions {
    /// Create new options.
    ///
    /// Digit normalization is enabled.
    ///
    /// ## Arguments
    /// * `max_vocab_size` - the vocab size limit, including the reserved tokens.
    pub fn new(max_vocab_size: usize) -> Self {
        Self {
            max_vocab_size,
            normalize_digits: true,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Sets the vocab size limit.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            max_vocab_size,
            ..self
        }
    }

    /// Sets digit normalization.
    pub fn with_normalize_digits(
        self,
        normalize_digits: bool,
    ) -> Self {
        Self {
            normalize_digits,
            ..self
        }
    }

    /// Sets the progress log interval.
    pub fn with_progress_interval(
        self,
        progress_interval: usize,
    ) -> Self {
        Self {
            progress_interval,
            ..self
        }
    }

    /// Check the options.
    ///
    /// ## Errors
    /// [`crate::WordmillError::VocabSizeTooSmall`] if `max_vocab_size < 4`.
    pub fn validate(&self) -> WMResult<()> {
        try_min_vocab_size(self.max_vocab_size)?;
        Ok(())
    }

    /// Initializes a [`VocabCounter`] from these options.
    pub fn init<K, C>(self) -> VocabCounter<K, C>
    where
        K: StringChunkType,
        C: CountType,
    {
        VocabCounter::new(self)
    }
}

/// Frequency and first position of a counted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCount<C: CountType> {
    /// Number of occurrences.
    pub count: C,

    /// Index of the token's first occurrence, among distinct tokens.
    pub first_seen: usize,
}

/// Token frequency counter.
///
/// # Parameters
/// * `K` - the type used to store token strings.
/// * `C` - the type used to store counts.
pub struct VocabCounter<K = String, C = u64>
where
    K: StringChunkType,
    C: CountType,
{
    /// The builder options.
    pub options: VocabBuilderOptions,

    token_counts: WMHashMap<K, TokenCount<C>>,

    lines_seen: usize,
}

impl<K, C> VocabCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// Create a new counter.
    pub fn new(options: VocabBuilderOptions) -> Self {
        Self {
            options,
            token_counts: hash_map_with_capacity(10_000),
            lines_seen: 0,
        }
    }

    /// The number of distinct tokens counted.
    pub fn num_distinct(&self) -> usize {
        self.token_counts.len()
    }

    /// The number of lines counted.
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// The count for `token`, after normalization.
    pub fn count_of(
        &self,
        token: &str,
    ) -> Option<C> {
        let token = maybe_normalize_digits(token.trim_end(), self.options.normalize_digits);
        self.token_counts
            .get(&K::from(&*token))
            .map(|tc| tc.count)
    }

    /// Count already tokenized tokens.
    ///
    /// Tokens are counted as stored on a vocabulary line: trailing
    /// whitespace is dropped, and blank tokens are not counted.
    ///
    /// Tokens spelled like a reserved token are not counted;
    /// the reserved tokens always hold their fixed ids.
    pub fn update_from_tokens<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let normalize = self.options.normalize_digits;
        for token in tokens {
            let token = token.as_ref().trim_end();
            if token.is_empty() {
                continue;
            }

            let token = maybe_normalize_digits(token, normalize);
            if ReservedToken::is_reserved(&token) {
                continue;
            }

            let next_rank = self.token_counts.len();
            self.token_counts
                .entry(K::from(&*token))
                .or_insert(TokenCount {
                    count: C::zero(),
                    first_seen: next_rank,
                })
                .count += C::one();
        }
    }

    /// Tokenize and count one line of text.
    ///
    /// ## Errors
    /// Propagates tokenizer failures.
    pub fn update_from_text<Z>(
        &mut self,
        tokenizer: &Z,
        text: &str,
    ) -> WMResult<()>
    where
        Z: TextTokenizer + ?Sized,
    {
        self.lines_seen += 1;
        let interval = self.options.progress_interval;
        if interval > 0 && self.lines_seen.is_multiple_of(interval) {
            log::debug!("  processing line {}", self.lines_seen);
        }

        let tokens = tokenizer.try_tokenize(text)?;
        self.update_from_tokens(tokens);
        Ok(())
    }

    /// Tokenize and count each sample.
    ///
    /// ## Errors
    /// Propagates the first tokenizer failure.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokenizer, samples)))]
    pub fn update_from_samples<Z, I>(
        &mut self,
        tokenizer: &Z,
        samples: I,
    ) -> WMResult<()>
    where
        Z: TextTokenizer + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(tokenizer, sample.as_ref())?;
        }
        Ok(())
    }

    /// The counted tokens, best ranked first.
    pub fn ranked_tokens(&self) -> Vec<(&K, C)> {
        let mut ranked: Vec<(&K, &TokenCount<C>)> = self.token_counts.iter().collect();
        ranked.sort_unstable_by_key(|(_, tc)| (Reverse(tc.count), tc.first_seen));
        ranked.into_iter().map(|(k, tc)| (k, tc.count)).collect()
    }

    /// Rank the counted tokens into a [`Vocabulary`].
    ///
    /// ## Errors
    /// [`crate::WordmillError::VocabSizeTooSmall`] if `max_vocab_size < 4`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn finish(self) -> WMResult<Vocabulary> {
        self.options.validate()?;

        let ranked = self.ranked_tokens();
        log::debug!(
            "ranked {} distinct tokens from {} lines",
            ranked.len(),
            self.lines_seen
        );

        Vocabulary::from_ranked_tokens(
            ranked.into_iter().map(|(k, _)| k.as_ref()),
            self.options.max_vocab_size,
        )
    }
}
