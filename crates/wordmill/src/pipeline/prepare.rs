//! # Corpus Preparation

use std::path::{Path, PathBuf};

use crate::{
    encoders::{TokenEncoderOptions, data_to_token_ids},
    errors::WMResult,
    pipeline::{LanguageSide, ids_path, vocab_path},
    support::StepOutcome,
    tokenizers::{RegexTokenizer, TextTokenizer},
    vocab::{VocabBuilderOptions, VocabLoadOptions, io::create_vocabulary, try_min_vocab_size},
};

/// Options for [`CorpusPipeline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Replace digits with `0`; applies to both building and encoding.
    pub normalize_digits: bool,

    /// Vocabulary load options for the encoding steps.
    pub load: VocabLoadOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            normalize_digits: true,
            load: VocabLoadOptions::default(),
        }
    }
}

impl PipelineOptions {
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

    /// Sets the vocabulary load options.
    pub fn with_load(
        self,
        load: VocabLoadOptions,
    ) -> Self {
        Self { load, ..self }
    }

    /// The builder options for a vocabulary of `max_vocab_size`.
    pub fn builder_options(
        &self,
        max_vocab_size: usize,
    ) -> VocabBuilderOptions {
        VocabBuilderOptions::new(max_vocab_size).with_normalize_digits(self.normalize_digits)
    }

    /// The encoder options.
    pub fn encoder_options(&self) -> TokenEncoderOptions {
        TokenEncoderOptions::default().with_normalize_digits(self.normalize_digits)
    }
}

/// The four files of a parallel corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    /// Source language training text.
    pub from_train: PathBuf,

    /// Target language training text.
    pub to_train: PathBuf,

    /// Source language development text.
    pub from_dev: PathBuf,

    /// Target language development text.
    pub to_dev: PathBuf,
}

impl CorpusPaths {
    /// Create a new set of corpus paths.
    pub fn new<A, B, C, D>(
        from_train: A,
        to_train: B,
        from_dev: C,
        to_dev: D,
    ) -> Self
    where
        A: Into<PathBuf>,
        B: Into<PathBuf>,
        C: Into<PathBuf>,
        D: Into<PathBuf>,
    {
        Self {
            from_train: from_train.into(),
            to_train: to_train.into(),
            from_dev: from_dev.into(),
            to_dev: to_dev.into(),
        }
    }
}

/// The WMT English/French layout of `data_dir`.
///
/// English (`.en`) is the source side and French (`.fr`) the target side:
/// `train.en`, `train.fr`, `dev.en`, `dev.fr`.
pub fn wmt_corpus_paths<P: AsRef<Path>>(data_dir: P) -> CorpusPaths {
    let dir = data_dir.as_ref();
    CorpusPaths::new(
        dir.join("train.en"),
        dir.join("train.fr"),
        dir.join("dev.en"),
        dir.join("dev.fr"),
    )
}

/// The artifacts of a prepared corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedData {
    /// Source training ids.
    pub from_train_ids: PathBuf,

    /// Target training ids.
    pub to_train_ids: PathBuf,

    /// Source development ids.
    pub from_dev_ids: PathBuf,

    /// Target development ids.
    pub to_dev_ids: PathBuf,

    /// Source vocabulary.
    pub from_vocab: PathBuf,

    /// Target vocabulary.
    pub to_vocab: PathBuf,
}

impl PreparedData {
    /// All six paths, in field order.
    pub fn paths(&self) -> [&Path; 6] {
        [
            &self.from_train_ids,
            &self.to_train_ids,
            &self.from_dev_ids,
            &self.to_dev_ids,
            &self.from_vocab,
            &self.to_vocab,
        ]
    }
}

/// Builds the vocabularies and id files of a parallel corpus.
///
/// # Parameters
/// * `Z` - the tokenizer, shared by every step.
#[derive(Debug, Clone)]
pub struct CorpusPipeline<Z: TextTokenizer> {
    options: PipelineOptions,
    tokenizer: Z,
}

impl<Z: TextTokenizer> CorpusPipeline<Z> {
    /// Create a new pipeline.
    pub fn new(
        options: PipelineOptions,
        tokenizer: Z,
    ) -> Self {
        Self { options, tokenizer }
    }

    /// The pipeline options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// The tokenizer.
    pub fn tokenizer(&self) -> &Z {
        &self.tokenizer
    }

    /// Prepare `corpus`.
    ///
    /// Steps run in order: target vocabulary, source vocabulary, then the
    /// train and dev id files, target side first. Existing outputs are kept.
    ///
    /// ## Arguments
    /// * `data_dir` - where the vocabularies are written.
    /// * `corpus` - the corpus files; id files are written next to them.
    /// * `from_vocab_size` - the source vocabulary size limit.
    /// * `to_vocab_size` - the target vocabulary size limit.
    ///
    /// ## Errors
    /// The first failing step aborts the run; earlier outputs are kept.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data_dir)))]
    pub fn run<P: AsRef<Path>>(
        &self,
        data_dir: P,
        corpus: &CorpusPaths,
        from_vocab_size: usize,
        to_vocab_size: usize,
    ) -> WMResult<PreparedData> {
        try_min_vocab_size(from_vocab_size)?;
        try_min_vocab_size(to_vocab_size)?;

        let data_dir = data_dir.as_ref();
        let prepared = PreparedData {
            from_train_ids: ids_path(&corpus.from_train, from_vocab_size),
            to_train_ids: ids_path(&corpus.to_train, to_vocab_size),
            from_dev_ids: ids_path(&corpus.from_dev, from_vocab_size),
            to_dev_ids: ids_path(&corpus.to_dev, to_vocab_size),
            from_vocab: vocab_path(data_dir, from_vocab_size, LanguageSide::From),
            to_vocab: vocab_path(data_dir, to_vocab_size, LanguageSide::To),
        };

        self.build_vocab(&prepared.to_vocab, &corpus.to_train, to_vocab_size)?;
        self.build_vocab(&prepared.from_vocab, &corpus.from_train, from_vocab_size)?;

        self.encode(&corpus.to_train, &prepared.to_train_ids, &prepared.to_vocab)?;
        self.encode(&corpus.from_train, &prepared.from_train_ids, &prepared.from_vocab)?;

        self.encode(&corpus.to_dev, &prepared.to_dev_ids, &prepared.to_vocab)?;
        self.encode(&corpus.from_dev, &prepared.from_dev_ids, &prepared.from_vocab)?;

        Ok(prepared)
    }

    fn build_vocab(
        &self,
        vocab_path: &Path,
        data_path: &Path,
        vocab_size: usize,
    ) -> WMResult<StepOutcome> {
        let outcome = create_vocabulary(
            vocab_path,
            data_path,
            &self.options.builder_options(vocab_size),
            &self.tokenizer,
        )?;
        log::info!("vocabulary {}: {outcome}", vocab_path.display());
        Ok(outcome)
    }

    fn encode(
        &self,
        data_path: &Path,
        target_path: &Path,
        vocab_path: &Path,
    ) -> WMResult<StepOutcome> {
        let outcome = data_to_token_ids(
            data_path,
            target_path,
            vocab_path,
            &self.tokenizer,
            &self.options.encoder_options(),
            &self.options.load,
        )?;
        log::info!("ids {}: {outcome}", target_path.display());
        Ok(outcome)
    }
}

/// Prepare `corpus` with the default [`PipelineOptions`].
///
/// See [`CorpusPipeline::run`].
pub fn prepare_data<P, Z>(
    data_dir: P,
    corpus: &CorpusPaths,
    from_vocab_size: usize,
    to_vocab_size: usize,
    tokenizer: Z,
) -> WMResult<PreparedData>
where
    P: AsRef<Path>,
    Z: TextTokenizer,
{
    CorpusPipeline::new(PipelineOptions::default(), tokenizer).run(
        data_dir,
        corpus,
        from_vocab_size,
        to_vocab_size,
    )
}

/// Prepare the WMT English/French corpus in `data_dir`.
///
/// Uses [`wmt_corpus_paths`], the default [`RegexTokenizer`] and
/// the default [`PipelineOptions`].
pub fn prepare_wmt_data<P: AsRef<Path>>(
    data_dir: P,
    en_vocab_size: usize,
    fr_vocab_size: usize,
) -> WMResult<PreparedData> {
    let data_dir = data_dir.as_ref();
    prepare_data(
        data_dir,
        &wmt_corpus_paths(data_dir),
        en_vocab_size,
        fr_vocab_size,
        RegexTokenizer::default(),
    )
}
