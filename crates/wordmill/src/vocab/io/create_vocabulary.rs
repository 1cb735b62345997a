//! # Vocabulary Creation

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::WMResult,
    support::{StepOutcome, write_artifact},
    tokenizers::TextTokenizer,
    vocab::{VocabBuilderOptions, VocabCounter, Vocabulary, io::write_vocabulary},
};

/// Count a line reader into a [`Vocabulary`].
///
/// Each line is one sample; line terminators are not passed to the tokenizer.
///
/// ## Arguments
/// * `reader` - the corpus lines.
/// * `options` - size limit and normalization.
/// * `tokenizer` - the line tokenizer.
pub fn build_vocabulary_from_reader<R, Z>(
    reader: R,
    options: &VocabBuilderOptions,
    tokenizer: &Z,
) -> WMResult<Vocabulary>
where
    R: BufRead,
    Z: TextTokenizer + ?Sized,
{
    let mut counter: VocabCounter = options.clone().init();
    for line in reader.lines() {
        counter.update_from_text(tokenizer, &line?)?;
    }
    counter.finish()
}

/// Create a vocabulary file from a corpus file, unless it already exists.
///
/// The corpus holds one sentence per line. The vocabulary is written one
/// token per line, so the token on line `n` (from 0) gets id `n`.
///
/// ## Arguments
/// * `vocab_path` - where the vocabulary will be written.
/// * `data_path` - the corpus file.
/// * `options` - size limit and normalization.
/// * `tokenizer` - the line tokenizer.
///
/// ## Returns
/// [`StepOutcome::Skipped`] without reading `data_path` or checking
/// `options` when `vocab_path` exists.
///
/// ## Errors
/// * [`crate::WordmillError::VocabSizeTooSmall`] if `max_vocab_size < 4`.
/// * io and tokenizer failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn create_vocabulary<Z>(
    vocab_path: impl AsRef<Path>,
    data_path: impl AsRef<Path>,
    options: &VocabBuilderOptions,
    tokenizer: &Z,
) -> WMResult<StepOutcome>
where
    Z: TextTokenizer + ?Sized,
{
    let vocab_path = vocab_path.as_ref();
    let data_path = data_path.as_ref();

    write_artifact(vocab_path, |writer| {
        options.validate()?;
        log::info!(
            "Creating vocabulary {} from data {}",
            vocab_path.display(),
            data_path.display()
        );
        let reader = BufReader::new(File::open(data_path)?);
        let vocab = build_vocabulary_from_reader(reader, options, tokenizer)?;
        log::info!("Vocabulary Size: {}", vocab.len());
        write_vocabulary(&vocab, writer)
    })
}
