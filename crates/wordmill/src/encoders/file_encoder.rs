//! # File Encoding

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    encoders::{TokenEncoder, TokenEncoderOptions, write_id_line},
    errors::WMResult,
    support::{StepOutcome, write_artifact},
    tokenizers::TextTokenizer,
    types::TokenType,
    vocab::{DEFAULT_PROGRESS_INTERVAL, VocabIndex, VocabLoadOptions, io::load_vocab_index_path},
};

/// Encode each line of `reader` into an id line of `writer`.
///
/// ## Arguments
/// * `encoder` - the encoder.
/// * `reader` - the text lines.
/// * `writer` - the id lines target.
/// * `progress_interval` - log progress every `n` lines; `0` disables.
///
/// ## Returns
/// The number of lines encoded.
pub fn encode_lines<T, Z, R, W>(
    encoder: &TokenEncoder<T, Z>,
    reader: R,
    writer: &mut W,
    progress_interval: usize,
) -> WMResult<usize>
where
    T: TokenType,
    Z: TextTokenizer,
    R: BufRead,
    W: Write + ?Sized,
{
    let mut count: usize = 0;
    for line in reader.lines() {
        count += 1;
        if progress_interval > 0 && count.is_multiple_of(progress_interval) {
            log::debug!("  tokenizing line {count}");
        }

        let ids = encoder.try_encode(&line?)?;
        write_id_line(writer, &ids)?;
    }
    Ok(count)
}

/// Encode a text file into an id file, unless the id file already exists.
///
/// Loads the vocabulary only when there is work to do.
///
/// ## Arguments
/// * `data_path` - the text file, one sentence per line.
/// * `target_path` - where the id file will be written.
/// * `vocab_path` - the vocabulary file.
/// * `tokenizer` - the line tokenizer.
/// * `options` - encoder options.
/// * `load_options` - vocabulary load options.
///
/// ## Errors
/// * [`crate::WordmillError::VocabularyNotFound`] if `vocab_path` does not exist.
/// * io and tokenizer failures.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn data_to_token_ids<Z>(
    data_path: impl AsRef<Path>,
    target_path: impl AsRef<Path>,
    vocab_path: impl AsRef<Path>,
    tokenizer: Z,
    options: &TokenEncoderOptions,
    load_options: &VocabLoadOptions,
) -> WMResult<StepOutcome>
where
    Z: TextTokenizer,
{
    let data_path = data_path.as_ref();
    let vocab_path = vocab_path.as_ref();

    write_artifact(target_path.as_ref(), |writer| {
        log::info!("Tokenizing data in {}", data_path.display());

        let vocab: VocabIndex<u32> = load_vocab_index_path(vocab_path, load_options)?;
        let encoder = TokenEncoder::new(vocab, tokenizer, options.clone());

        let reader = BufReader::new(File::open(data_path)?);
        let count = encode_lines(&encoder, reader, writer, DEFAULT_PROGRESS_INTERVAL)?;
        log::debug!("encoded {count} lines");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        errors::WordmillError,
        tokenizers::WhitespaceTokenizer,
        vocab::{Vocabulary, io::write_vocabulary},
    };

    fn write_cat_vocab(path: &Path) {
        let vocab = Vocabulary::from_ranked_tokens(["the", "sat", "cat", "dog"], 10).unwrap();
        let mut file = File::create(path).unwrap();
        write_vocabulary(&vocab, &mut file).unwrap();
    }

    #[test]
    fn test_encode_lines() {
        let vocab = Vocabulary::from_ranked_tokens(["the", "sat", "cat", "dog"], 10).unwrap();
        let encoder = TokenEncoder::<u32, _>::new(
            vocab.to_index::<u32>().unwrap(),
            WhitespaceTokenizer,
            Default::default(),
        );

        let mut buf: Vec<u8> = Vec::new();
        let count = encode_lines(&encoder, "the cat ran\n\nthe dog\n".as_bytes(), &mut buf, 1).unwrap();
        assert_eq!(count, 3);
        assert_eq!(String::from_utf8(buf).unwrap(), "4 6 3\n\n4 7\n");
    }

    #[test]
    fn test_data_to_token_ids() {
        let dir = tempdir::TempDir::new("encode").unwrap();
        let vocab_path = dir.path().join("vocab10.from");
        let data_path = dir.path().join("train.en");
        let target_path = dir.path().join("train.en.ids10");
        write_cat_vocab(&vocab_path);
        fs::write(&data_path, "the cat sat\nthe bird sat\n").unwrap();

        let outcome = data_to_token_ids(
            &data_path,
            &target_path,
            &vocab_path,
            WhitespaceTokenizer,
            &TokenEncoderOptions::default(),
            &VocabLoadOptions::default(),
        )
        .unwrap();
        assert_eq!(outcome, StepOutcome::Built);
        assert_eq!(fs::read_to_string(&target_path).unwrap(), "4 6 5\n4 3 5\n");

        // Existing output: skipped, even with the vocabulary gone.
        fs::remove_file(&vocab_path).unwrap();
        let outcome = data_to_token_ids(
            &data_path,
            &target_path,
            &vocab_path,
            WhitespaceTokenizer,
            &TokenEncoderOptions::default(),
            &VocabLoadOptions::default(),
        )
        .unwrap();
        assert_eq!(outcome, StepOutcome::Skipped);
        assert_eq!(fs::read_to_string(&target_path).unwrap(), "4 6 5\n4 3 5\n");
    }

    #[test]
    fn test_missing_vocab() {
        let dir = tempdir::TempDir::new("encode").unwrap();
        let data_path = dir.path().join("dev.fr");
        let target_path = dir.path().join("dev.fr.ids10");
        fs::write(&data_path, "le chat\n").unwrap();

        let err = data_to_token_ids(
            &data_path,
            &target_path,
            dir.path().join("vocab10.to"),
            WhitespaceTokenizer,
            &TokenEncoderOptions::default(),
            &VocabLoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, WordmillError::VocabularyNotFound { .. }));
        assert!(!target_path.exists());
    }
}
