//! # Vocabulary File IO

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    errors::{WMResult, WordmillError},
    types::TokenType,
    vocab::{VocabIndex, VocabLoadOptions, Vocabulary},
};

/// Read the token lines of a vocabulary.
///
/// Trailing whitespace (including `\r\n`) is stripped from each line.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_vocab_tokens<R: BufRead>(reader: R) -> WMResult<Vec<String>> {
    reader
        .lines()
        .map(|line| -> WMResult<String> { Ok(line?.trim_end().to_string()) })
        .collect()
}

fn open_vocab_file(path: &Path) -> WMResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(WordmillError::VocabularyNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Load a [`VocabIndex`] from a vocabulary file.
///
/// ## Arguments
/// * `path` - the vocabulary file.
/// * `options` - duplicate and reserved token checks.
///
/// ## Errors
/// * [`WordmillError::VocabularyNotFound`] if `path` does not exist.
/// * see [`VocabIndex::from_tokens`].
pub fn load_vocab_index_path<T, P>(
    path: P,
    options: &VocabLoadOptions,
) -> WMResult<VocabIndex<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let tokens = read_vocab_tokens(open_vocab_file(path)?)?;
    let index = VocabIndex::from_tokens(tokens, options)?;
    log::debug!("loaded {} tokens from {}", index.len(), path.display());
    Ok(index)
}

/// Load a strict [`Vocabulary`] from a vocabulary file.
///
/// ## Errors
/// * [`WordmillError::VocabularyNotFound`] if `path` does not exist.
/// * see [`Vocabulary::try_from_tokens`].
pub fn load_vocabulary_path<P: AsRef<Path>>(path: P) -> WMResult<Vocabulary> {
    let path = path.as_ref();
    Vocabulary::try_from_tokens(read_vocab_tokens(open_vocab_file(path)?)?)
}

/// Write a [`Vocabulary`] to a [`Write`] writer, one token per line.
pub fn write_vocabulary<W: Write + ?Sized>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> WMResult<()> {
    for token in vocab.tokens() {
        writeln!(writer, "{token}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_read_vocab_tokens() {
        let data = "_PAD\n_GO\r\n_EOS  \n_UNK\ncat";
        let tokens = read_vocab_tokens(data.as_bytes()).unwrap();
        assert_eq!(tokens, vec!["_PAD", "_GO", "_EOS", "_UNK", "cat"]);
    }

    #[test]
    fn test_save_load_vocab() {
        let vocab = Vocabulary::from_ranked_tokens(["the", "sat", "cat"], 10).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab10.from");

                let mut buf: Vec<u8> = Vec::new();
                write_vocabulary(&vocab, &mut buf).unwrap();
                assert_eq!(
                    String::from_utf8(buf.clone()).unwrap(),
                    "_PAD\n_GO\n_EOS\n_UNK\nthe\nsat\ncat\n"
                );
                fs::write(&path, &buf)?;

                let loaded = load_vocabulary_path(&path).expect("Failed to load vocab");
                assert_eq!(&loaded, &vocab);

                let index: VocabIndex<u32> =
                    load_vocab_index_path(&path, &VocabLoadOptions::default())
                        .expect("Failed to load index");
                assert_eq!(index.lookup_id("sat"), Some(5));

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_vocab() {
        let dir = tempdir::TempDir::new("vocab_test").unwrap();
        let path = dir.path().join("vocab10.to");

        let err = load_vocab_index_path::<u32, _>(&path, &VocabLoadOptions::default()).unwrap_err();
        match err {
            WordmillError::VocabularyNotFound { path: missing } => assert_eq!(missing, path),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            load_vocabulary_path(&path),
            Err(WordmillError::VocabularyNotFound { .. })
        ));
    }
}
