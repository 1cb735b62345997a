mod build_vocab;
mod decode;
mod encode;
mod prepare;
mod prepare_wmt;

use crate::logging::LogArgs;

/// Subcommands for wordmill.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary file from a corpus file.
    BuildVocab(build_vocab::BuildVocabArgs),

    /// Act as a streaming encoder: text lines to id lines.
    Encode(encode::EncodeArgs),

    /// Act as a streaming decoder: id lines to token lines.
    Decode(decode::DecodeArgs),

    /// Prepare a parallel corpus: vocabularies and id files.
    Prepare(prepare::PrepareArgs),

    /// Prepare the WMT English/French corpus of a data directory.
    PrepareWmt(prepare_wmt::PrepareWmtArgs),
}

impl Commands {
    fn logging(&self) -> &LogArgs {
        match self {
            Commands::BuildVocab(cmd) => &cmd.logging,
            Commands::Encode(cmd) => &cmd.logging,
            Commands::Decode(cmd) => &cmd.logging,
            Commands::Prepare(cmd) => &cmd.logging,
            Commands::PrepareWmt(cmd) => &cmd.logging,
        }
    }

    /// Install the logger, then run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging().setup_logging()?;
        self.execute()
    }

    /// Run the subcommand without touching the global logger.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::BuildVocab(cmd) => cmd.execute(),
            Commands::Encode(cmd) => cmd.execute(),
            Commands::Decode(cmd) => cmd.execute(),
            Commands::Prepare(cmd) => cmd.execute(),
            Commands::PrepareWmt(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use clap::Parser;
    use wordmill::WordmillError;

    use crate::Args;

    const TRAIN_EN: &str = "the cat sat\nthe dog sat\n";
    const CAT_VOCAB: &str = "_PAD\n_GO\n_EOS\n_UNK\nthe\nsat\ncat\ndog\n";

    fn execute(args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        let args = Args::try_parse_from(std::iter::once("wordmill").chain(args.iter().copied()))?;
        args.command.unwrap().execute()
    }

    fn path_arg(
        dir: &Path,
        name: &str,
    ) -> String {
        dir.join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn test_build_vocab_command() {
        let dir = tempdir::TempDir::new("cli").unwrap();
        let data = path_arg(dir.path(), "train.en");
        let vocab = path_arg(dir.path(), "vocab10.from");
        fs::write(&data, TRAIN_EN).unwrap();

        execute(&[
            "build-vocab", "--data", &data, "--vocab", &vocab, "--vocab-size", "10", "--whitespace",
        ])
        .unwrap();
        assert_eq!(fs::read_to_string(&vocab).unwrap(), CAT_VOCAB);

        // An existing vocabulary is kept, whatever the requested size.
        execute(&[
            "build-vocab", "--data", &data, "--vocab", &vocab, "--vocab-size", "3",
        ])
        .unwrap();
        assert_eq!(fs::read_to_string(&vocab).unwrap(), CAT_VOCAB);

        let small = path_arg(dir.path(), "vocab3.from");
        let err = execute(&[
            "build-vocab", "--data", &data, "--vocab", &small, "--vocab-size", "3",
        ])
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordmillError>(),
            Some(WordmillError::VocabSizeTooSmall { size: 3, .. })
        ));
        assert!(!Path::new(&small).exists());
    }

    #[test]
    fn test_encode_decode_commands() {
        let dir = tempdir::TempDir::new("cli").unwrap();
        let vocab = path_arg(dir.path(), "vocab10.from");
        let dev = path_arg(dir.path(), "dev.en");
        let ids = path_arg(dir.path(), "dev.en.ids10");
        let text = path_arg(dir.path(), "dev.txt");
        fs::write(&vocab, CAT_VOCAB).unwrap();
        fs::write(&dev, "the cat ran\n\nthe dog sat\n").unwrap();

        execute(&[
            "encode", "--vocab", &vocab, "--whitespace", "--input", &dev, "--output", &ids,
        ])
        .unwrap();
        assert_eq!(fs::read_to_string(&ids).unwrap(), "4 6 3\n\n4 7 5\n");

        execute(&["decode", "--vocab", &vocab, "--input", &ids, "--output", &text]).unwrap();
        assert_eq!(
            fs::read_to_string(&text).unwrap(),
            "the cat _UNK\n\nthe dog sat\n"
        );
    }

    #[test]
    fn test_encode_missing_vocab() {
        let dir = tempdir::TempDir::new("cli").unwrap();
        let dev = path_arg(dir.path(), "dev.en");
        let ids = path_arg(dir.path(), "dev.en.ids10");
        fs::write(&dev, "the cat\n").unwrap();

        let err = execute(&[
            "encode",
            "--vocab",
            &path_arg(dir.path(), "vocab10.from"),
            "--input",
            &dev,
            "--output",
            &ids,
        ])
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WordmillError>(),
            Some(WordmillError::VocabularyNotFound { .. })
        ));
    }

    #[test]
    fn test_prepare_wmt_command() {
        let dir = tempdir::TempDir::new("cli").unwrap();
        fs::write(dir.path().join("train.en"), TRAIN_EN).unwrap();
        fs::write(dir.path().join("train.fr"), "le chat assis\nle chien assis\n").unwrap();
        fs::write(dir.path().join("dev.en"), "the cat ran\n").unwrap();
        fs::write(dir.path().join("dev.fr"), "le chat a couru\n").unwrap();

        let data_dir = dir.path().to_str().unwrap();
        execute(&[
            "prepare-wmt", "--data-dir", data_dir, "--en-vocab-size", "10", "--fr-vocab-size", "10",
        ])
        .unwrap();

        for name in [
            "vocab10.from",
            "vocab10.to",
            "train.en.ids10",
            "train.fr.ids10",
            "dev.en.ids10",
            "dev.fr.ids10",
        ] {
            assert!(dir.path().join(name).exists(), "{name}");
        }
        assert_eq!(
            fs::read_to_string(dir.path().join("vocab10.from")).unwrap(),
            CAT_VOCAB
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("dev.en.ids10")).unwrap(),
            "4 6 3\n"
        );
    }

    #[test]
    fn test_prepare_command() {
        let dir = tempdir::TempDir::new("cli").unwrap();
        let from_train = path_arg(dir.path(), "a.txt");
        let to_train = path_arg(dir.path(), "b.txt");
        let from_dev = path_arg(dir.path(), "c.txt");
        let to_dev = path_arg(dir.path(), "d.txt");
        for path in [&from_train, &to_train, &from_dev, &to_dev] {
            fs::write(path, TRAIN_EN).unwrap();
        }

        let data_dir = dir.path().to_str().unwrap();
        execute(&[
            "prepare",
            "--data-dir",
            data_dir,
            "--from-train",
            &from_train,
            "--to-train",
            &to_train,
            "--from-dev",
            &from_dev,
            "--to-dev",
            &to_dev,
            "--from-vocab-size",
            "6",
            "--to-vocab-size",
            "10",
            "--whitespace",
        ])
        .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("vocab6.from")).unwrap(),
            "_PAD\n_GO\n_EOS\n_UNK\nthe\nsat\n"
        );
        assert_eq!(
            fs::read_to_string(format!("{from_dev}.ids6")).unwrap(),
            "4 3 5\n4 3 5\n"
        );
        assert_eq!(
            fs::read_to_string(format!("{to_dev}.ids10")).unwrap(),
            "4 6 5\n4 7 5\n"
        );
    }
}
