use std::path::PathBuf;

use wordmill::vocab::{VocabBuilderOptions, io::create_vocabulary};

use crate::{logging::LogArgs, tokenizer_args::TokenizerArgs};

/// Args for the build-vocab command.
#[derive(clap::Args, Debug)]
pub struct BuildVocabArgs {
    /// The corpus file; one sentence per line.
    #[arg(long)]
    data: PathBuf,

    /// The vocabulary file to write; kept if it exists.
    #[arg(long)]
    vocab: PathBuf,

    /// Max vocab size, including the reserved tokens.
    #[arg(long)]
    vocab_size: usize,

    /// Count digits as written, instead of as `0`.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_normalize_digits: bool,

    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[clap(flatten)]
    pub(super) logging: LogArgs,
}

impl BuildVocabArgs {
    /// Run the build-vocab command; logging is set up by the caller.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.build_tokenizer()?;
        let options = VocabBuilderOptions::new(self.vocab_size)
            .with_normalize_digits(!self.no_normalize_digits);

        let outcome = create_vocabulary(&self.vocab, &self.data, &options, &tokenizer)?;
        log::info!("{}: {outcome}", self.vocab.display());

        Ok(())
    }
}
