use std::path::PathBuf;

use wordmill::{
    VocabIndex,
    vocab::{DuplicateTokenPolicy, VocabLoadOptions, io::load_vocab_index_path},
};

/// Vocabulary file arg group.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// The vocabulary file; one token per line.
    #[arg(long)]
    pub vocab: PathBuf,

    #[command(flatten)]
    pub load: VocabLoadArgs,
}

impl VocabArgs {
    /// Load the vocabulary index.
    pub fn load_index(&self) -> Result<VocabIndex<u32>, Box<dyn std::error::Error>> {
        log::info!("Loading vocabulary {}", self.vocab.display());
        let index = load_vocab_index_path(&self.vocab, &self.load.load_options())?;
        log::info!("Vocabulary Size: {}", index.len());
        Ok(index)
    }
}

/// Vocabulary load checks.
#[derive(clap::Args, Debug)]
pub struct VocabLoadArgs {
    /// Keep the first id of a repeated vocabulary token, instead of failing.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    first_wins: bool,

    /// Accept vocabularies which do not start with the reserved tokens.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_reserved_check: bool,
}

impl VocabLoadArgs {
    /// The vocabulary load options.
    pub fn load_options(&self) -> VocabLoadOptions {
        let duplicates = if self.first_wins {
            DuplicateTokenPolicy::FirstWins
        } else {
            DuplicateTokenPolicy::Reject
        };
        VocabLoadOptions::default()
            .with_duplicates(duplicates)
            .with_require_reserved(!self.no_reserved_check)
    }
}
