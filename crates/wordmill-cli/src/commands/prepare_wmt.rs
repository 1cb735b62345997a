use std::path::PathBuf;

use wordmill::pipeline::wmt_corpus_paths;

use super::prepare::PipelineArgs;
use crate::logging::LogArgs;

/// Args for the prepare-wmt command.
///
/// Reads `train.en`, `train.fr`, `dev.en` and `dev.fr` from the data directory.
#[derive(clap::Args, Debug)]
pub struct PrepareWmtArgs {
    /// The WMT data directory.
    #[arg(long)]
    data_dir: PathBuf,

    /// English (source) vocab size limit.
    #[arg(long, default_value = "40000")]
    en_vocab_size: usize,

    /// French (target) vocab size limit.
    #[arg(long, default_value = "40000")]
    fr_vocab_size: usize,

    #[command(flatten)]
    pipeline: PipelineArgs,

    #[clap(flatten)]
    pub(super) logging: LogArgs,
}

impl PrepareWmtArgs {
    /// Run the prepare-wmt command; logging is set up by the caller.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let corpus = wmt_corpus_paths(&self.data_dir);
        self.pipeline.run_pipeline(
            &self.data_dir,
            &corpus,
            self.en_vocab_size,
            self.fr_vocab_size,
        )?;

        Ok(())
    }
}
