use std::path::{Path, PathBuf};

use wordmill::pipeline::{CorpusPaths, CorpusPipeline, PipelineOptions, PreparedData};

use crate::{logging::LogArgs, tokenizer_args::TokenizerArgs, vocab_args::VocabLoadArgs};

/// Pipeline options arg group.
#[derive(clap::Args, Debug)]
pub struct PipelineArgs {
    /// Keep digits as written, instead of as `0`; applies to every step.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_normalize_digits: bool,

    #[command(flatten)]
    load: VocabLoadArgs,

    #[command(flatten)]
    tokenizer: TokenizerArgs,
}

impl PipelineArgs {
    /// The pipeline options.
    pub fn options(&self) -> PipelineOptions {
        PipelineOptions::default()
            .with_normalize_digits(!self.no_normalize_digits)
            .with_load(self.load.load_options())
    }

    /// Run the pipeline over `corpus`.
    pub fn run_pipeline(
        &self,
        data_dir: &Path,
        corpus: &CorpusPaths,
        from_vocab_size: usize,
        to_vocab_size: usize,
    ) -> Result<PreparedData, Box<dyn std::error::Error>> {
        let pipeline = CorpusPipeline::new(self.options(), self.tokenizer.build_tokenizer()?);
        let prepared = pipeline.run(data_dir, corpus, from_vocab_size, to_vocab_size)?;
        report(&prepared);
        Ok(prepared)
    }
}

/// Print the prepared paths to stdout.
fn report(prepared: &PreparedData) {
    println!("from_train_ids: {}", prepared.from_train_ids.display());
    println!("to_train_ids: {}", prepared.to_train_ids.display());
    println!("from_dev_ids: {}", prepared.from_dev_ids.display());
    println!("to_dev_ids: {}", prepared.to_dev_ids.display());
    println!("from_vocab: {}", prepared.from_vocab.display());
    println!("to_vocab: {}", prepared.to_vocab.display());
}

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    /// Directory for the vocabulary files.
    #[arg(long)]
    data_dir: PathBuf,

    /// Source language training text.
    #[arg(long)]
    from_train: PathBuf,

    /// Target language training text.
    #[arg(long)]
    to_train: PathBuf,

    /// Source language development text.
    #[arg(long)]
    from_dev: PathBuf,

    /// Target language development text.
    #[arg(long)]
    to_dev: PathBuf,

    /// Source vocab size limit.
    #[arg(long)]
    from_vocab_size: usize,

    /// Target vocab size limit.
    #[arg(long)]
    to_vocab_size: usize,

    #[command(flatten)]
    pipeline: PipelineArgs,

    #[clap(flatten)]
    pub(super) logging: LogArgs,
}

impl PrepareArgs {
    /// Run the prepare command; logging is set up by the caller.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let corpus = CorpusPaths::new(
            &self.from_train,
            &self.to_train,
            &self.from_dev,
            &self.to_dev,
        );
        self.pipeline.run_pipeline(
            &self.data_dir,
            &corpus,
            self.from_vocab_size,
            self.to_vocab_size,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        pipeline: PipelineArgs,
    }

    #[test]
    fn test_options() {
        let args = TestArgs::try_parse_from(["test"]).unwrap();
        assert_eq!(args.pipeline.options(), PipelineOptions::default());

        let args =
            TestArgs::try_parse_from(["test", "--no-normalize-digits", "--first-wins"]).unwrap();
        let options = args.pipeline.options();
        assert!(!options.normalize_digits);
        assert!(options.load.require_reserved);
        assert_ne!(options.load, PipelineOptions::default().load);
    }

    #[test]
    fn test_run_pipeline() {
        let dir = tempdir::TempDir::new("prepare").unwrap();
        let data_dir = dir.path().to_path_buf();
        let corpus = CorpusPaths::new(
            data_dir.join("a.txt"),
            data_dir.join("b.txt"),
            data_dir.join("c.txt"),
            data_dir.join("d.txt"),
        );
        for path in [&corpus.from_train, &corpus.to_train, &corpus.from_dev, &corpus.to_dev] {
            fs::write(path, "the cat sat\n").unwrap();
        }

        let args = TestArgs::try_parse_from(["test", "--whitespace"]).unwrap();
        let prepared = args.pipeline.run_pipeline(&data_dir, &corpus, 8, 8).unwrap();
        assert_eq!(prepared.from_vocab, data_dir.join("vocab8.from"));
        assert_eq!(
            fs::read_to_string(&prepared.to_dev_ids).unwrap(),
            "4 5 6\n"
        );
    }
}
