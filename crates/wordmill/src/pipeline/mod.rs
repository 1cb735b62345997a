//! # Corpus Pipeline
//!
//! Prepares a parallel corpus for training:
//! * one vocabulary per language side, `vocab{SIZE}.{from|to}`;
//! * one id file per corpus file, `{path}.ids{SIZE}`.
//!
//! Each step is skipped when its output exists, so an interrupted run
//! resumes where it stopped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordmill::{
//!     WhitespaceTokenizer,
//!     pipeline::{CorpusPaths, CorpusPipeline, PipelineOptions},
//! };
//!
//! fn example() -> wordmill::WMResult<()> {
//!     let corpus = CorpusPaths::new(
//!         "data/train.de",
//!         "data/train.en",
//!         "data/dev.de",
//!         "data/dev.en",
//!     );
//!     let pipeline = CorpusPipeline::new(
//!         PipelineOptions::default().with_normalize_digits(false),
//!         WhitespaceTokenizer,
//!     );
//!     let prepared = pipeline.run("data/", &corpus, 30_000, 30_000)?;
//!     println!("{:?}", prepared.to_dev_ids);
//!     Ok(())
//! }
//! ```

mod naming;
mod prepare;

#[doc(inline)]
pub use naming::{LanguageSide, ids_path, vocab_file_name, vocab_path};
#[doc(inline)]
pub use prepare::{
    CorpusPaths,
    CorpusPipeline,
    PipelineOptions,
    PreparedData,
    prepare_data,
    prepare_wmt_data,
    wmt_corpus_paths,
};
