//! # Artifact Naming

use std::path::{Path, PathBuf};

use crate::support::append_extension;

/// The side of a parallel corpus.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr
)]
#[strum(serialize_all = "lowercase")]
pub enum LanguageSide {
    /// The source language.
    From,

    /// The target language.
    To,
}

/// The vocabulary file name: `vocab{size}.{side}`.
pub fn vocab_file_name(
    vocab_size: usize,
    side: LanguageSide,
) -> String {
    format!("vocab{vocab_size}.{side}")
}

/// The vocabulary path in `data_dir`.
pub fn vocab_path<P: AsRef<Path>>(
    data_dir: P,
    vocab_size: usize,
    side: LanguageSide,
) -> PathBuf {
    data_dir.as_ref().join(vocab_file_name(vocab_size, side))
}

/// The id file path for a corpus file: `{path}.ids{size}`.
pub fn ids_path<P: AsRef<Path>>(
    path: P,
    vocab_size: usize,
) -> PathBuf {
    append_extension(path, format!("ids{vocab_size}"))
}
