//! # Pipeline Artifacts
//!
//! Every output file (vocabularies, id files) is produced through
//! [`write_artifact`]:
//! * an existing file is never rebuilt;
//! * content goes to `{path}.partial` and is renamed into place once
//!   flushed, so an existing file is always a complete one.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::{errors::WMResult, support::append_extension};

/// Extension of in-progress artifact files.
pub const PARTIAL_EXTENSION: &str = "partial";

/// What happened to an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StepOutcome {
    /// The artifact was written by this step.
    Built,

    /// The artifact already existed; nothing was done.
    Skipped,
}

/// Produce the artifact at `path`, unless it already exists.
///
/// ## Arguments
/// * `path` - the final artifact path.
/// * `write` - writes the full content; not called when skipping.
///
/// ## Returns
/// [`StepOutcome::Skipped`] if `path` exists, [`StepOutcome::Built`] otherwise.
///
/// On error the partial file is removed and `path` is left untouched.
pub fn write_artifact<F>(
    path: &Path,
    write: F,
) -> WMResult<StepOutcome>
where
    F: FnOnce(&mut dyn Write) -> WMResult<()>,
{
    if path.exists() {
        log::debug!("{} exists; skipping", path.display());
        return Ok(StepOutcome::Skipped);
    }

    let partial_path = append_extension(path, PARTIAL_EXTENSION);

    if let Err(err) = write_partial(&partial_path, write) {
        // The write error is the one worth reporting.
        let _ = fs::remove_file(&partial_path);
        return Err(err);
    }

    fs::rename(&partial_path, path)?;
    Ok(StepOutcome::Built)
}

fn write_partial<F>(
    partial_path: &Path,
    write: F,
) -> WMResult<()>
where
    F: FnOnce(&mut dyn Write) -> WMResult<()>,
{
    let mut writer = BufWriter::new(File::create(partial_path)?);
    write(&mut writer)?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}
