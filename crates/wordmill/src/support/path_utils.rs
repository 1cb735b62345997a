//! # Path Utilities

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Append `.{extension}` to the full file name of `path`.
///
/// Unlike [`Path::with_extension`], an existing extension is kept:
/// `train.en` + `ids40000` is `train.en.ids40000`.
///
/// * Does not check that the path exists.
pub fn append_extension<P, S>(
    path: P,
    extension: S,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut name: OsString = path.as_ref().as_os_str().to_os_string();
    name.push(".");
    name.push(extension.as_ref());
    name.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_extension() {
        assert_eq!(
            append_extension("/data/train.en", "ids40000"),
            PathBuf::from("/data/train.en.ids40000")
        );
        assert_eq!(
            append_extension("vocab10.from", "partial"),
            PathBuf::from("vocab10.from.partial")
        );
        assert_eq!(append_extension("train", "fr"), PathBuf::from("train.fr"));
    }
}
