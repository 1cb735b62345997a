//! # Id Line Format

use std::io::Write;

use crate::{
    errors::{WMResult, WordmillError},
    types::TokenType,
};

/// Write `ids` as one line of space separated decimals.
///
/// An empty id list writes an empty line.
pub fn write_id_line<T, W>(
    writer: &mut W,
    ids: &[T],
) -> WMResult<()>
where
    T: TokenType,
    W: Write + ?Sized,
{
    for (idx, id) in ids.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Parse one line of space separated decimal ids.
///
/// ## Errors
/// [`WordmillError::Parse`] on a field which is not an id of type `T`.
pub fn parse_id_line<T: TokenType>(line: &str) -> WMResult<Vec<T>> {
    line.split_whitespace()
        .map(|field| {
            T::from_str_radix(field, 10)
                .map_err(|_| WordmillError::Parse(format!("invalid token id {field:?}")))
        })
        .collect()
}
