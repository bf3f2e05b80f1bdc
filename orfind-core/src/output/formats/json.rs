use std::io::Write;

use crate::{results::OrfindResults, types::OrfindError};

/// Write results as pretty-printed JSON, followed by a newline
pub fn write_json_format<W: Write>(
    writer: &mut W,
    results: &OrfindResults,
) -> Result<(), OrfindError> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}

/// Write several results as one JSON array
pub fn write_json_array<W: Write>(
    writer: &mut W,
    results: &[OrfindResults],
) -> Result<(), OrfindError> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}
