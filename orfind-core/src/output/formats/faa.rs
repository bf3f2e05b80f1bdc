use std::io::Write;

use crate::{results::OrfindResults, types::OrfindError};

/// Residues per line of protein FASTA
const LINE_WIDTH: usize = 60;

/// Write translated ORFs as protein FASTA.
///
/// Each record is named `<header>_<n>` and its description carries the
/// strand-normalized start and stop and the strand, `# start # stop # strand`.
pub fn write_faa_format<W: Write>(
    writer: &mut W,
    results: &OrfindResults,
) -> Result<(), OrfindError> {
    for (i, analyzed) in results.orfs.iter().enumerate() {
        let orf = &analyzed.orf;
        writeln!(
            writer,
            ">{}_{} # {} # {} # {}",
            results.sequence_info.header,
            i + 1,
            orf.start,
            orf.stop,
            if orf.is_sense { 1 } else { -1 }
        )?;
        for line in analyzed.residues.as_bytes().chunks(LINE_WIDTH) {
            writer.write_all(line)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
