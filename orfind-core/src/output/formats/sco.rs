use std::io::Write;

use bio::bio_types::strand::Strand;

use crate::{results::OrfindResults, types::OrfindError};

/// Write results in SCO format (simple coordinate output).
///
/// A `# header` line precedes one tab-separated row per ORF: start, stop,
/// strand (`1` or `-1`), codon count and hydrophobic peak count. Coordinates
/// are 0-based and strand-normalized.
pub fn write_sco_format<W: Write>(
    writer: &mut W,
    results: &OrfindResults,
) -> Result<(), OrfindError> {
    writeln!(writer, "# {}", results.sequence_info.header)?;
    for analyzed in &results.orfs {
        let orf = &analyzed.orf;
        let strand_num = match orf.strand() {
            Strand::Forward => 1,
            Strand::Reverse => -1,
            Strand::Unknown => 0,
        };

        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            orf.start,
            orf.stop,
            strand_num,
            orf.codon_count(),
            analyzed.peaks.len()
        )?;
    }
    Ok(())
}
