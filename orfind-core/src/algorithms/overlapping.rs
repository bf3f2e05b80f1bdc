use crate::algorithms::StartCodons;
use crate::types::{Codon, OrfSpan, OrfindError};

/// Walk forward from `start`, wrapping, to the first stop codon.
///
/// Returns `None` after a full lap without meeting a stop.
fn next_stop(codons: &[Codon], start: usize) -> Option<usize> {
    let length = codons.len();
    (1..length)
        .map(|offset| (start + offset) % length)
        .find(|&index| codons[index].is_stop())
}

/// Find one ORF per start codon in a circular frame.
///
/// Start codons are visited once, in index order. Each is walked forward
/// independently to its first stop codon, so several starts sharing a stop
/// produce several overlapping spans (alternative starts).
///
/// # Errors
///
/// Returns [`OrfindError::NoStopCodon`] for the first start codon whose walk
/// completes a full lap without finding a stop. A frame with neither starts
/// nor stops yields an empty result.
///
/// # Examples
///
/// ```rust
/// use orfind_core::algorithms::{StartCodons, all_orf_spans};
/// use orfind_core::sequence::make_codons;
/// use orfind_core::types::OrfSpan;
///
/// let codons = make_codons(b"ACTGTGACCTTGTTTTGAACT")?;
/// let spans = all_orf_spans(&codons, &StartCodons::standard())?;
/// assert_eq!(spans, vec![OrfSpan::new(1, 5), OrfSpan::new(3, 5)]);
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
pub fn all_orf_spans(codons: &[Codon], starts: &StartCodons) -> Result<Vec<OrfSpan>, OrfindError> {
    codons
        .iter()
        .enumerate()
        .filter(|(_, codon)| starts.contains(codon))
        .map(|(start, _)| {
            next_stop(codons, start)
                .map(|stop| OrfSpan::new(start, stop))
                .ok_or(OrfindError::NoStopCodon(start))
        })
        .collect()
}
