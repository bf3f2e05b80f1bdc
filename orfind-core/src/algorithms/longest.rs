use log::trace;

use crate::algorithms::StartCodons;
use crate::types::{Codon, OrfSpan};

/// State of the longest-ORF scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for a start codon
    SeekingStart,
    /// Inside an ORF opened by the start codon at the given index
    InOrf(usize),
}

impl ScanState {
    /// Advance the machine by one codon, returning a closed span if any.
    fn step(self, index: usize, codon: &Codon, starts: &StartCodons) -> (Self, Option<OrfSpan>) {
        match self {
            Self::SeekingStart if starts.contains(codon) => (Self::InOrf(index), None),
            Self::InOrf(start) if codon.is_stop() => {
                (Self::SeekingStart, Some(OrfSpan::new(start, index)))
            }
            state => (state, None),
        }
    }
}

/// Find the longest, non-overlapping ORFs of one circular frame.
///
/// The walk is anchored on the first stop codon found from index 0: it
/// begins right after that stop, wraps around the end of the frame and
/// finishes when it arrives back at the anchor. An ORF still open at that
/// point is closed by the anchor stop, so its span wraps. Inside an ORF
/// further start codons are ignored, which keeps the first (longest) start.
///
/// A frame without any stop codon yields no ORFs, even when it contains
/// start codons.
///
/// Spans are returned in walk order.
///
/// # Examples
///
/// ```rust
/// use orfind_core::algorithms::{StartCodons, longest_orf_spans};
/// use orfind_core::sequence::make_codons;
/// use orfind_core::types::OrfSpan;
///
/// // ACC TGA CCG CAC TTG TTT: the TTG at 4 is closed by the TGA at 1
/// let codons = make_codons(b"ACCTGACCGCACTTGTTT")?;
/// let spans = longest_orf_spans(&codons, &StartCodons::standard());
/// assert_eq!(spans, vec![OrfSpan::new(4, 1)]);
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
#[must_use]
pub fn longest_orf_spans(codons: &[Codon], starts: &StartCodons) -> Vec<OrfSpan> {
    let Some(anchor) = codons.iter().position(Codon::is_stop) else {
        trace!("No stop codon in frame of {} codons", codons.len());
        return Vec::new();
    };

    let length = codons.len();
    let mut spans = Vec::new();
    let mut state = ScanState::SeekingStart;
    let mut index = (anchor + 1) % length;

    while index != anchor {
        let (next, closed) = state.step(index, &codons[index], starts);
        spans.extend(closed);
        state = next;
        index = (index + 1) % length;
    }

    if let ScanState::InOrf(start) = state {
        spans.push(OrfSpan::new(start, anchor));
    }

    spans
}
