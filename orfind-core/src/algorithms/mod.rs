//! ORF scanning over a single frame of codons.
//!
//! Both policies treat the codon sequence as circular and share the same
//! codon vocabulary:
//!
//! - [`ScanPolicy::Longest`]: a two-state machine that keeps the first start
//!   codon it sees and closes the ORF at the next stop, yielding
//!   non-overlapping ORFs (see [`longest`]).
//! - [`ScanPolicy::AllOverlapping`]: every start codon is walked forward to
//!   its own first stop, so alternative starts sharing one stop are all
//!   reported (see [`overlapping`]).
//!
//! Finding every ORF of a genome means running a scan for each of the three
//! frame offsets on both strands; [`crate::sequence::Sequence`] does that.

pub mod longest;
pub mod overlapping;

pub use longest::longest_orf_spans;
pub use overlapping::all_orf_spans;

use crate::constants::{ALTERNATIVE_START_CODON, START_CODONS};
use crate::types::{Codon, OrfSpan, OrfindError};

/// Which ORFs a scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPolicy {
    /// Longest, non-overlapping ORFs: nested starts are ignored
    #[default]
    Longest,
    /// One ORF per start codon, overlapping ORFs allowed
    AllOverlapping,
}

/// Start codon vocabulary used by the scanners.
///
/// # Examples
///
/// ```rust
/// use orfind_core::algorithms::StartCodons;
/// use orfind_core::types::Codon;
///
/// let ctg = Codon::new(b"CTG")?;
/// assert!(!StartCodons::standard().contains(&ctg));
/// assert!(StartCodons::with_ctg().contains(&ctg));
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartCodons {
    alternative_ctg: bool,
}

impl StartCodons {
    /// ATG, GTG and TTG
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            alternative_ctg: false,
        }
    }

    /// ATG, GTG, TTG and CTG
    #[must_use]
    pub const fn with_ctg() -> Self {
        Self {
            alternative_ctg: true,
        }
    }

    #[must_use]
    pub const fn includes_ctg(&self) -> bool {
        self.alternative_ctg
    }

    /// Whether `codon` opens a reading frame under this vocabulary
    #[must_use]
    pub fn contains(&self, codon: &Codon) -> bool {
        let bases = codon.bases();
        START_CODONS.iter().any(|start| *start == bases)
            || (self.alternative_ctg && bases == ALTERNATIVE_START_CODON)
    }
}

/// Scan one frame of codons under `policy`.
///
/// # Errors
///
/// Only [`ScanPolicy::AllOverlapping`] can fail, with
/// [`OrfindError::NoStopCodon`] when a start codon can never be closed.
pub fn scan(
    codons: &[Codon],
    policy: ScanPolicy,
    starts: &StartCodons,
) -> Result<Vec<OrfSpan>, OrfindError> {
    match policy {
        ScanPolicy::Longest => Ok(longest_orf_spans(codons, starts)),
        ScanPolicy::AllOverlapping => all_orf_spans(codons, starts),
    }
}
