use std::fmt;

use bio::bio_types::strand::Strand;
use serde::Serialize;
use thiserror::Error;

use crate::constants::{CODON_LENGTH, STOP_CODONS};

/// A triplet of DNA bases.
///
/// Codons are immutable value types; equality and start/stop classification
/// are decided purely by base content.
///
/// # Examples
///
/// ```rust
/// use orfind_core::types::Codon;
///
/// let codon = Codon::new(b"TAG")?;
/// assert!(codon.is_stop());
/// assert_eq!(codon.to_string(), "TAG");
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([u8; CODON_LENGTH]);

impl Codon {
    /// Build a codon from exactly three bases drawn from `{A, C, G, T}`.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError::InvalidLength`] when `bases` is not three long and
    /// [`OrfindError::InvalidBase`] for any symbol outside the DNA alphabet.
    pub fn new(bases: &[u8]) -> Result<Self, OrfindError> {
        let triplet: [u8; CODON_LENGTH] = bases
            .try_into()
            .map_err(|_| OrfindError::InvalidLength(bases.len()))?;
        if let Some(position) = triplet.iter().position(|&b| !is_dna_base(b)) {
            return Err(OrfindError::InvalidBase {
                base: char::from(triplet[position]),
                position,
            });
        }
        Ok(Self(triplet))
    }

    /// Build a codon from bases already known to be valid.
    pub(crate) const fn from_validated(triplet: [u8; CODON_LENGTH]) -> Self {
        Self(triplet)
    }

    /// Raw bases of the codon
    #[must_use]
    pub const fn bases(&self) -> &[u8; CODON_LENGTH] {
        &self.0
    }

    /// Whether this codon terminates translation (TAA, TAG, TGA)
    #[must_use]
    pub fn is_stop(&self) -> bool {
        STOP_CODONS.iter().any(|stop| **stop == self.0)
    }

    /// Position of this codon in `AAA, AAC, ..., TTT` order.
    #[must_use]
    pub fn table_index(&self) -> usize {
        self.0.iter().fold(0, |index, &base| {
            index * 4
                + match base {
                    b'A' => 0,
                    b'C' => 1,
                    b'G' => 2,
                    _ => 3,
                }
        })
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &base in &self.0 {
            write!(f, "{}", char::from(base))?;
        }
        Ok(())
    }
}

/// Test whether a byte belongs to the DNA alphabet `{A, C, G, T}`.
#[must_use]
pub const fn is_dna_base(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T')
}

/// Frame-local codon coordinates of one ORF.
///
/// `start` is the index of the start codon and `stop` the index of the
/// terminating stop codon within a single frame's codon sequence. On a
/// circular genome `stop` may be smaller than `start`; such a span wraps
/// through the end of the frame and is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrfSpan {
    pub start: usize,
    pub stop: usize,
}

impl OrfSpan {
    #[must_use]
    pub const fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    /// Whether the span straddles the circular boundary
    #[must_use]
    pub const fn wraps(&self) -> bool {
        self.stop < self.start
    }

    /// Number of codons from the start codon up to, not including, the stop codon
    #[must_use]
    pub const fn codon_count(&self, frame_length: usize) -> usize {
        if self.wraps() {
            frame_length - self.start + self.stop
        } else {
            self.stop - self.start
        }
    }
}

impl From<(usize, usize)> for OrfSpan {
    fn from((start, stop): (usize, usize)) -> Self {
        Self::new(start, stop)
    }
}

/// A materialized open reading frame.
///
/// Coordinates are reported in sense-strand space: ORFs discovered on the
/// antisense strand have each index reflected with `length - index - 1`.
/// `bases` always runs from the first base of the start codon up to, but not
/// including, the stop codon and is a multiple of three long. `downstream`
/// begins at the stop codon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Orf {
    /// Start index, strand-normalized
    pub start: usize,
    /// Stop index, strand-normalized
    pub stop: usize,
    /// Bases of the ORF in reading direction
    pub bases: String,
    /// Context bases immediately 5' of the start codon
    pub upstream: String,
    /// Context bases beginning at the stop codon
    pub downstream: String,
    /// Whether the ORF was read from the sense strand
    pub is_sense: bool,
}

impl Orf {
    /// Strand the ORF was read from
    #[must_use]
    pub const fn strand(&self) -> Strand {
        if self.is_sense {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }

    /// Number of codons in the ORF, stop codon excluded
    #[must_use]
    pub const fn codon_count(&self) -> usize {
        self.bases.len() / CODON_LENGTH
    }

    /// Translate the ORF into one-letter amino acids.
    ///
    /// The stop codon is not part of `bases`, so a well-formed ORF always
    /// translates.
    pub fn residues(&self) -> Result<String, OrfindError> {
        crate::translation::translate(&self.bases)
    }
}

/// A local maximum of a 1-D series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Peak {
    pub index: usize,
    pub height: f64,
}

/// Error types raised by the ORF engine.
///
/// All errors are precondition failures surfaced synchronously where the
/// violation is detected. Nothing is retried and nothing is coerced.
#[derive(Error, Debug)]
pub enum OrfindError {
    /// Base count is not a multiple of 3 where codons are required
    #[error("Invalid length: {0} bases cannot be split into codons")]
    InvalidLength(usize),
    /// Symbol outside the DNA alphabet
    #[error("Invalid base '{base}' at position {position}")]
    InvalidBase { base: char, position: usize },
    /// Residue or codon missing from the hydropathy or translation table
    #[error("Unknown residue: {0}")]
    UnknownResidue(String),
    /// Index outside `[0, length)`
    #[error("Index {index} out of range for sequence of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
    /// A start codon whose circular walk never meets a stop codon
    #[error("No stop codon reachable from start codon at index {0}")]
    NoStopCodon(usize),
    /// Frame offset outside 0..3
    #[error("Invalid frame offset: {0}")]
    InvalidFrame(usize),
    /// Sequences must be sense or antisense
    #[error("Invalid strand")]
    InvalidStrand,
    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Result serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
