use crate::constants::CODON_LENGTH;
use crate::types::{Codon, OrfindError, is_dna_base};

/// Split bases into consecutive, non-overlapping codons.
///
/// # Errors
///
/// Returns [`OrfindError::InvalidLength`] if `bases` is not a multiple of 3
/// long and [`OrfindError::InvalidBase`] for any symbol outside `{A, C, G, T}`.
///
/// # Examples
///
/// ```rust
/// use orfind_core::sequence::make_codons;
///
/// let codons = make_codons(b"ACGTCCTGA")?;
/// assert_eq!(codons.len(), 3);
/// assert_eq!(codons[2].to_string(), "TGA");
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
pub fn make_codons(bases: &[u8]) -> Result<Vec<Codon>, OrfindError> {
    if !bases.len().is_multiple_of(CODON_LENGTH) {
        return Err(OrfindError::InvalidLength(bases.len()));
    }
    validate_bases(bases)?;
    Ok(split_codons(bases))
}

/// Reject the first byte outside the DNA alphabet
pub fn validate_bases(bases: &[u8]) -> Result<(), OrfindError> {
    match bases.iter().position(|&b| !is_dna_base(b)) {
        Some(position) => Err(OrfindError::InvalidBase {
            base: char::from(bases[position]),
            position,
        }),
        None => Ok(()),
    }
}

/// Tokenize bases that were validated by the caller.
pub(crate) fn split_codons(bases: &[u8]) -> Vec<Codon> {
    bases
        .chunks_exact(CODON_LENGTH)
        .map(|chunk| Codon::from_validated([chunk[0], chunk[1], chunk[2]]))
        .collect()
}
