//! Standard genetic code.

use crate::sequence::make_codons;
use crate::types::{Codon, OrfindError};

/// One-letter residues of the standard code, indexed by [`Codon::table_index`].
/// Stop codons are marked `*`.
const STANDARD_CODE: &[u8; 64] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Translate one sense codon into its one-letter amino acid.
///
/// # Errors
///
/// Returns [`OrfindError::UnknownResidue`] for the three stop codons, which
/// have no residue.
///
/// # Examples
///
/// ```rust
/// use orfind_core::translation::translate_codon;
/// use orfind_core::types::Codon;
///
/// assert_eq!(translate_codon(&Codon::new(b"ATG")?)?, 'M');
/// assert!(translate_codon(&Codon::new(b"TGA")?).is_err());
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
pub fn translate_codon(codon: &Codon) -> Result<char, OrfindError> {
    match STANDARD_CODE[codon.table_index()] {
        b'*' => Err(OrfindError::UnknownResidue(codon.to_string())),
        residue => Ok(char::from(residue)),
    }
}

/// Translate a run of codons into a protein string.
///
/// # Errors
///
/// Fails like [`make_codons`] on malformed bases and like
/// [`translate_codon`] on an internal stop codon.
pub fn translate(bases: &str) -> Result<String, OrfindError> {
    make_codons(bases.as_bytes())?
        .iter()
        .map(translate_codon)
        .collect()
}
