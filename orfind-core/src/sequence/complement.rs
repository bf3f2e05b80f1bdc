use crate::types::OrfindError;

/// Watson-Crick complement of a single base.
///
/// Returns `None` for symbols outside `{A, C, G, T}`.
#[must_use]
pub const fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        _ => None,
    }
}

/// Produce the antisense strand, read 5' to 3'.
///
/// Position `i` of the output is the complement of position `len - 1 - i`
/// of the input.
///
/// # Errors
///
/// Returns [`OrfindError::InvalidBase`] for any symbol outside the DNA alphabet.
///
/// # Examples
///
/// ```rust
/// use orfind_core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement("ACGTCCTGA")?, "TCAGGACGT");
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
pub fn reverse_complement(bases: &str) -> Result<String, OrfindError> {
    let bytes = bases.as_bytes();
    let complemented = bytes
        .iter()
        .enumerate()
        .rev()
        .map(|(position, &base)| {
            complement(base).map(char::from).ok_or(OrfindError::InvalidBase {
                base: char::from(base),
                position,
            })
        })
        .collect::<Result<String, _>>()?;
    Ok(complemented)
}
