//! Kyte-Doolittle hydropathy and window smoothing.
//!
//! A hydropathy profile is the per-residue score series smoothed over a
//! window of `2r + 1` residues. Positions closer than `r` to either end have
//! no full window and are dropped, so a profile of `n` residues holds
//! `n - 2r` values (none when `n <= 2r`).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::types::OrfindError;

// ── Scale ───────────────────────────────────────────────────────

/// Kyte-Doolittle (1982) hydropathy of a one-letter residue.
///
/// # Errors
///
/// Returns [`OrfindError::UnknownResidue`] for anything outside the 20
/// standard amino acids.
///
/// # Examples
///
/// ```rust
/// use orfind_core::hydropathy::kyte_doolittle;
///
/// assert_eq!(kyte_doolittle('I')?, 4.5);
/// assert!(kyte_doolittle('*').is_err());
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
pub fn kyte_doolittle(residue: char) -> Result<f64, OrfindError> {
    let score = match residue {
        'A' => 1.8,
        'C' => 2.5,
        'D' => -3.5,
        'E' => -3.5,
        'F' => 2.8,
        'G' => -0.4,
        'H' => -3.2,
        'I' => 4.5,
        'K' => -3.9,
        'L' => 3.8,
        'M' => 1.9,
        'N' => -3.5,
        'P' => -1.6,
        'Q' => -3.5,
        'R' => -4.5,
        'S' => -0.8,
        'T' => -0.7,
        'V' => 4.2,
        'W' => -0.9,
        'Y' => -1.3,
        other => return Err(OrfindError::UnknownResidue(other.to_string())),
    };
    Ok(score)
}

/// Score every residue of a protein string
pub fn residue_scores(residues: &str) -> Result<Vec<f64>, OrfindError> {
    residues.chars().map(kyte_doolittle).collect()
}

// ── Smoothing ───────────────────────────────────────────────────

/// Window weighting used when smoothing a score series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoothing {
    /// Unweighted mean of the window
    Flat,
    /// Weights rise linearly from 1 at the edges to `r + 1` at the center
    #[default]
    Triangular,
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Triangular => write!(f, "triangular"),
        }
    }
}

impl FromStr for Smoothing {
    type Err = OrfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "triangular" | "triangle" => Ok(Self::Triangular),
            other => Err(OrfindError::InvalidConfig(format!(
                "unknown smoothing '{}'",
                other
            ))),
        }
    }
}

/// Unweighted moving average over windows of `2 * radius + 1` values
#[must_use]
pub fn flat_smooth(values: &[f64], radius: usize) -> Vec<f64> {
    let width = 2 * radius + 1;
    values
        .windows(width)
        .map(|window| window.iter().sum::<f64>() / width as f64)
        .collect()
}

/// Triangle-weighted moving average over windows of `2 * radius + 1` values.
///
/// The divisor is the sum of the weights, `(r + 1)^2`.
///
/// # Examples
///
/// ```rust
/// use orfind_core::hydropathy::triangular_smooth;
///
/// assert_eq!(triangular_smooth(&[1.0, -1.0, 3.0, 4.0, 5.0], 1), vec![0.5, 2.25, 4.0]);
/// ```
#[must_use]
pub fn triangular_smooth(values: &[f64], radius: usize) -> Vec<f64> {
    let weights: Vec<f64> = (0..=2 * radius)
        .map(|k| (radius + 1 - k.abs_diff(radius)) as f64)
        .collect();
    let total: f64 = weights.iter().sum();

    values
        .windows(weights.len())
        .map(|window| {
            window
                .iter()
                .zip(&weights)
                .map(|(value, weight)| value * weight)
                .sum::<f64>()
                / total
        })
        .collect()
}

/// Smooth a series with the chosen weighting
#[must_use]
pub fn smooth(values: &[f64], radius: usize, smoothing: Smoothing) -> Vec<f64> {
    match smoothing {
        Smoothing::Flat => flat_smooth(values, radius),
        Smoothing::Triangular => triangular_smooth(values, radius),
    }
}

/// Smoothed Kyte-Doolittle profile of a protein string.
///
/// # Examples
///
/// ```rust
/// use orfind_core::hydropathy::{Smoothing, hydropathy_profile};
///
/// let profile = hydropathy_profile("MATTCV", 1, Smoothing::Flat)?;
/// assert_eq!(profile.len(), 4);
/// assert_eq!(profile[0], 1.0);
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
pub fn hydropathy_profile(
    residues: &str,
    radius: usize,
    smoothing: Smoothing,
) -> Result<Vec<f64>, OrfindError> {
    Ok(smooth(&residue_scores(residues)?, radius, smoothing))
}
