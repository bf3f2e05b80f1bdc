use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::algorithms::{ScanPolicy, StartCodons};
use crate::constants::{
    DEFAULT_CONTEXT_SIZE, DEFAULT_MIN_PEAK_HEIGHT, DEFAULT_PEAK_RADIUS, DEFAULT_WINDOW_RADIUS,
};
use crate::hydropathy::Smoothing;
use crate::types::OrfindError;

/// Output format options for analysis results.
///
/// # Formats
///
/// - **JSON**: one object per sequence with every ORF record and its peaks
/// - **SCO**: tab-separated coordinate table
/// - **FAA**: protein FASTA of the translated ORFs
///
/// # Examples
///
/// ```rust
/// use orfind_core::config::{OrfindConfig, OutputFormat};
///
/// let config = OrfindConfig {
///     output_format: OutputFormat::Sco,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Full ORF records as JSON, including context windows and peaks.
    #[default]
    Json,

    /// Simple coordinate output.
    ///
    /// One tab-separated line per ORF with start, stop, strand and length.
    Sco,

    /// Translated ORFs as protein FASTA.
    Faa,
}

impl FromStr for OutputFormat {
    type Err = OrfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "sco" => Ok(Self::Sco),
            "faa" => Ok(Self::Faa),
            other => Err(OrfindError::InvalidConfig(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

impl FromStr for ScanPolicy {
    type Err = OrfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "longest" => Ok(Self::Longest),
            "all" => Ok(Self::AllOverlapping),
            other => Err(OrfindError::InvalidConfig(format!(
                "unknown scan policy '{}'",
                other
            ))),
        }
    }
}

/// Inclusive bounds on the number of codons in an ORF, stop codon excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodonRange {
    pub min: usize,
    pub max: usize,
}

impl CodonRange {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(&self, codons: usize) -> bool {
        self.min <= codons && codons <= self.max
    }
}

impl fmt::Display for CodonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Hydropathy profile and peak detection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydropathyConfig {
    /// Radius of the smoothing window; the window spans `2r + 1` residues.
    ///
    /// **Default**: 9
    pub window_radius: usize,

    /// Window weighting.
    ///
    /// **Default**: [`Smoothing::Triangular`]
    pub smoothing: Smoothing,

    /// Radius used by the peak finder.
    ///
    /// **Default**: 9
    pub peak_radius: usize,

    /// Smoothed hydropathy a peak must reach to count as hydrophobic.
    ///
    /// **Default**: 1.5
    pub min_height: f64,
}

impl Default for HydropathyConfig {
    fn default() -> Self {
        Self {
            window_radius: DEFAULT_WINDOW_RADIUS,
            smoothing: Smoothing::default(),
            peak_radius: DEFAULT_PEAK_RADIUS,
            min_height: DEFAULT_MIN_PEAK_HEIGHT,
        }
    }
}

/// Configuration settings for ORF discovery and filtering.
///
/// Every knob is a plain field; nothing is read from globals.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use orfind_core::config::OrfindConfig;
///
/// let config = OrfindConfig::default();
/// assert_eq!(config.context_size, 100);
/// ```
///
/// ## Small single-pass membrane proteins
///
/// ```rust
/// use orfind_core::config::{CodonRange, OrfindConfig};
///
/// let config = OrfindConfig {
///     codon_range: Some(CodonRange::new(50, 80)),
///     required_peaks: Some(2),
///     upstream_motif: Some("GG".to_string()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OrfindConfig {
    /// How overlapping ORFs in one frame are reported.
    ///
    /// **Default**: [`ScanPolicy::Longest`]
    pub policy: ScanPolicy,

    /// Accept CTG as a start codon in addition to ATG, GTG and TTG.
    ///
    /// **Default**: `false`
    pub alternative_starts: bool,

    /// Bases of upstream and downstream context captured around each ORF.
    ///
    /// Must not exceed the length of any analyzed sequence.
    ///
    /// **Default**: 100
    pub context_size: usize,

    /// Keep only ORFs whose codon count falls in this range.
    ///
    /// **Default**: `None` (no length filter)
    pub codon_range: Option<CodonRange>,

    /// Hydropathy smoothing and peak settings.
    pub hydropathy: HydropathyConfig,

    /// Keep only ORFs with exactly this many hydrophobic peaks.
    ///
    /// Two peaks is the usual signature of a single-pass membrane protein.
    ///
    /// **Default**: `None`
    pub required_peaks: Option<usize>,

    /// Keep only ORFs whose −15..−5 upstream region contains this motif.
    ///
    /// **Default**: `None`
    pub upstream_motif: Option<String>,

    /// Output format for analysis results.
    ///
    /// **Default**: [`OutputFormat::Json`]
    pub output_format: OutputFormat,

    /// Suppress informational logging.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for OrfindConfig {
    fn default() -> Self {
        Self {
            policy: ScanPolicy::default(),
            alternative_starts: false,
            context_size: DEFAULT_CONTEXT_SIZE,
            codon_range: None,
            hydropathy: HydropathyConfig::default(),
            required_peaks: None,
            upstream_motif: None,
            output_format: OutputFormat::default(),
            quiet: false,
        }
    }
}

impl OrfindConfig {
    /// Start codon vocabulary selected by `alternative_starts`
    #[must_use]
    pub const fn start_codons(&self) -> StartCodons {
        if self.alternative_starts {
            StartCodons::with_ctg()
        } else {
            StartCodons::standard()
        }
    }

    /// Reject settings that can never select an ORF.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError::InvalidConfig`] for an inverted codon range,
    /// an empty motif or a non-finite peak height.
    pub fn validate(&self) -> Result<(), OrfindError> {
        if let Some(range) = self.codon_range.filter(|range| range.min > range.max) {
            return Err(OrfindError::InvalidConfig(format!(
                "codon range {} is empty",
                range
            )));
        }
        if self
            .upstream_motif
            .as_deref()
            .is_some_and(str::is_empty)
        {
            return Err(OrfindError::InvalidConfig(
                "upstream motif must not be empty".to_string(),
            ));
        }
        if !self.hydropathy.min_height.is_finite() {
            return Err(OrfindError::InvalidConfig(format!(
                "peak height {} is not finite",
                self.hydropathy.min_height
            )));
        }
        Ok(())
    }
}
