//! Predicate filtering over ORF records.
//!
//! An [`OrfCollection`] never changes once built: every filter returns a new
//! collection. Predicates come in two forms, plain closures through
//! [`OrfCollection::filter`] and the reusable [`OrfFilter`] library through
//! [`OrfCollection::apply`]. Chaining filters is equivalent to applying
//! [`OrfFilter::All`] of them.

use crate::config::{CodonRange, HydropathyConfig};
use crate::constants::PROMOTER_REGION;
use crate::hydropathy::{Smoothing, hydropathy_profile};
use crate::peaks::peaks_above;
use crate::types::{Orf, OrfindError, Peak};

/// Hydrophobic peaks of a protein string under `config`.
pub fn hydrophobic_peaks(
    residues: &str,
    config: &HydropathyConfig,
) -> Result<Vec<Peak>, OrfindError> {
    let profile = hydropathy_profile(residues, config.window_radius, config.smoothing)?;
    Ok(peaks_above(&profile, config.peak_radius, config.min_height))
}

/// The −15..−5 region of an upstream window, clamped for short windows.
#[must_use]
pub fn promoter_region(upstream: &str) -> &str {
    let (far, near) = PROMOTER_REGION;
    let begin = upstream.len().saturating_sub(far);
    let end = upstream.len().saturating_sub(near);
    if begin < end { &upstream[begin..end] } else { "" }
}

/// Reusable ORF predicates
#[derive(Debug, Clone, PartialEq)]
pub enum OrfFilter {
    /// Codon count within inclusive bounds
    CodonLength(CodonRange),
    /// Exactly `count` smoothed hydropathy peaks at or above the configured height
    HydrophobicPeaks {
        count: usize,
        hydropathy: HydropathyConfig,
    },
    /// Some smoothed hydropathy value strictly above `threshold`
    HighHydrophobicity {
        threshold: f64,
        window_radius: usize,
        smoothing: Smoothing,
    },
    /// Promoter region of the upstream window contains the motif
    UpstreamMotif(String),
    /// ORF starts with `bases`, its upstream window ends with `upstream` and
    /// its downstream window starts with `downstream`
    Flanks {
        bases: String,
        upstream: String,
        downstream: String,
    },
    /// Strand-normalized start coordinate
    Start(usize),
    /// Strand-normalized stop coordinate
    Stop(usize),
    /// Every inner filter matches
    All(Vec<OrfFilter>),
}

impl OrfFilter {
    /// Exactly two hydrophobic peaks with default settings
    #[must_use]
    pub fn single_pass_membrane() -> Self {
        Self::HydrophobicPeaks {
            count: 2,
            hydropathy: HydropathyConfig::default(),
        }
    }

    /// Whether `orf` satisfies this predicate.
    ///
    /// # Errors
    ///
    /// Hydropathy predicates translate the ORF and fail with
    /// [`OrfindError::UnknownResidue`] or [`OrfindError::InvalidLength`] for
    /// records that are not well-formed ORFs.
    pub fn matches(&self, orf: &Orf) -> Result<bool, OrfindError> {
        let matched = match self {
            Self::CodonLength(range) => range.contains(orf.codon_count()),
            Self::HydrophobicPeaks { count, hydropathy } => {
                hydrophobic_peaks(&orf.residues()?, hydropathy)?.len() == *count
            }
            Self::HighHydrophobicity {
                threshold,
                window_radius,
                smoothing,
            } => hydropathy_profile(&orf.residues()?, *window_radius, *smoothing)?
                .iter()
                .any(|value| value > threshold),
            Self::UpstreamMotif(motif) => promoter_region(&orf.upstream).contains(motif.as_str()),
            Self::Flanks {
                bases,
                upstream,
                downstream,
            } => {
                orf.bases.starts_with(bases.as_str())
                    && orf.upstream.ends_with(upstream.as_str())
                    && orf.downstream.starts_with(downstream.as_str())
            }
            Self::Start(start) => orf.start == *start,
            Self::Stop(stop) => orf.stop == *stop,
            Self::All(filters) => {
                for filter in filters {
                    if !filter.matches(orf)? {
                        return Ok(false);
                    }
                }
                true
            }
        };
        Ok(matched)
    }
}

/// An ordered group of ORF records.
///
/// # Examples
///
/// ```rust
/// use orfind_core::config::CodonRange;
/// use orfind_core::filter::{OrfCollection, OrfFilter};
/// use orfind_core::sequence::Sequence;
///
/// let genome = Sequence::sense("ACGTAACCCCTGAAAGGGTAGATGTTTTAC")?;
/// let orfs = OrfCollection::from(genome.orfs(5)?);
///
/// let short = orfs.apply(&OrfFilter::CodonLength(CodonRange::new(1, 4)))?;
/// assert_eq!(short.len(), 1);
/// assert_eq!(orfs.len(), 1);
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrfCollection {
    orfs: Vec<Orf>,
}

impl OrfCollection {
    #[must_use]
    pub fn new(orfs: Vec<Orf>) -> Self {
        Self { orfs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orfs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orfs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Orf> {
        self.orfs.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Orf] {
        &self.orfs
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Orf> {
        self.orfs
    }

    /// Records satisfying `predicate`, in their original order
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Orf) -> bool,
    {
        self.orfs.iter().filter(|orf| predicate(orf)).cloned().collect()
    }

    /// Records matching a library predicate.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`OrfFilter::matches`].
    pub fn apply(&self, filter: &OrfFilter) -> Result<Self, OrfindError> {
        let mut kept = Vec::new();
        for orf in &self.orfs {
            if filter.matches(orf)? {
                kept.push(orf.clone());
            }
        }
        Ok(Self::new(kept))
    }

    /// Records at the given strand-normalized coordinates.
    ///
    /// `None` leaves that coordinate unconstrained.
    #[must_use]
    pub fn find(&self, start: Option<usize>, stop: Option<usize>) -> Self {
        self.filter(|orf| {
            start.is_none_or(|start| orf.start == start) && stop.is_none_or(|stop| orf.stop == stop)
        })
    }
}

impl From<Vec<Orf>> for OrfCollection {
    fn from(orfs: Vec<Orf>) -> Self {
        Self::new(orfs)
    }
}

impl FromIterator<Orf> for OrfCollection {
    fn from_iter<I: IntoIterator<Item = Orf>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for OrfCollection {
    type Item = Orf;
    type IntoIter = std::vec::IntoIter<Orf>;

    fn into_iter(self) -> Self::IntoIter {
        self.orfs.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrfCollection {
    type Item = &'a Orf;
    type IntoIter = std::slice::Iter<'a, Orf>;

    fn into_iter(self) -> Self::IntoIter {
        self.orfs.iter()
    }
}
