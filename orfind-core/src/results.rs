use serde::Serialize;

use crate::types::{Orf, Peak};

/// ORF discovery results for one sequence.
///
/// # Examples
///
/// ```rust
/// use orfind_core::{OrfAnalyzer, config::OrfindConfig, config::OutputFormat};
/// use orfind_core::output::write_results;
///
/// let config = OrfindConfig {
///     context_size: 5,
///     ..Default::default()
/// };
/// let analyzer = OrfAnalyzer::new(config);
/// let results = analyzer.analyze_sequence("ACGTTTTAAAAAAAATTGGGCTAT", None)?;
///
/// assert_eq!(results.sequence_info.num_orfs, 1);
/// assert_eq!(results.orfs[0].orf.bases, "TTGGGCTATACGTTT");
///
/// let mut output = Vec::new();
/// write_results(&mut output, &results, OutputFormat::Sco)?;
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OrfindResults {
    /// Information about the analyzed sequence.
    pub sequence_info: SequenceInfo,

    /// ORFs that passed every configured filter, sense strand first.
    ///
    /// Within a strand, ORFs are grouped by frame offset and keep their
    /// discovery order.
    pub orfs: Vec<AnalyzedOrf>,
}

/// An ORF together with its translation and hydrophobic peaks.
///
/// Serializes as the flat ORF record plus a `peaks` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedOrf {
    #[serde(flatten)]
    pub orf: Orf,

    /// One-letter translation of `orf.bases`.
    #[serde(skip)]
    pub residues: String,

    /// Hydropathy peaks at or above the configured height
    pub peaks: Vec<Peak>,
}

/// Information about a processed sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceInfo {
    /// Sequence identifier from the FASTA header.
    pub header: String,

    /// Everything after the identifier in the FASTA header line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Length of the sequence in base pairs.
    pub length: usize,

    /// GC content as a fraction (0.0 to 1.0).
    pub gc_content: f64,

    /// ORFs found on both strands before filtering.
    pub num_candidates: usize,

    /// ORFs kept after filtering.
    pub num_orfs: usize,
}

/// Fraction of G and C bases
#[must_use]
pub fn gc_content(bases: &[u8]) -> f64 {
    if bases.is_empty() {
        return 0.0;
    }
    let gc = bases.iter().filter(|&&b| matches!(b, b'G' | b'C')).count();
    gc as f64 / bases.len() as f64
}
