use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};

use crate::config::OrfindConfig;
use crate::constants::{CODON_LENGTH, DEFAULT_HEADER};
use crate::filter::{OrfCollection, OrfFilter, hydrophobic_peaks};
use crate::results::{AnalyzedOrf, OrfindResults, SequenceInfo, gc_content};
use crate::sequence::{FastaRecord, Sequence, read_fasta, read_fasta_file, validate_bases};
use crate::types::{Orf, OrfindError};

/// High-level ORF discovery and filtering.
///
/// For each sequence the analyzer runs the six scans (three frames on each
/// strand), applies the filters selected by its [`OrfindConfig`] and scores
/// the surviving ORFs' hydropathy peaks.
///
/// # Examples
///
/// ## Analyze a sequence string
///
/// ```rust
/// use orfind_core::{OrfAnalyzer, config::OrfindConfig};
///
/// let analyzer = OrfAnalyzer::new(OrfindConfig {
///     context_size: 5,
///     ..Default::default()
/// });
///
/// let results = analyzer.analyze_sequence("ACGTAACCCCTGAAAGGGTAGATGTTTTAC", None)?;
/// assert_eq!(results.sequence_info.header, "Orfind_Seq_1");
/// assert_eq!(results.orfs.len(), 2);
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
///
/// ## Analyze a FASTA file with filters
///
/// ```rust,no_run
/// use orfind_core::{OrfAnalyzer, config::{CodonRange, OrfindConfig}};
///
/// let analyzer = OrfAnalyzer::new(OrfindConfig {
///     codon_range: Some(CodonRange::new(50, 80)),
///     required_peaks: Some(2),
///     ..Default::default()
/// });
///
/// for result in analyzer.analyze_fasta_file("genome.fasta")? {
///     println!("{}: {} ORFs", result.sequence_info.header, result.orfs.len());
/// }
/// # Ok::<(), orfind_core::types::OrfindError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrfAnalyzer {
    /// Configuration options for discovery and filtering
    pub config: OrfindConfig,
}

impl OrfAnalyzer {
    /// Creates a new analyzer with the specified configuration.
    pub const fn new(config: OrfindConfig) -> Self {
        Self { config }
    }

    /// The conjunction of every filter enabled in the configuration.
    ///
    /// Coordinate checks run before the hydropathy check.
    #[must_use]
    pub fn filter(&self) -> OrfFilter {
        let mut filters = Vec::new();
        if let Some(range) = self.config.codon_range {
            filters.push(OrfFilter::CodonLength(range));
        }
        if let Some(motif) = &self.config.upstream_motif {
            filters.push(OrfFilter::UpstreamMotif(motif.clone()));
        }
        if let Some(count) = self.config.required_peaks {
            filters.push(OrfFilter::HydrophobicPeaks {
                count,
                hydropathy: self.config.hydropathy,
            });
        }
        OrfFilter::All(filters)
    }

    /// Analyzes every record of a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError`] if the file cannot be read or parsed, or if
    /// any record fails analysis.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<OrfindResults>, OrfindError> {
        self.analyze_records(read_fasta_file(path)?)
    }

    /// Analyzes every record of a FASTA stream.
    pub fn analyze_fasta<R: Read>(&self, reader: R) -> Result<Vec<OrfindResults>, OrfindError> {
        self.analyze_records(read_fasta(reader)?)
    }

    fn analyze_records(&self, records: Vec<FastaRecord>) -> Result<Vec<OrfindResults>, OrfindError> {
        records
            .into_iter()
            .map(|record| {
                self.analyze_sequence_bytes(record.bases.as_bytes(), record.id, record.description)
            })
            .collect()
    }

    /// Analyzes a single sequence from a string.
    ///
    /// # Arguments
    ///
    /// * `sequence` - Sense-strand bases of a circular genome
    /// * `header` - Optional sequence identifier (defaults to "Orfind_Seq_1")
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<OrfindResults, OrfindError> {
        let header = header.unwrap_or_else(|| DEFAULT_HEADER.to_string());
        self.analyze_sequence_bytes(sequence.as_bytes(), header, None)
    }

    /// Analyzes a single sequence from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError`] if:
    /// - The configuration is invalid
    /// - A base is outside `{A, C, G, T}`
    /// - The length is not a multiple of 3
    /// - The context window is longer than the sequence
    /// - The all-overlapping policy meets a start codon with no stop
    pub fn analyze_sequence_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> Result<OrfindResults, OrfindError> {
        self.config.validate()?;
        validate_bases(sequence)?;
        if !sequence.len().is_multiple_of(CODON_LENGTH) {
            warn!(
                "{}: length {} is not a multiple of {}, no circular reading frame exists",
                header,
                sequence.len(),
                CODON_LENGTH
            );
            return Err(OrfindError::InvalidLength(sequence.len()));
        }

        let bases = String::from_utf8(sequence.to_vec())
            .map_err(|e| OrfindError::ParseError(e.to_string()))?;
        let genome = Sequence::sense(bases)?;

        let candidates = genome.orfs_both_strands(
            self.config.policy,
            &self.config.start_codons(),
            self.config.context_size,
        )?;
        let num_candidates = candidates.len();
        debug!("{}: {} candidate ORFs", header, num_candidates);

        let kept = OrfCollection::from(candidates).apply(&self.filter())?;
        let orfs = kept
            .into_iter()
            .map(|orf| self.analyze_orf(orf))
            .collect::<Result<Vec<_>, _>>()?;

        if !self.config.quiet {
            info!(
                "{}: {} bp, {} candidate ORFs, {} kept",
                header,
                sequence.len(),
                num_candidates,
                orfs.len()
            );
        }

        Ok(OrfindResults {
            sequence_info: SequenceInfo {
                header,
                description,
                length: sequence.len(),
                gc_content: gc_content(sequence),
                num_candidates,
                num_orfs: orfs.len(),
            },
            orfs,
        })
    }

    /// Translate an ORF and locate its hydrophobic peaks
    pub fn analyze_orf(&self, orf: Orf) -> Result<AnalyzedOrf, OrfindError> {
        let residues = orf.residues()?;
        let peaks = hydrophobic_peaks(&residues, &self.config.hydropathy)?;
        Ok(AnalyzedOrf {
            orf,
            residues,
            peaks,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::algorithms::ScanPolicy;
    use crate::config::CodonRange;

    const FIXTURE: &str = "ACGTAACCCCTGAAAGGGTAGATGTTTTAC";

    fn analyzer(config: OrfindConfig) -> OrfAnalyzer {
        OrfAnalyzer::new(OrfindConfig {
            context_size: 5,
            ..config
        })
    }

    /// Two hydrophobic stretches between polar linkers, 101 codons
    fn membrane_gene() -> String {
        let hydrophobic = "ATT".repeat(20);
        let polar = "GAT".repeat(20);
        format!("ATG{polar}{hydrophobic}{polar}{hydrophobic}{polar}TAA")
    }

    #[test]
    fn test_analyze_sequence_default_header() {
        let results = analyzer(OrfindConfig::default())
            .analyze_sequence(FIXTURE, None)
            .unwrap();

        assert_eq!(results.sequence_info.header, "Orfind_Seq_1");
        assert_eq!(results.sequence_info.length, 30);
        assert_eq!(results.sequence_info.num_candidates, 2);
        assert_eq!(results.orfs.len(), 2);
        assert_eq!(results.orfs[0].orf.bases, "ATGTTTTACACG");
        assert_eq!(results.orfs[1].orf.bases, "GTG");
        assert_eq!(results.orfs[0].residues, "MFYT");
        assert!(results.orfs[0].peaks.is_empty());
    }

    #[test]
    fn test_alternative_starts_add_both_strand_orfs() {
        let results = analyzer(OrfindConfig {
            alternative_starts: true,
            ..Default::default()
        })
        .analyze_sequence(FIXTURE, Some("ctg".to_string()))
        .unwrap();

        let records: Vec<(usize, usize, bool)> = results
            .orfs
            .iter()
            .map(|a| (a.orf.start, a.orf.stop, a.orf.is_sense))
            .collect();
        assert_eq!(records, vec![(9, 18, true), (21, 3, true), (1, 28, false)]);
    }

    #[test]
    fn test_codon_range_filter() {
        let results = analyzer(OrfindConfig {
            alternative_starts: true,
            codon_range: Some(CodonRange::new(3, 3)),
            ..Default::default()
        })
        .analyze_sequence(FIXTURE, None)
        .unwrap();

        assert_eq!(results.sequence_info.num_candidates, 3);
        assert_eq!(results.sequence_info.num_orfs, 1);
        assert_eq!(results.orfs[0].orf.bases, "CTGAAAGGG");
    }

    #[test]
    fn test_required_peaks_filter() {
        let gene = membrane_gene();
        let padding = "C".repeat(30);
        let genome = format!("{padding}{gene}{padding}");

        let results = OrfAnalyzer::new(OrfindConfig {
            required_peaks: Some(2),
            ..Default::default()
        })
        .analyze_sequence(&genome, None)
        .unwrap();

        assert_eq!(results.sequence_info.num_candidates, 2);
        assert_eq!(results.orfs.len(), 1);
        let analyzed = &results.orfs[0];
        assert_eq!(analyzed.orf.start, 30);
        assert!(analyzed.orf.is_sense);
        assert_eq!(analyzed.peaks.len(), 2);
    }

    #[test]
    fn test_upstream_motif_filter() {
        let config = OrfindConfig {
            context_size: 20,
            upstream_motif: Some("GG".to_string()),
            ..Default::default()
        };
        let gene = "ATGAAATAAC";

        let plain = format!("{}{gene}", "C".repeat(20));
        let results = OrfAnalyzer::new(config.clone())
            .analyze_sequence(&plain, None)
            .unwrap();
        assert_eq!(results.sequence_info.num_candidates, 1);
        assert!(results.orfs.is_empty());

        let promoted = format!("CCCCCCCCGGCCCCCCCCCC{gene}");
        let results = OrfAnalyzer::new(config)
            .analyze_sequence(&promoted, None)
            .unwrap();
        assert_eq!(results.orfs.len(), 1);
        assert_eq!(results.orfs[0].orf.start, 20);
    }

    #[test]
    fn test_invalid_length_is_rejected() {
        let result = analyzer(OrfindConfig::default()).analyze_sequence("ACGTA", None);
        assert!(matches!(result, Err(OrfindError::InvalidLength(5))));
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        let result = analyzer(OrfindConfig::default()).analyze_sequence("ACGNNA", None);
        assert!(matches!(
            result,
            Err(OrfindError::InvalidBase {
                base: 'N',
                position: 3
            })
        ));
    }

    #[test]
    fn test_context_longer_than_sequence() {
        let result = OrfAnalyzer::new(OrfindConfig {
            context_size: 31,
            ..Default::default()
        })
        .analyze_sequence(FIXTURE, None);
        assert!(matches!(
            result,
            Err(OrfindError::IndexOutOfRange {
                index: 31,
                length: 30
            })
        ));
    }

    #[test]
    fn test_all_overlapping_without_stop() {
        let result = analyzer(OrfindConfig {
            policy: ScanPolicy::AllOverlapping,
            ..Default::default()
        })
        .analyze_sequence("ATGATGATG", None);
        assert!(matches!(result, Err(OrfindError::NoStopCodon(0))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = analyzer(OrfindConfig {
            codon_range: Some(CodonRange::new(10, 1)),
            ..Default::default()
        })
        .analyze_sequence(FIXTURE, None);
        assert!(matches!(result, Err(OrfindError::InvalidConfig(_))));
    }

    #[test]
    fn test_analyze_fasta_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">first test plasmid").unwrap();
        writeln!(file, "{}", FIXTURE.to_lowercase()).unwrap();
        writeln!(file, ">second").unwrap();
        writeln!(file, "ACGTTTTAAAAAA").unwrap();
        writeln!(file, "AATTGGGCTAT").unwrap();

        let results = analyzer(OrfindConfig::default())
            .analyze_fasta_file(file.path())
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sequence_info.header, "first");
        assert_eq!(
            results[0].sequence_info.description.as_deref(),
            Some("test plasmid")
        );
        assert_eq!(results[1].orfs[0].orf.bases, "TTGGGCTATACGTTT");
    }

    #[test]
    fn test_analyze_fasta_stream() {
        let input = format!(">a\n{FIXTURE}\n");
        let results = analyzer(OrfindConfig::default())
            .analyze_fasta(input.as_bytes())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].sequence_info.num_orfs, 2);
    }

    #[test]
    fn test_filter_is_conjunction_of_config() {
        let analyzer = OrfAnalyzer::new(OrfindConfig {
            codon_range: Some(CodonRange::new(50, 80)),
            required_peaks: Some(2),
            upstream_motif: Some("GG".to_string()),
            ..Default::default()
        });
        match analyzer.filter() {
            OrfFilter::All(filters) => assert_eq!(filters.len(), 3),
            other => panic!("Expected All, got {:?}", other),
        }
        assert_eq!(
            OrfAnalyzer::default().filter(),
            OrfFilter::All(Vec::new())
        );
    }
}
