//! Output formatting for ORF discovery results.
//!
//! This module provides writers for converting [`OrfindResults`] into the
//! supported file formats.
//!
//! ## Supported Formats
//!
//! - **JSON**: full ORF records with context windows and hydrophobic peaks
//! - **SCO**: simple coordinate output
//! - **FAA**: protein FASTA of the translated ORFs
//!
//! ## Examples
//!
//! ### Write to stdout
//!
//! ```rust,no_run
//! use orfind_core::{OrfAnalyzer, config::{OrfindConfig, OutputFormat}};
//! use orfind_core::output::write_results;
//! use std::io::stdout;
//!
//! let analyzer = OrfAnalyzer::new(OrfindConfig::default());
//! let results = analyzer.analyze_sequence("ATGCGATCG...", None)?;
//!
//! write_results(&mut stdout(), &results, OutputFormat::Json)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{OrfindError, config::OutputFormat, results::OrfindResults};
use std::io::Write;

mod formats {
    pub mod faa;
    pub mod json;
    pub mod sco;
}

use formats::{
    faa::write_faa_format,
    json::{write_json_array, write_json_format},
    sco::write_sco_format,
};

/// Writes the results of one sequence in the specified format.
///
/// # Arguments
///
/// * `writer` - Output writer (file, stdout, buffer, etc.)
/// * `results` - Results to write
/// * `format` - Desired output format
///
/// # Errors
///
/// Returns [`OrfindError`] if writing or serialization fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &OrfindResults,
    format: OutputFormat,
) -> Result<(), OrfindError> {
    match format {
        OutputFormat::Json => write_json_format(writer, results),
        OutputFormat::Sco => write_sco_format(writer, results),
        OutputFormat::Faa => write_faa_format(writer, results),
    }
}

/// Writes the results of several sequences.
///
/// JSON output is a single array; the line-oriented formats concatenate the
/// per-sequence output.
///
/// # Examples
///
/// ```rust,no_run
/// use orfind_core::{OrfAnalyzer, config::{OrfindConfig, OutputFormat}};
/// use orfind_core::output::write_all_results;
/// use std::fs::File;
///
/// let analyzer = OrfAnalyzer::new(OrfindConfig::default());
/// let results = analyzer.analyze_fasta_file("genome.fasta")?;
///
/// let mut output = File::create("orfs.faa")?;
/// write_all_results(&mut output, &results, OutputFormat::Faa)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_all_results<W: Write>(
    writer: &mut W,
    results: &[OrfindResults],
    format: OutputFormat,
) -> Result<(), OrfindError> {
    if format == OutputFormat::Json {
        return write_json_array(writer, results);
    }
    for result in results {
        write_results(writer, result, format)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::results::{AnalyzedOrf, OrfindResults, SequenceInfo};
    use crate::types::{Orf, Peak};

    pub fn sample_results() -> OrfindResults {
        OrfindResults {
            sequence_info: SequenceInfo {
                header: "plasmid".to_string(),
                description: Some("test plasmid".to_string()),
                length: 30,
                gc_content: 0.4,
                num_candidates: 3,
                num_orfs: 2,
            },
            orfs: vec![
                AnalyzedOrf {
                    orf: Orf {
                        start: 9,
                        stop: 18,
                        bases: "CTGAAAGGG".to_string(),
                        upstream: "AACCC".to_string(),
                        downstream: "TAGAT".to_string(),
                        is_sense: true,
                    },
                    residues: "LKG".to_string(),
                    peaks: Vec::new(),
                },
                AnalyzedOrf {
                    orf: Orf {
                        start: 1,
                        stop: 28,
                        bases: "GTG".to_string(),
                        upstream: "GTTAC".to_string(),
                        downstream: "TAAAA".to_string(),
                        is_sense: false,
                    },
                    residues: "V".to_string(),
                    peaks: vec![Peak {
                        index: 0,
                        height: 1.75,
                    }],
                },
            ],
        }
    }
}
