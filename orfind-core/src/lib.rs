//! # Orfind - circular genome ORF finder
//!
//! Locates open reading frames (ORFs) on both strands and in all three
//! reading frames of a circular DNA sequence, then screens them by length,
//! upstream motif and Kyte-Doolittle hydropathy peaks to pick out candidate
//! small membrane proteins.
//!
//! ## Quick Start
//!
//! ```rust
//! use orfind_core::{OrfAnalyzer, config::OrfindConfig};
//!
//! let analyzer = OrfAnalyzer::new(OrfindConfig {
//!     context_size: 5,
//!     ..Default::default()
//! });
//!
//! // ACG TTT TAA AAA AAA TTG GGC TAT, read as a circle
//! let results = analyzer.analyze_sequence("ACGTTTTAAAAAAAATTGGGCTAT", None)?;
//!
//! assert_eq!(results.orfs.len(), 1);
//! assert_eq!(results.orfs[0].orf.bases, "TTGGGCTATACGTTT");
//! # Ok::<(), orfind_core::types::OrfindError>(())
//! ```
//!
//! ## Lower-level API
//!
//! ```rust
//! use orfind_core::algorithms::{ScanPolicy, StartCodons};
//! use orfind_core::filter::{OrfCollection, OrfFilter};
//! use orfind_core::sequence::Sequence;
//!
//! let genome = Sequence::sense("ACGTAACCCCTGAAAGGGTAGATGTTTTAC")?;
//! let orfs = genome.orfs_both_strands(ScanPolicy::Longest, &StartCodons::with_ctg(), 5)?;
//! assert_eq!(orfs.len(), 3);
//!
//! let antisense = OrfCollection::from(orfs).filter(|orf| !orf.is_sense);
//! let found = antisense.apply(&OrfFilter::Start(1))?;
//! assert_eq!(found.as_slice()[0].bases, "GTG");
//! # Ok::<(), orfind_core::types::OrfindError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`sequence`]: codon tokenizer, reverse complement, the [`sequence::Sequence`] type and FASTA input
//! - [`algorithms`]: longest and all-overlapping ORF scanners
//! - [`translation`]: standard genetic code
//! - [`hydropathy`]: Kyte-Doolittle scores and window smoothing
//! - [`peaks`]: 1-D peak finder
//! - [`filter`]: ORF collections and predicates
//! - [`engine`]: [`OrfAnalyzer`], the configured end-to-end pipeline
//! - [`config`]: analysis settings
//! - [`results`]: per-sequence results
//! - [`output`]: JSON, SCO and FAA writers
//! - [`types`]: core data types and the error enum
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], an alias over
//! [`OrfindError`](types::OrfindError). Errors are raised where a
//! precondition fails and are never retried or coerced:
//!
//! - Invalid bases or lengths that cannot be split into codons
//! - Residues outside the hydropathy or translation tables
//! - Indices or context windows outside the sequence
//! - Start codons with no reachable stop codon
//! - I/O and parse errors at the FASTA boundary

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod engine;
pub mod filter;
pub mod hydropathy;
pub mod output;
pub mod peaks;
pub mod results;
pub mod sequence;
pub mod translation;
pub mod types;

pub use engine::OrfAnalyzer;
pub use types::OrfindError;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, OrfindError>;
