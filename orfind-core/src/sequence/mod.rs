//! Circular DNA sequences and their ORFs.
//!
//! A [`Sequence`] owns the bases of one strand of a circular genome. It keeps
//! the reverse complement alongside the bases and tokenizes each of the three
//! reading frames on first use, caching the codons per frame offset.
//!
//! ## Modules
//!
//! - [`codons`]: codon tokenizer
//! - [`complement`]: reverse complement
//! - [`io`]: FASTA reading
//!
//! ## Coordinates
//!
//! A frame offset `f` reads the sequence rotated left by `f` bases, so codon
//! `i` of frame `f` begins at base `f + 3 * i`. ORFs found on the antisense
//! strand are reported in sense-strand coordinates by reflecting each index
//! through `length - index - 1`.
//!
//! ## Examples
//!
//! ```rust
//! use orfind_core::sequence::Sequence;
//!
//! let genome = Sequence::sense("ACGTTTTAAAAAAAATTGGGCTAT")?;
//! let orfs = genome.orfs(5)?;
//!
//! assert_eq!(orfs.len(), 1);
//! assert_eq!(orfs[0].bases, "TTGGGCTATACGTTT");
//! assert_eq!((orfs[0].start, orfs[0].stop), (15, 6));
//! # Ok::<(), orfind_core::types::OrfindError>(())
//! ```

pub mod codons;
pub mod complement;
pub mod io;

pub use codons::*;
pub use complement::*;
pub use io::*;

use std::cell::OnceCell;

use bio::bio_types::strand::Strand;
use log::debug;

use crate::algorithms::{ScanPolicy, StartCodons, scan};
use crate::constants::{CODON_LENGTH, READING_FRAMES};
use crate::types::{Codon, Orf, OrfindError};

/// One strand of a circular genome.
#[derive(Debug, Clone)]
pub struct Sequence {
    bases: String,
    reverse: String,
    strand: Strand,
    frames: [OnceCell<Vec<Codon>>; READING_FRAMES],
}

impl Sequence {
    /// Wrap `bases` as the given strand.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError::InvalidStrand`] for [`Strand::Unknown`] and
    /// [`OrfindError::InvalidBase`] if any symbol is outside `{A, C, G, T}`.
    pub fn new(bases: impl Into<String>, strand: Strand) -> Result<Self, OrfindError> {
        if strand == Strand::Unknown {
            return Err(OrfindError::InvalidStrand);
        }
        let bases = bases.into();
        let reverse = reverse_complement(&bases)?;
        Ok(Self {
            bases,
            reverse,
            strand,
            frames: Default::default(),
        })
    }

    /// Wrap `bases` as the sense strand
    pub fn sense(bases: impl Into<String>) -> Result<Self, OrfindError> {
        Self::new(bases, Strand::Forward)
    }

    /// The full base string
    #[must_use]
    pub fn bases(&self) -> &str {
        &self.bases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    #[must_use]
    pub const fn strand(&self) -> Strand {
        self.strand
    }

    #[must_use]
    pub fn is_sense(&self) -> bool {
        self.strand == Strand::Forward
    }

    /// The opposite strand, read 5' to 3'.
    ///
    /// Applying this twice yields the original bases and strand.
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        let strand = match self.strand {
            Strand::Forward => Strand::Reverse,
            _ => Strand::Forward,
        };
        Self {
            bases: self.reverse.clone(),
            reverse: self.bases.clone(),
            strand,
            frames: Default::default(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), OrfindError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(OrfindError::IndexOutOfRange {
                index,
                length: self.len(),
            })
        }
    }

    /// Bases from `start` up to, not including, `stop`.
    ///
    /// When `stop <= start` the range wraps through the end of the sequence
    /// and the tail is concatenated with the head.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError::IndexOutOfRange`] unless both indices lie in
    /// `[0, length)`.
    pub fn slice(&self, start: usize, stop: usize) -> Result<String, OrfindError> {
        self.check_index(start)?;
        self.check_index(stop)?;
        if stop > start {
            Ok(self.bases[start..stop].to_string())
        } else {
            Ok(format!("{}{}", &self.bases[start..], &self.bases[..stop]))
        }
    }

    /// `size` bases beginning at `from`, wrapping circularly.
    fn circular_window(&self, from: usize, size: usize) -> String {
        let length = self.len();
        if from + size <= length {
            self.bases[from..from + size].to_string()
        } else {
            format!(
                "{}{}",
                &self.bases[from..],
                &self.bases[..from + size - length]
            )
        }
    }

    /// Codons of the sequence read at `frame` (0, 1 or 2).
    ///
    /// Tokenization happens once per frame and is cached.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError::InvalidFrame`] for offsets above 2 and
    /// [`OrfindError::InvalidLength`] when the sequence length is not a
    /// multiple of 3, since such a circle has no closed reading frames.
    pub fn codons(&self, frame: usize) -> Result<&[Codon], OrfindError> {
        let cell = self
            .frames
            .get(frame)
            .ok_or(OrfindError::InvalidFrame(frame))?;
        if !self.len().is_multiple_of(CODON_LENGTH) {
            return Err(OrfindError::InvalidLength(self.len()));
        }
        let codons = cell.get_or_init(|| {
            if self.is_empty() {
                return Vec::new();
            }
            let (head, tail) = self.bases.as_bytes().split_at(frame);
            let rotated = [tail, head].concat();
            split_codons(&rotated)
        });
        Ok(codons)
    }

    /// Map a strand-local base index into sense-strand coordinates
    fn normalize_index(&self, index: usize) -> usize {
        if self.is_sense() {
            index
        } else {
            self.len() - index - 1
        }
    }

    /// Map a sense-strand coordinate back onto this strand.
    ///
    /// Reflection is an involution, so this is the inverse of the
    /// normalization applied by [`Sequence::build_orf`].
    pub fn local_index(&self, normalized: usize) -> Result<usize, OrfindError> {
        self.check_index(normalized)?;
        Ok(self.normalize_index(normalized))
    }

    /// Materialize an ORF record from strand-local base coordinates.
    ///
    /// `base_start` is the first base of the start codon and `base_stop` the
    /// first base of the stop codon. The upstream window holds the
    /// `context_size` bases ending right before the start codon, the
    /// downstream window the `context_size` bases beginning at the stop codon;
    /// both wrap circularly.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError::IndexOutOfRange`] for coordinates outside the
    /// sequence or a context larger than the sequence, and
    /// [`OrfindError::InvalidLength`] when the bases between start and stop
    /// are not a whole number of codons.
    pub fn build_orf(
        &self,
        base_start: usize,
        base_stop: usize,
        context_size: usize,
    ) -> Result<Orf, OrfindError> {
        let bases = self.slice(base_start, base_stop)?;
        if !bases.len().is_multiple_of(CODON_LENGTH) {
            return Err(OrfindError::InvalidLength(bases.len()));
        }
        let length = self.len();
        if context_size > length {
            return Err(OrfindError::IndexOutOfRange {
                index: context_size,
                length,
            });
        }

        let upstream_from = (base_start + length - context_size) % length;
        Ok(Orf {
            start: self.normalize_index(base_start),
            stop: self.normalize_index(base_stop),
            bases,
            upstream: self.circular_window(upstream_from, context_size),
            downstream: self.circular_window(base_stop, context_size),
            is_sense: self.is_sense(),
        })
    }

    /// Re-slice the bases of an ORF built from this sequence.
    ///
    /// # Errors
    ///
    /// Returns [`OrfindError::InvalidStrand`] if the ORF was read from the
    /// other strand, otherwise the errors of [`Sequence::slice`].
    pub fn orf_bases(&self, orf: &Orf) -> Result<String, OrfindError> {
        if orf.is_sense != self.is_sense() {
            return Err(OrfindError::InvalidStrand);
        }
        self.slice(self.local_index(orf.start)?, self.local_index(orf.stop)?)
    }

    /// Find ORFs on this strand in all three frames.
    ///
    /// Frames are scanned in offset order and each frame's ORFs keep their
    /// discovery order.
    pub fn find_orfs(
        &self,
        policy: ScanPolicy,
        starts: &StartCodons,
        context_size: usize,
    ) -> Result<Vec<Orf>, OrfindError> {
        let mut orfs = Vec::new();
        for frame in 0..READING_FRAMES {
            let spans = scan(self.codons(frame)?, policy, starts)?;
            debug!(
                "{} strand, frame {}: {} ORFs",
                if self.is_sense() { "sense" } else { "antisense" },
                frame,
                spans.len()
            );
            // codon i of this frame begins at base frame + 3i, always < len
            for span in spans {
                orfs.push(self.build_orf(
                    frame + CODON_LENGTH * span.start,
                    frame + CODON_LENGTH * span.stop,
                    context_size,
                )?);
            }
        }
        Ok(orfs)
    }

    /// Longest, non-overlapping ORFs with the standard start codons
    pub fn orfs(&self, context_size: usize) -> Result<Vec<Orf>, OrfindError> {
        self.find_orfs(ScanPolicy::Longest, &StartCodons::standard(), context_size)
    }

    /// One ORF per start codon with the standard start codons
    pub fn all_orfs(&self, context_size: usize) -> Result<Vec<Orf>, OrfindError> {
        self.find_orfs(
            ScanPolicy::AllOverlapping,
            &StartCodons::standard(),
            context_size,
        )
    }

    /// Run the six scans (3 frames on each strand), this strand first.
    pub fn orfs_both_strands(
        &self,
        policy: ScanPolicy,
        starts: &StartCodons,
        context_size: usize,
    ) -> Result<Vec<Orf>, OrfindError> {
        let mut orfs = self.find_orfs(policy, starts, context_size)?;
        orfs.extend(
            self.reverse_complement()
                .find_orfs(policy, starts, context_size)?,
        );
        Ok(orfs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(bases: &str) -> Sequence {
        Sequence::sense(bases).unwrap()
    }

    fn antisense(bases: &str) -> Sequence {
        Sequence::new(bases, Strand::Reverse).unwrap()
    }

    #[test]
    fn test_new_rejects_unknown_strand() {
        assert!(matches!(
            Sequence::new("ACGT", Strand::Unknown),
            Err(OrfindError::InvalidStrand)
        ));
    }

    #[test]
    fn test_new_rejects_invalid_bases() {
        assert!(matches!(
            Sequence::sense("ACGNT"),
            Err(OrfindError::InvalidBase { base: 'N', .. })
        ));
    }

    #[test]
    fn test_bases_and_strand() {
        let seq = sense("ACGTAACCCCTGAAAGGGTAGATGTTTTAC");
        assert_eq!(seq.bases(), "ACGTAACCCCTGAAAGGGTAGATGTTTTAC");
        assert_eq!(seq.len(), 30);
        assert!(seq.is_sense());
        assert!(!seq.reverse_complement().is_sense());
    }

    #[test]
    fn test_reverse_complement_sequence() {
        let seq = sense("ACGTAACCCCTGAAAGGGTAGATGTTTTAC");
        let reverse = seq.reverse_complement();
        assert_eq!(reverse.bases(), "GTAAAACATCTACCCTTTCAGGGGTTACGT");
        assert_eq!(reverse.strand(), Strand::Reverse);

        let back = reverse.reverse_complement();
        assert_eq!(back.bases(), seq.bases());
        assert_eq!(back.strand(), Strand::Forward);
    }

    #[test]
    fn test_slice_normal_and_wrapped() {
        let seq = sense("ACGTGTGGCTAG");
        assert_eq!(seq.slice(3, 9).unwrap(), "TGTGGC");
        assert_eq!(seq.slice(9, 3).unwrap(), "TAGACG");
        assert_eq!(seq.slice(4, 4).unwrap(), "GTGGCTAGACGT");
    }

    #[test]
    fn test_slice_out_of_range() {
        let seq = sense("ACGTGT");
        assert!(matches!(
            seq.slice(0, 6),
            Err(OrfindError::IndexOutOfRange {
                index: 6,
                length: 6
            })
        ));
        assert!(seq.slice(7, 2).is_err());
    }

    #[test]
    fn test_codons_per_frame() {
        let seq = sense("ACGTGTGGCTAGCTAGCATCAGCA");
        let frame0: Vec<String> = seq.codons(0).unwrap().iter().map(ToString::to_string).collect();
        assert_eq!(
            frame0,
            ["ACG", "TGT", "GGC", "TAG", "CTA", "GCA", "TCA", "GCA"]
        );

        let frame1 = seq.codons(1).unwrap();
        assert_eq!(frame1[0].to_string(), "CGT");
        assert_eq!(frame1[7].to_string(), "CAA");

        let frame2 = seq.codons(2).unwrap();
        assert_eq!(frame2[0].to_string(), "GTG");
        assert_eq!(frame2[7].to_string(), "AAC");
    }

    #[test]
    fn test_codons_are_cached() {
        let seq = sense("ACGTGTGGCTAG");
        let first = seq.codons(1).unwrap().as_ptr();
        let second = seq.codons(1).unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_codons_invalid_frame_and_length() {
        assert!(matches!(
            sense("ACGTGT").codons(3),
            Err(OrfindError::InvalidFrame(3))
        ));
        assert!(matches!(
            sense("ACGTG").codons(0),
            Err(OrfindError::InvalidLength(5))
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let seq = sense("");
        assert!(seq.is_empty());
        assert!(seq.codons(2).unwrap().is_empty());
        assert!(seq.orfs(0).unwrap().is_empty());
        assert!(seq.all_orfs(0).unwrap().is_empty());
    }

    #[test]
    fn test_build_orf_forward_normal() {
        let seq = sense("GAGCTAGCATCGATTCGAT");
        let orf = seq.build_orf(2, 14, 5).unwrap();
        assert_eq!(orf.bases, "GCTAGCATCGAT");
        assert_eq!(orf.upstream, "GATGA");
        assert_eq!((orf.start, orf.stop), (2, 14));
        assert!(orf.is_sense);

        let orf = seq.build_orf(2, 14, 7).unwrap();
        assert_eq!(orf.downstream, "TCGATGA");
    }

    #[test]
    fn test_build_orf_forward_wrapped() {
        let seq = sense("GAGCTAGCATCGATCGA");
        let orf = seq.build_orf(8, 3, 5).unwrap();
        assert_eq!(orf.bases, "ATCGATCGAGAG");
        assert_eq!(orf.upstream, "CTAGC");
        assert_eq!((orf.start, orf.stop), (8, 3));

        let orf = seq.build_orf(8, 3, 3).unwrap();
        assert_eq!(orf.downstream, "CTA");
    }

    #[test]
    fn test_build_orf_reverse_normal() {
        let seq = antisense("GAGCTAGCATCGATCGAT");
        let orf = seq.build_orf(4, 13, 7).unwrap();
        assert_eq!(orf.bases, "TAGCATCGA");
        assert_eq!(orf.upstream, "GATGAGC");
        assert_eq!((orf.start, orf.stop), (13, 4));
        assert!(!orf.is_sense);

        let orf = seq.build_orf(4, 13, 5).unwrap();
        assert_eq!(orf.downstream, "TCGAT");
    }

    #[test]
    fn test_build_orf_reverse_wrapped() {
        let seq = antisense("GAGCTAGCATCGATCGA");
        let orf = seq.build_orf(11, 6, 2).unwrap();
        assert_eq!(orf.bases, "GATCGAGAGCTA");
        assert_eq!(orf.upstream, "TC");
        assert_eq!((orf.start, orf.stop), (5, 10));

        let orf = seq.build_orf(11, 6, 12).unwrap();
        assert_eq!(orf.downstream, "GCATCGATCGAG");

        let orf = seq.build_orf(11, 6, 3).unwrap();
        assert_eq!(orf.upstream, "ATC");
        assert_eq!(orf.downstream, "GCA");
    }

    #[test]
    fn test_build_orf_zero_and_full_context() {
        let seq = sense("ATGAAATAG");
        let orf = seq.build_orf(0, 6, 0).unwrap();
        assert!(orf.upstream.is_empty());
        assert!(orf.downstream.is_empty());

        let orf = seq.build_orf(0, 6, 9).unwrap();
        assert_eq!(orf.upstream, "ATGAAATAG");
        assert_eq!(orf.downstream, "TAGATGAAA");
    }

    #[test]
    fn test_build_orf_errors() {
        let seq = sense("ATGAAATAG");
        assert!(matches!(
            seq.build_orf(0, 5, 2),
            Err(OrfindError::InvalidLength(5))
        ));
        assert!(matches!(
            seq.build_orf(0, 6, 10),
            Err(OrfindError::IndexOutOfRange {
                index: 10,
                length: 9
            })
        ));
        assert!(seq.build_orf(9, 3, 0).is_err());
    }

    #[test]
    fn test_orfs_both_strands_fixture() {
        let seq = Sequence::sense("ACGTAA".to_string() + "CCC" + "CTGAAAGGGTAG" + "ATGTTTTAC").unwrap();
        let starts = StartCodons::with_ctg();

        let forward = seq.find_orfs(ScanPolicy::Longest, &starts, 5).unwrap();
        assert_eq!(forward.len(), 2);
        assert_eq!(forward[0].upstream, "AACCC");
        assert_eq!(forward[1].downstream, "TAACC");

        let reverse = seq
            .reverse_complement()
            .find_orfs(ScanPolicy::Longest, &starts, 5)
            .unwrap();
        assert_eq!(reverse.len(), 1);
        assert_eq!(reverse[0].upstream, "GTTAC");
        assert_eq!(reverse[0].start, 1);

        let both = seq.orfs_both_strands(ScanPolicy::Longest, &starts, 5).unwrap();
        assert_eq!(both.len(), 3);
        assert!(both[0].is_sense && both[1].is_sense && !both[2].is_sense);
    }

    #[test]
    fn test_orfs_standard_starts_skip_ctg() {
        let seq = sense("ACGTAACCCCTGAAAGGGTAGATGTTTTAC");
        let orfs = seq.orfs(5).unwrap();
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].bases, "ATGTTTTACACG");
        assert_eq!((orfs[0].start, orfs[0].stop), (21, 3));
    }

    #[test]
    fn test_orfs_single_wraparound_orf() {
        let seq = sense("ACGTTTTAAAAAAAATTGGGCTAT");
        let orfs = seq.orfs(5).unwrap();
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].bases, "TTGGGCTATACGTTT");
        assert_eq!(orfs[0].upstream, "AAAAA");
        assert_eq!(orfs[0].downstream, "TAAAA");

        let both = seq
            .orfs_both_strands(ScanPolicy::Longest, &StartCodons::standard(), 5)
            .unwrap();
        assert_eq!(both.len(), 1);
    }

    #[test]
    fn test_orfs_gtg_found_in_frame_one() {
        let seq = sense("ACGTGTGGCTAGCTAGCATCAGCA");
        let orfs = seq.orfs(3).unwrap();
        assert_eq!(orfs.len(), 1);
        // GTG is codon 1 of frame 1, closed by TAG at codon 4
        assert_eq!((orfs[0].start, orfs[0].stop), (4, 13));
        assert_eq!(orfs[0].bases, "GTGGCTAGC");
    }

    #[test]
    fn test_all_orfs_no_stop_error_propagates() {
        let seq = sense("ATGATGATG");
        assert!(matches!(
            seq.all_orfs(0),
            Err(OrfindError::NoStopCodon(0))
        ));
        assert!(seq.orfs(0).unwrap().is_empty());
    }

    #[test]
    fn test_orfs_require_whole_codons() {
        assert!(matches!(
            sense("ATGAAATAGC").orfs(0),
            Err(OrfindError::InvalidLength(10))
        ));
    }

    #[test]
    fn test_round_trip_bases() {
        let seq = sense("ACGTAACCCCTGAAAGGGTAGATGTTTTACGGATTGCCTGAATGTAAG");
        let reverse = seq.reverse_complement();
        let starts = StartCodons::with_ctg();

        let mut checked = 0;
        for strand in [&seq, &reverse] {
            for policy in [ScanPolicy::Longest, ScanPolicy::AllOverlapping] {
                for orf in strand.find_orfs(policy, &starts, 4).unwrap() {
                    assert_eq!(strand.orf_bases(&orf).unwrap(), orf.bases);
                    checked += 1;
                }
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_round_trip_manual_records() {
        let cases = [
            (sense("GAGCTAGCATCGATTCGAT"), 2, 14),
            (sense("GAGCTAGCATCGATCGA"), 8, 3),
            (antisense("GAGCTAGCATCGATCGAT"), 4, 13),
            (antisense("GAGCTAGCATCGATCGA"), 11, 6),
        ];
        for (seq, start, stop) in cases {
            let orf = seq.build_orf(start, stop, 3).unwrap();
            assert_eq!(seq.orf_bases(&orf).unwrap(), orf.bases);
            assert_eq!(seq.local_index(orf.start).unwrap(), start);
            assert_eq!(seq.local_index(orf.stop).unwrap(), stop);
        }
    }

    #[test]
    fn test_orf_bases_strand_mismatch() {
        let seq = sense("ATGAAATAG");
        let orf = seq.build_orf(0, 6, 0).unwrap();
        assert!(matches!(
            seq.reverse_complement().orf_bases(&orf),
            Err(OrfindError::InvalidStrand)
        ));
    }
}
