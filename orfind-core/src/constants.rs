// =============================================================================
// Codons and frames
// =============================================================================

/// Length of a codon in base pairs
pub const CODON_LENGTH: usize = 3;

/// Number of reading frames per strand
pub const READING_FRAMES: usize = 3;

/// Canonical start codons
pub const START_CODONS: [&[u8; CODON_LENGTH]; 3] = [b"ATG", b"GTG", b"TTG"];

/// Alternative start codon, accepted only when explicitly enabled
pub const ALTERNATIVE_START_CODON: &[u8; CODON_LENGTH] = b"CTG";

/// Stop codons of the standard genetic code
pub const STOP_CODONS: [&[u8; CODON_LENGTH]; 3] = [b"TAA", b"TAG", b"TGA"];

// =============================================================================
// Analysis defaults
// =============================================================================

/// Upstream/downstream bases captured around each ORF
pub const DEFAULT_CONTEXT_SIZE: usize = 100;

/// Radius of the hydropathy smoothing window (window width 19)
pub const DEFAULT_WINDOW_RADIUS: usize = 9;

/// Radius used when searching the hydropathy profile for peaks
pub const DEFAULT_PEAK_RADIUS: usize = 9;

/// Minimum smoothed hydropathy for a peak to count as hydrophobic
pub const DEFAULT_MIN_PEAK_HEIGHT: f64 = 1.5;

/// Upstream region searched for a motif, as distances before the start codon.
///
/// The region covers bases −15 through −6, i.e. `upstream[len-15 .. len-5]`.
pub const PROMOTER_REGION: (usize, usize) = (15, 5);

/// Sequence header used when none is supplied
pub const DEFAULT_HEADER: &str = "Orfind_Seq_1";
