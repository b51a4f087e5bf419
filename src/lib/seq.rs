//! Sequence record types flowing through the pipeline.
//!
//! All three record types are plain owned data, immutable after
//! construction. Workers pass them by value over channels; nothing here is
//! shared or locked.

/// A named nucleotide sequence.
///
/// Contents are expected to be A/C/G/T but are never validated; downstream
/// stages tolerate arbitrary bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    name: String,
    bases: Vec<u8>,
}

impl Sequence {
    /// Creates a sequence record.
    #[must_use]
    pub fn new(name: impl Into<String>, bases: Vec<u8>) -> Self {
        Self { name: name.into(), bases }
    }

    /// The record name (FASTA header without the `>`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sequence bases.
    #[must_use]
    pub fn bases(&self) -> &[u8] {
        &self.bases
    }

    /// Number of bases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// True when the sequence has no bases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Decomposes the record into its name and bases.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.name, self.bases)
    }
}

/// A run-length encoded sequence: parallel run symbols and run lengths.
///
/// Invariants, upheld by the run-length encoder (the only producer):
/// `symbols.len() == counts.len()`, every count is in `1..=127`, and the
/// counts sum to the original sequence length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RleSequence {
    name: String,
    symbols: Vec<u8>,
    counts: Vec<u8>,
}

impl RleSequence {
    /// Creates an RLE record from parallel symbol and count runs.
    #[must_use]
    pub fn new(name: impl Into<String>, symbols: Vec<u8>, counts: Vec<u8>) -> Self {
        debug_assert_eq!(symbols.len(), counts.len(), "runs must be parallel");
        debug_assert!(counts.iter().all(|&c| (1..=127).contains(&c)), "run lengths must be 1..=127");
        Self { name: name.into(), symbols, counts }
    }

    /// The record name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One symbol per run.
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// One length per run, each in `1..=127`.
    #[must_use]
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }

    /// Length of the sequence the runs expand back to.
    #[must_use]
    pub fn expanded_len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    /// Decomposes the record into name, symbols, and counts.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<u8>, Vec<u8>) {
        (self.name, self.symbols, self.counts)
    }
}

/// The canonical k-mer codes of one sequence.
///
/// Holds `len - k + 1` packed codes for a source sequence of `len >= k`
/// bases; the encoder emits no batch at all for shorter sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerBatch {
    kmers: Vec<u64>,
    k: usize,
}

impl KmerBatch {
    /// Creates a batch of packed canonical k-mer codes.
    #[must_use]
    pub fn new(kmers: Vec<u64>, k: usize) -> Self {
        Self { kmers, k }
    }

    /// The packed canonical codes, one per window.
    #[must_use]
    pub fn kmers(&self) -> &[u64] {
        &self.kmers
    }

    /// Window width the codes were packed with.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }
}
