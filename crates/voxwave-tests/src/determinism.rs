//! Determinism verification helpers.
//!
//! Runs a generation closure several times and compares the outputs byte by
//! byte, reporting the first difference.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// The first difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first difference found between the reference run and a later run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference. For length mismatches this is the
    /// length of the shorter output.
    pub offset: usize,
    /// Byte from the reference run, if it has one at `offset`.
    pub expected: Option<u8>,
    /// Byte from the differing run, if it has one at `offset`.
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<u8>| match b {
            Some(b) => format!("0x{:02X}", b),
            None => "EOF".to_string(),
        };
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            show(self.expected),
            show(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Finds the first byte where `expected` and `actual` disagree.
pub fn find_first_difference(
    expected: &[u8],
    actual: &[u8],
    run_index: usize,
) -> Option<DiffInfo> {
    let shorter = expected.len().min(actual.len());
    let mismatch = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then_some(shorter))?;

    Some(DiffInfo {
        offset: mismatch,
        expected: expected.get(mismatch).copied(),
        actual: actual.get(mismatch).copied(),
        run_index,
    })
}

/// Run generation `runs` times and verify all outputs are identical.
///
/// # Panics
///
/// Panics if `runs` is less than 2.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference_bytes = reference.as_ref();
    let hash = compute_hash(reference_bytes);

    let diff_info = (1..runs).find_map(|run_index| {
        let output = generate_fn();
        find_first_difference(reference_bytes, output.as_ref(), run_index)
    });

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference_bytes.len(),
        hash,
        diff_info,
    }
}

/// Returns true if every hash in `hashes` is the same.
pub fn verify_hash_determinism(hashes: &[String]) -> bool {
    hashes.windows(2).all(|w| w[0] == w[1])
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
