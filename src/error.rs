//! Error types for the sparse LCSk/LCSk++ engine.
//!
//! Hand-rolled enum with manual `Display`/`Error` impls, matching this
//! codebase's existing convention for fallible-construction errors.

use std::fmt;

/// Failure modes rejected before the DP engine starts.
///
/// Both variants are caller errors discovered while building the shared
/// alphabet over `A ∪ B`; neither wraps an underlying error, so `source()`
/// returns `None` for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcskError {
    /// `k == 0`. A zero-length block has no well-defined match semantics.
    InvalidK,
    /// `alphabet_size^k >= 2^64`. The rolling hash can no longer guarantee
    /// a collision-free mapping from k-mer to `u64`.
    AlphabetTooLarge {
        alphabet_size: usize,
        k: usize,
    },
}

impl fmt::Display for LcskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LcskError::InvalidK => write!(f, "k must be at least 1"),
            LcskError::AlphabetTooLarge { alphabet_size, k } => write!(
                f,
                "alphabet of size {alphabet_size} raised to k={k} does not fit in 64 bits"
            ),
        }
    }
}

impl std::error::Error for LcskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
