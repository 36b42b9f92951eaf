//! Sparse LCSk / LCSk++ — longest common subsequence in k-length blocks.
//!
//! Computes the longest common subsequence between two byte strings
//! restricted to runs of exactly `k` matched characters (LCSk), or the
//! same with single-character continuations allowed between adjacent
//! k-runs (LCSk++), and reconstructs a witnessing alignment rather than
//! just its length.
//!
//! # Quick Start
//!
//! ```
//! use lcskpp::lcskpp_sparse_fast;
//!
//! let a = b"ACGTACGT";
//! let b = b"ACGTACGT";
//! let recon = lcskpp_sparse_fast(a, b, 3).unwrap();
//! assert_eq!(recon.len(), 8);
//! ```

pub mod alphabet;
pub mod config;
pub mod dp;
pub mod error;
pub mod events;
pub mod hash;
pub mod pair;
pub mod validate;

pub use config::EngineConfig;
pub use error::LcskError;

/// Longest common subsequence restricted to concatenations of exactly
/// `k`-length matched blocks.
///
/// `a` and `b` may be empty (yielding an empty reconstruction). Returns
/// [`LcskError::InvalidK`] if `k == 0`, or
/// [`LcskError::AlphabetTooLarge`] if the combined alphabet of `a` and
/// `b` raised to the `k`-th power does not fit in a `u64`.
pub fn lcsk_sparse_fast(a: &[u8], b: &[u8], k: usize) -> Result<Vec<(usize, usize)>, LcskError> {
    dp::run(a, b, k, false, &EngineConfig::default())
}

/// Longest common subsequence restricted to k-length matched blocks,
/// with single-character continuations allowed between blocks offset by
/// exactly `(1, 1)`. Never shorter than [`lcsk_sparse_fast`] on the same
/// inputs.
///
/// Same error conditions as [`lcsk_sparse_fast`].
pub fn lcskpp_sparse_fast(a: &[u8], b: &[u8], k: usize) -> Result<Vec<(usize, usize)>, LcskError> {
    dp::run(a, b, k, true, &EngineConfig::default())
}

/// Same as [`lcsk_sparse_fast`]/[`lcskpp_sparse_fast`] but with an
/// explicit [`EngineConfig`], for callers who want to tune the
/// amortized/elementwise row-query threshold.
pub fn lcsk_sparse_fast_with_config(
    a: &[u8],
    b: &[u8],
    k: usize,
    config: &EngineConfig,
) -> Result<Vec<(usize, usize)>, LcskError> {
    dp::run(a, b, k, false, config)
}

pub fn lcskpp_sparse_fast_with_config(
    a: &[u8],
    b: &[u8],
    k: usize,
    config: &EngineConfig,
) -> Result<Vec<(usize, usize)>, LcskError> {
    dp::run(a, b, k, true, config)
}
