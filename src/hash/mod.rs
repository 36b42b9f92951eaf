//! k-mer hashing and match production.
//!
//! `rolling` produces the perfect-hash sequence of k-mer values for a
//! symbol string; `matcher` turns that into per-row match lists.

pub mod matcher;
pub mod rolling;
