//! Perfect-hash match production: for each row of `A`, the ascending list
//! of `B`-columns starting an identical k-mer.

use std::collections::HashMap;

use super::rolling::RollingHasher;

/// Produces, row by row, the columns in `B` matching the k-mer starting
/// at that row in `A`.
///
/// Built once from `(codes_a, codes_b, k, alphabet_size, hash_mod)`; the
/// caller drives it by calling [`MatchMaker::next_row`] exactly once per
/// row `0..=|A|` (the final call at `row == |A|` always returns an empty
/// slice, mirroring "MatchMaker exhausted but the row loop still runs").
pub struct MatchMaker<'a> {
    hasher: RollingHasher<'a>,
    bmap: HashMap<u64, Vec<u32>>,
    exhausted: bool,
}

impl<'a> MatchMaker<'a> {
    pub fn new(
        codes_a: &'a [u32],
        codes_b: &[u32],
        k: usize,
        alphabet_size: u64,
        hash_mod: u64,
    ) -> Self {
        let mut bmap: HashMap<u64, Vec<u32>> = HashMap::new();
        let b_hasher = RollingHasher::new(codes_b, k, alphabet_size, hash_mod);
        for (col, hash) in b_hasher.enumerate() {
            bmap.entry(hash).or_default().push(col as u32);
        }

        MatchMaker {
            hasher: RollingHasher::new(codes_a, k, alphabet_size, hash_mod),
            bmap,
            exhausted: false,
        }
    }

    /// Columns in `B` whose k-mer matches the one starting at the next
    /// unconsumed row of `A`. Returns an empty slice once `A`'s hasher is
    /// exhausted, and keeps doing so on every subsequent call.
    pub fn next_row(&mut self) -> &[u32] {
        if self.exhausted {
            return &[];
        }
        match self.hasher.next() {
            Some(hash) => self.bmap.get(&hash).map(Vec::as_slice).unwrap_or(&[]),
            None => {
                self.exhausted = true;
                &[]
            }
        }
    }
}
