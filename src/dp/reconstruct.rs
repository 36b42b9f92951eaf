//! Back-pointer chain walk producing the ordered `(row, col)` witness.

use crate::pair::PairArena;

/// Walk `prev` links from `best` to the sentinel, emitting matched
/// positions, then reverse into ascending order.
///
/// Each link is either a full k-block (no predecessor, or predecessor
/// ends at least `k` rows/cols earlier) — which emits `k` positions
/// walking backward from `(end_row, end_col)` — or a continuation edge
/// (predecessor ends exactly one row/col earlier) — which emits a single
/// position.
pub fn reconstruct(k: usize, arena: &PairArena, best: Option<u32>) -> Vec<(usize, usize)> {
    let mut recon = Vec::new();
    let Some(mut cur_idx) = best else {
        return recon;
    };

    loop {
        let cur = arena.get(cur_idx);
        let mut r = cur.end_row;
        let mut c = cur.end_col;

        let is_full_block = match cur.prev {
            None => true,
            Some(prev_idx) => {
                let prev = arena.get(prev_idx);
                prev.end_row + k as i64 <= cur.end_row && prev.end_col + k as i64 <= cur.end_col
            }
        };

        if is_full_block {
            for _ in 0..k {
                recon.push((r as usize, c as usize));
                r -= 1;
                c -= 1;
            }
        } else {
            let prev = arena.get(cur.prev.unwrap());
            debug_assert!(prev.end_row + 1 == cur.end_row && prev.end_col + 1 == cur.end_col);
            recon.push((r as usize, c as usize));
        }

        match cur.prev {
            Some(prev_idx) => cur_idx = prev_idx,
            None => break,
        }
    }

    recon.reverse();
    recon
}
