//! Per-row threshold-table queries: amortized monotone cursor vs.
//! elementwise binary search. Both produce one end event per begin
//! event on the row; only their search strategy over `T` differs.

use crate::events::{BeginEvent, MatchEventsQueue};
use crate::pair::{MatchPair, PairArena};

fn build_match_pair(row: usize, col: usize, k: usize, prev_best: MatchPair, prev_idx: u32) -> MatchPair {
    let mut mp = MatchPair {
        end_row: (row + k - 1) as i64,
        end_col: (col + k - 1) as i64,
        dp: k as u64,
        prev: None,
    };
    if prev_best.dp > 0 {
        mp.dp = prev_best.dp + k as u64;
        mp.prev = Some(prev_idx);
    }
    mp
}

/// O(|T| + M): a single cursor over `T`, reused across every begin event
/// on this row since begin events and `T` are both ascending in column.
pub fn amortized_row_query(
    table: &[u32],
    arena: &mut PairArena,
    row: usize,
    k: usize,
    begins: &[BeginEvent],
    events: &mut MatchEventsQueue,
) {
    let mut cursor = 0usize;
    for begin in begins {
        while cursor < table.len() && arena.get(table[cursor]).end_col < begin.col as i64 {
            cursor += 1;
        }
        let prev_idx = table[cursor - 1];
        let mp = build_match_pair(row, begin.col, k, arena.get(prev_idx), prev_idx);
        let end_row = mp.end_row as usize;
        let end_col = mp.end_col as usize;
        let pair = arena.push(mp);
        events.add_end(end_row, end_col, pair);
    }
}

/// O(M·log|T|): binary search `T` per begin event. Preferred when begin
/// events are sparse relative to the table.
pub fn elementwise_row_query(
    table: &[u32],
    arena: &mut PairArena,
    row: usize,
    k: usize,
    begins: &[BeginEvent],
    events: &mut MatchEventsQueue,
) {
    for begin in begins {
        let cursor = table.partition_point(|&idx| arena.get(idx).end_col < begin.col as i64);
        let prev_idx = table[cursor - 1];
        let mp = build_match_pair(row, begin.col, k, arena.get(prev_idx), prev_idx);
        let end_row = mp.end_row as usize;
        let end_col = mp.end_col as usize;
        let pair = arena.push(mp);
        events.add_end(end_row, end_col, pair);
    }
}
