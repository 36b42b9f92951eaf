//! `RowUpdate`: drains this row's end events, applies LCSk++ continuation
//! edges, and maintains the compressed threshold table.

use crate::events::MatchEventsQueue;
use crate::pair::{MatchPair, PairArena};

/// Consume all end events scheduled for `row`, folding each into the
/// threshold table `table` (indices into `arena`) and, for LCSk++,
/// checking continuation against `prev_row` (this row's predecessor's
/// end-of-row match-pairs, ascending by `end_col`).
///
/// On return, `prev_row` holds this row's own end-of-row match-pairs
/// (LCSk++ only — left untouched for plain LCSk, where it is unused).
pub fn row_update(
    row: usize,
    k: usize,
    lcskpp: bool,
    events: &mut MatchEventsQueue,
    table: &mut Vec<u32>,
    arena: &mut PairArena,
    prev_row: &mut Vec<u32>,
) {
    let mut curr_row = Vec::new();
    let mut cont_idx = 0usize;

    while let Some(end) = events.pop_end(row) {
        let mut mp = arena.get(end.pair);

        if lcskpp {
            while cont_idx < prev_row.len()
                && arena.get(prev_row[cont_idx]).end_col + 1 < mp.end_col
            {
                cont_idx += 1;
            }
            if cont_idx < prev_row.len() && arena.get(prev_row[cont_idx]).end_col + 1 == mp.end_col
            {
                let candidate = arena.get(prev_row[cont_idx]);
                let continuation_dp = candidate.dp + 1;
                if continuation_dp > mp.dp {
                    mp.dp = continuation_dp;
                    mp.prev = Some(prev_row[cont_idx]);
                }
            }
            arena.set(end.pair, mp);
            curr_row.push(end.pair);

            let dp = mp.dp as usize;
            while table.len() <= dp {
                let slot = table.len();
                let dummy = MatchPair {
                    end_row: row as i64 + 1,
                    end_col: end.col as i64 + 1,
                    dp: slot as u64,
                    prev: None,
                };
                table.push(arena.push(dummy));
            }

            let floor = dp as i64 - k as i64;
            let mut idx = dp as i64;
            while idx > floor && (end.col as i64) < arena.get(table[idx as usize]).end_col {
                table[idx as usize] = end.pair;
                idx -= 1;
            }
        } else {
            let idx = (mp.dp / k as u64) as usize;
            if idx == table.len() {
                table.push(end.pair);
            } else if (end.col as i64) < arena.get(table[idx]).end_col {
                table[idx] = end.pair;
            }
        }
    }

    *prev_row = curr_row;
}
