//! The sparse DP engine's top-level row loop.
//!
//! Ties together [`crate::hash::matcher::MatchMaker`], the threshold
//! table, and [`crate::events::MatchEventsQueue`] into the per-row
//! protocol described for the two public entry points.

mod query;
mod reconstruct;
mod update;

use crate::alphabet::Alphabet;
use crate::config::{use_amortized_query, EngineConfig};
use crate::error::LcskError;
use crate::events::MatchEventsQueue;
use crate::hash::matcher::MatchMaker;
use crate::pair::{PairArena, SENTINEL};

/// Run the sparse DP engine to completion and return the reconstruction.
///
/// `lcskpp` selects LCSk++ (continuation edges allowed) vs. plain LCSk.
pub fn run(
    a: &[u8],
    b: &[u8],
    k: usize,
    lcskpp: bool,
    config: &EngineConfig,
) -> Result<Vec<(usize, usize)>, LcskError> {
    let (alphabet, hash_mod) = Alphabet::build(a, b, k)?;
    let codes_a = alphabet.encode(a);
    let codes_b = alphabet.encode(b);
    let alphabet_size = alphabet.size() as u64;

    let mut match_maker = MatchMaker::new(&codes_a, &codes_b, k, alphabet_size, hash_mod);
    let mut events = MatchEventsQueue::new();
    let mut arena = PairArena::new();
    let mut table: Vec<u32> = vec![SENTINEL];
    let mut prev_row: Vec<u32> = Vec::new();

    for row in 0..=a.len() {
        let row_matches = match_maker.next_row();
        for &col in row_matches {
            events.add_begin(row, col as usize);
        }

        let begins = drain_begins_for_row(&mut events, row);

        let use_amortized = use_amortized_query(table.len(), begins.len(), config);
        log::trace!(
            "row={row} table_len={} begins={} mode={}",
            table.len(),
            begins.len(),
            if use_amortized { "amortized" } else { "elementwise" }
        );

        if use_amortized {
            query::amortized_row_query(&table, &mut arena, row, k, &begins, &mut events);
        } else {
            query::elementwise_row_query(&table, &mut arena, row, k, &begins, &mut events);
        }

        update::row_update(row, k, lcskpp, &mut events, &mut table, &mut arena, &mut prev_row);
    }

    let best = table.last().copied().filter(|&idx| arena.get(idx).end_row != -1);
    Ok(reconstruct::reconstruct(k, &arena, best))
}

/// Pop every begin event queued for `row` into a plain `Vec`, so the
/// chosen query strategy can borrow `table`/`arena` immutably alongside
/// a mutable borrow of `events` for scheduling end events.
fn drain_begins_for_row(
    events: &mut MatchEventsQueue,
    row: usize,
) -> Vec<crate::events::BeginEvent> {
    let mut begins = Vec::new();
    while let Some(begin) = events.pop_begin(row) {
        begins.push(begin);
    }
    begins
}
