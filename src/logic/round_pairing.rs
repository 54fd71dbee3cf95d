//! Round-robin pairings for one group (circle method, closed form).

use crate::models::{EntrySlot, GameMatch, Round};

/// Generate every round of a group's round robin.
///
/// 1. Pad with a bye when the entry count is odd.
/// 2. For each round, compute the seat permutation and pair adjacent seats.
/// 3. Drop pairs involving the bye.
/// 4. Move the round holding the 2nd-vs-3rd entry match to the end.
///
/// Fewer than 2 entries yields no rounds. Panics if the generated rounds break the
/// "every pair meets exactly once" count invariant.
pub fn generate_group_rounds(entries_idx: &[usize], match_duration_minutes: u32) -> Vec<Round> {
    if entries_idx.len() < 2 {
        return Vec::new();
    }

    let num_entries = entries_idx.len();
    let num_matches = num_entries * (num_entries - 1) / 2;
    let num_matches_per_round = num_entries / 2;
    let num_rounds = num_matches / num_matches_per_round;

    let mut padded: Vec<EntrySlot> = entries_idx.iter().copied().map(EntrySlot::Entry).collect();
    if num_entries % 2 == 1 {
        padded.push(EntrySlot::Bye);
    }

    let mut seats = vec![0; padded.len()];
    let mut rounds: Vec<Round> = (0..num_rounds)
        .map(|r| round_matches(r, &padded, match_duration_minutes, &mut seats))
        .collect();

    if !is_round_valid(&rounds, num_matches, num_matches_per_round) {
        log::error!(
            "generate_group_rounds produced inconsistent rounds: entries={:?} rounds={:?} expected_matches={}",
            entries_idx,
            rounds,
            num_matches
        );
        panic!("generate_group_rounds: round/match count invariant violated");
    }

    if padded.len() > 2 {
        swap_round_with_entries_to_end(&mut rounds, padded[1], padded[2]);
    }
    for (r, round) in rounds.iter_mut().enumerate() {
        for m in round {
            m.round_idx = Some(r);
        }
    }
    rounds
}

/// Matches of round `round`: adjacent seats of the permutation, bye pairs dropped.
fn round_matches(
    round: usize,
    padded: &[EntrySlot],
    match_duration_minutes: u32,
    seats: &mut [usize],
) -> Round {
    round_seats(round, padded.len(), seats);
    seats
        .chunks_exact(2)
        .filter_map(|pair| {
            let (lo, hi) = if pair[0] <= pair[1] {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            let (e1, e2) = (padded[lo], padded[hi]);
            if e1.is_bye() || e2.is_bye() {
                return None;
            }
            Some(GameMatch::new(e1, e2, match_duration_minutes))
        })
        .collect()
}

/// Seat permutation for `round` with `num_seats` (even) seats, written into `res`.
///
/// Seat 0 stays put. Even seats move +2 per round and bounce off the top end,
/// odd seats move -2 per round and bounce off seat 0.
fn round_seats(round: usize, num_seats: usize, res: &mut [usize]) {
    assert!(num_seats % 2 == 0, "num of seats should be even");
    assert!(round + 1 < num_seats, "invalid round {} for {} seats", round, num_seats);

    let n = num_seats as isize;
    let shift = 2 * round as isize;
    res[0] = 0;
    for (i, seat) in res.iter_mut().enumerate().take(num_seats).skip(1) {
        let i = i as isize;
        let mut pos;
        if i % 2 == 0 {
            pos = i + shift;
            if pos >= n {
                pos = 2 * n - pos - 1;
                if pos < 0 {
                    pos = 1 - pos;
                }
            }
        } else {
            pos = i - shift;
            if pos < 0 {
                pos = 1 - pos;
                if pos >= n {
                    pos = 2 * n - pos - 1;
                }
            }
        }
        *seat = pos as usize;
    }
}

fn is_round_valid(rounds: &[Round], num_matches: usize, num_matches_per_round: usize) -> bool {
    let mut total = 0;
    for round in rounds {
        if round.len() != num_matches_per_round {
            log::error!(
                "num of matches wrong! expected={} gotten={}",
                num_matches_per_round,
                round.len()
            );
            return false;
        }
        total += round.len();
    }
    total == num_matches
}

/// Swap the (non-final) round containing `a` vs `b` with the final round.
fn swap_round_with_entries_to_end(rounds: &mut [Round], a: EntrySlot, b: EntrySlot) {
    let Some(last) = rounds.len().checked_sub(1) else {
        return;
    };
    let found = rounds[..last]
        .iter()
        .rposition(|round| round.iter().any(|m| m.is_between(a, b)));
    if let Some(idx) = found {
        rounds.swap(idx, last);
    }
}
