//! Knockout bracket skeleton that follows group play.

use crate::models::{GameMatch, Group, KnockoutRound, ScheduleError};

/// Build empty knockout rounds for the qualifiers of `groups`, largest round first.
///
/// The bracket is the next power of two above the qualifier count; the byes
/// that fill it are all consumed in the first round. Every match starts with
/// both sides unfilled.
pub fn generate_knockout_rounds(
    groups: &[Group],
    num_qualified_per_group: usize,
) -> Result<Vec<KnockoutRound>, ScheduleError> {
    if groups
        .iter()
        .any(|g| g.entries_idx.len() < num_qualified_per_group)
    {
        return Err(ScheduleError::NotEnoughPlayers);
    }

    let num_qualified = groups.len() * num_qualified_per_group;
    let first_round = next_power_of_two(num_qualified);
    let num_byes = first_round - num_qualified;

    let mut rounds = Vec::new();
    let mut round = first_round;
    while round >= 2 {
        let num_matches = if round == first_round {
            round / 2 - num_byes
        } else {
            round / 2
        };
        rounds.push(KnockoutRound {
            round,
            matches: (0..num_matches)
                .map(|idx| GameMatch::placeholder(round, idx))
                .collect(),
        });
        round /= 2;
    }
    log::debug!(
        "knockout bracket: qualified={} bracket={} byes={} rounds={}",
        num_qualified,
        first_round,
        num_byes,
        rounds.len()
    );
    Ok(rounds)
}

/// Smallest power of two >= `x`; 1 for 0 and 1.
pub fn next_power_of_two(x: usize) -> usize {
    x.max(1).next_power_of_two()
}
