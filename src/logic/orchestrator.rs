//! Whole-tournament runs: pair every group, size every bracket, then schedule.

use crate::logic::knockout::generate_knockout_rounds;
use crate::logic::round_pairing::generate_group_rounds;
use crate::logic::slots::build_schedule;
use crate::models::{Group, Round, Schedule, ScheduleError, Tournament};
use serde::{Deserialize, Serialize};

/// A tournament with rounds, brackets and assignments filled in, plus its schedule.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTournament {
    pub tournament: Tournament,
    pub schedule: Schedule,
}

/// Generate group rounds and knockout rounds for every category.
///
/// Groups that already carry rounds keep their matches (tables, times) and only
/// get the regenerated pairings written over them; their round count must match.
/// Knockout rounds are always rebuilt from the current qualifier count.
pub fn generate_rounds_for_tournament(
    mut tournament: Tournament,
) -> Result<Tournament, ScheduleError> {
    for category in &mut tournament.categories {
        for (g, group) in category.groups.iter_mut().enumerate() {
            let rounds = generate_group_rounds(&group.entries_idx, category.duration_minutes);
            apply_rounds(group, rounds, g)?;
        }

        category.knockout_rounds =
            generate_knockout_rounds(&category.groups, category.num_qualified_per_group).map_err(
                |e| ScheduleError::Category {
                    short_name: category.short_name.clone(),
                    source: Box::new(e),
                },
            )?;
        log::info!(
            "category {}: {} group(s), {} knockout round(s)",
            category.short_name,
            category.groups.len(),
            category.knockout_rounds.len()
        );
    }
    Ok(tournament)
}

/// Generate all rounds and lay them onto the tournament's tables.
pub fn schedule_tournament(tournament: Tournament) -> Result<ScheduledTournament, ScheduleError> {
    let mut tournament = generate_rounds_for_tournament(tournament)?;
    let schedule = build_schedule(
        &mut tournament.categories,
        tournament.num_tables,
        tournament.start_time,
    )?;
    log::info!(
        "tournament {}: {} match(es) in {} time slot(s), ends {}",
        tournament.name,
        schedule.match_count(),
        schedule.time_slots.len(),
        schedule.end_time()
    );
    Ok(ScheduledTournament {
        tournament,
        schedule,
    })
}

/// Put freshly generated rounds on a group, or re-pair its existing matches.
/// The stored shape must match round for round; nothing is written otherwise.
fn apply_rounds(
    group: &mut Group,
    rounds: Vec<Round>,
    group_idx: usize,
) -> Result<(), ScheduleError> {
    if group.rounds.is_empty() {
        group.rounds = rounds;
        return Ok(());
    }
    if group.rounds.len() != rounds.len() {
        return Err(ScheduleError::RoundCountMismatch {
            group: group_idx + 1,
        });
    }
    if let Some(r) = group
        .rounds
        .iter()
        .zip(&rounds)
        .position(|(existing, fresh)| existing.len() != fresh.len())
    {
        return Err(ScheduleError::MatchCountMismatch {
            group: group_idx + 1,
            round: r + 1,
        });
    }
    for (existing, fresh) in group.rounds.iter_mut().zip(rounds) {
        for (m, f) in existing.iter_mut().zip(fresh) {
            m.entry_1 = f.entry_1;
            m.entry_2 = f.entry_2;
        }
    }
    Ok(())
}
