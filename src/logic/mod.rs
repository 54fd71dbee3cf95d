//! Scheduling logic: group pairings, knockout brackets, table/time slots.

mod group_sizing;
mod knockout;
mod orchestrator;
mod round_pairing;
mod slots;

pub use group_sizing::{calculate_groups, GroupCounts};
pub use knockout::{generate_knockout_rounds, next_power_of_two};
pub use orchestrator::{generate_rounds_for_tournament, schedule_tournament, ScheduledTournament};
pub use round_pairing::generate_group_rounds;
pub use slots::{build_schedule, table_label};
