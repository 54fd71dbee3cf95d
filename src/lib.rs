//! Tournament scheduler: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    build_schedule, calculate_groups, generate_group_rounds, generate_knockout_rounds,
    generate_rounds_for_tournament, next_power_of_two, schedule_tournament, table_label,
    GroupCounts, ScheduledTournament,
};
pub use models::{
    Category, Entry, EntryKind, EntrySlot, GameMatch, Group, KnockoutRound, Player, Round,
    Schedule, ScheduleError, TimeSlot, Tournament,
};
