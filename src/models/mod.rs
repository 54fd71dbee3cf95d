//! Data structures for the tournament scheduler: entries, groups, matches, schedule.

pub mod datetime;
mod entry;
mod game;
mod schedule;
mod tournament;

pub use entry::{Entry, EntryKind, Player};
pub use game::{EntrySlot, GameMatch, Round};
pub use schedule::{Schedule, TimeSlot};
pub use tournament::{Category, Group, KnockoutRound, ScheduleError, Tournament};
