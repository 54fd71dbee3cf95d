//! GameMatch and the entry references it holds.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which entry sits on one side of a match.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EntrySlot {
    /// Index into the owning category's entries.
    Entry(usize),
    /// Padding entry of an odd-sized group. Never part of a real match.
    Bye,
    /// Knockout placeholder, filled in later from group results.
    #[default]
    Unfilled,
}

impl EntrySlot {
    pub fn index(self) -> Option<usize> {
        match self {
            EntrySlot::Entry(idx) => Some(idx),
            EntrySlot::Bye | EntrySlot::Unfilled => None,
        }
    }

    pub fn is_bye(self) -> bool {
        self == EntrySlot::Bye
    }
}

/// A round of a group: every non-bye entry plays exactly once.
pub type Round = Vec<GameMatch>;

/// A single match, either group play or a knockout placeholder.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub entry_1: EntrySlot,
    pub entry_2: EntrySlot,
    pub duration_minutes: u32,
    /// Table label, empty until scheduled.
    #[serde(default)]
    pub table: String,
    /// None until scheduled.
    #[serde(default)]
    pub date_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub category_short_name: String,
    /// Group-stage only.
    #[serde(default)]
    pub group_idx: Option<usize>,
    /// Group-stage only.
    #[serde(default)]
    pub round_idx: Option<usize>,
    /// Knockout only: size of the knockout round (entrants alive).
    #[serde(default)]
    pub knockout_round: Option<usize>,
    /// Knockout only: position within the knockout round.
    #[serde(default)]
    pub match_idx: Option<usize>,
}

impl GameMatch {
    /// Group-stage match between two entries.
    pub fn new(entry_1: EntrySlot, entry_2: EntrySlot, duration_minutes: u32) -> Self {
        Self {
            entry_1,
            entry_2,
            duration_minutes,
            ..Self::default()
        }
    }

    /// Knockout match with both sides unfilled.
    pub fn placeholder(knockout_round: usize, match_idx: usize) -> Self {
        Self {
            knockout_round: Some(knockout_round),
            match_idx: Some(match_idx),
            ..Self::default()
        }
    }

    /// True if the match is between `a` and `b`, in either order.
    pub fn is_between(&self, a: EntrySlot, b: EntrySlot) -> bool {
        (self.entry_1 == a && self.entry_2 == b) || (self.entry_1 == b && self.entry_2 == a)
    }

    /// Entry indices playing in this match (byes and placeholders excluded).
    pub fn entry_indices(&self) -> impl Iterator<Item = usize> {
        [self.entry_1, self.entry_2]
            .into_iter()
            .filter_map(EntrySlot::index)
    }
}
