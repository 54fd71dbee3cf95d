//! Tournament, Category, Group, KnockoutRound and ScheduleError.

use crate::models::entry::Entry;
use crate::models::game::{GameMatch, Round};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Errors returned to the caller when the tournament definition can't be scheduled.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// A group has fewer entries than the number qualifying from it.
    NotEnoughPlayers,
    /// Regenerated pairings don't fit the rounds already stored on a group (1-based group number).
    RoundCountMismatch { group: usize },
    /// A stored round holds a different number of matches than the regenerated one
    /// (1-based group and round numbers).
    MatchCountMismatch { group: usize, round: usize },
    /// Scheduling needs at least one table.
    NoTables,
    /// Entries can't be split into groups of the requested sizes.
    InvalidGroupSizes {
        entries: usize,
        per_group_main: usize,
        per_group_remainder: usize,
    },
    /// An error raised while processing one category.
    Category {
        short_name: String,
        source: Box<ScheduleError>,
    },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NotEnoughPlayers => write!(f, "not enough players"),
            ScheduleError::RoundCountMismatch { group } => {
                write!(f, "number of rounds for group {} is not equal", group)
            }
            ScheduleError::MatchCountMismatch { group, round } => write!(
                f,
                "number of matches for group {} round {} is not equal",
                group, round
            ),
            ScheduleError::NoTables => write!(f, "need at least 1 table to build a schedule"),
            ScheduleError::InvalidGroupSizes {
                entries,
                per_group_main,
                per_group_remainder,
            } => write!(
                f,
                "can't split {} entries into groups of {} and {}",
                entries, per_group_main, per_group_remainder
            ),
            ScheduleError::Category { short_name, source } => {
                write!(f, "category {} failed: {}", short_name, source)
            }
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Category { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// A round-robin pool within a category.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Indices into the category's entries, in draw order.
    pub entries_idx: Vec<usize>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Group {
    pub fn new(entries_idx: Vec<usize>) -> Self {
        Self {
            entries_idx,
            rounds: Vec::new(),
        }
    }

    /// Largest round of the group (the table positions it needs at once).
    pub fn matches_per_round(&self) -> usize {
        self.rounds.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// One single-elimination stage.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutRound {
    /// Entrants alive entering this round (power of two).
    pub round: usize,
    pub matches: Vec<GameMatch>,
}

/// A competition within the tournament (e.g. Men's Singles).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub entries_per_grp_main: usize,
    #[serde(default)]
    pub entries_per_grp_remainder: usize,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub knockout_rounds: Vec<KnockoutRound>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub num_qualified_per_group: usize,
}

impl Category {
    /// Category with groups but no display entries (enough for scheduling).
    pub fn with_groups(
        short_name: impl Into<String>,
        groups: Vec<Group>,
        duration_minutes: u32,
        num_qualified_per_group: usize,
    ) -> Self {
        let short_name = short_name.into();
        Self {
            name: short_name.clone(),
            short_name,
            groups,
            duration_minutes,
            num_qualified_per_group,
            ..Self::default()
        }
    }

    /// Display name of the entry a slot refers to; empty for byes and placeholders.
    pub fn entry_name(&self, idx: Option<usize>) -> String {
        idx.and_then(|i| self.entries.get(i))
            .map(Entry::name)
            .unwrap_or_default()
    }
}

/// Full tournament definition as supplied by the caller.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub name: String,
    pub num_tables: usize,
    #[serde(with = "crate::models::datetime")]
    pub start_time: NaiveDateTime,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Tournament {
    pub fn new(name: impl Into<String>, num_tables: usize, start_time: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            num_tables,
            start_time,
            categories: Vec::new(),
        }
    }

    pub fn with_categories(
        name: impl Into<String>,
        num_tables: usize,
        start_time: NaiveDateTime,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            categories,
            ..Self::new(name, num_tables, start_time)
        }
    }

    /// Look up a category by short name.
    pub fn category(&self, short_name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.short_name == short_name)
    }
}
