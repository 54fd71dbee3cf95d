//! Schedule and TimeSlot: matches laid onto tables across time.

use crate::models::game::GameMatch;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One slot of time across all tables.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// None means the table is not allocated to any match yet.
    pub tables: Vec<Option<GameMatch>>,
}

impl TimeSlot {
    pub fn new(num_tables: usize) -> Self {
        Self {
            tables: vec![None; num_tables],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.tables.iter().all(Option::is_some)
    }

    pub fn is_table_free(&self, table: usize) -> bool {
        matches!(self.tables.get(table), Some(None))
    }

    /// Indices of tables with no match.
    pub fn free_tables(&self) -> Vec<usize> {
        self.tables
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_none())
            .map(|(t, _)| t)
            .collect()
    }

    /// Occupied tables, in table order.
    pub fn matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.tables.iter().flatten()
    }

    /// Earliest start and longest duration among occupied tables.
    /// None if the slot is empty or nothing in it has a start time.
    pub fn start_time_and_duration(&self) -> Option<(NaiveDateTime, u32)> {
        let start = self.matches().filter_map(|m| m.date_time).min()?;
        let duration = self
            .matches()
            .map(|m| m.duration_minutes)
            .max()
            .unwrap_or(0);
        Some((start, duration))
    }

    /// Effective start plus effective duration.
    pub fn end_time(&self) -> Option<NaiveDateTime> {
        self.start_time_and_duration()
            .map(|(start, d)| start + Duration::minutes(i64::from(d)))
    }

    pub fn has_different_start_time(&self) -> bool {
        let mut times = self.matches().map(|m| m.date_time);
        match times.next() {
            Some(first) => times.any(|t| t != first),
            None => false,
        }
    }

    pub fn has_different_duration(&self) -> bool {
        let mut durations = self.matches().map(|m| m.duration_minutes);
        match durations.next() {
            Some(first) => durations.any(|d| d != first),
            None => false,
        }
    }

    /// Grow to `width` tables; never shrinks.
    pub(crate) fn pad_to(&mut self, width: usize) {
        if self.tables.len() < width {
            self.tables.resize(width, None);
        }
    }
}

/// Ordered time slots starting at `start_time`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub start_time: NaiveDateTime,
    pub time_slots: Vec<TimeSlot>,
}

impl Schedule {
    pub fn new(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            time_slots: Vec::new(),
        }
    }

    pub fn max_table_count(&self) -> usize {
        self.time_slots
            .iter()
            .map(|s| s.tables.len())
            .max()
            .unwrap_or(0)
    }

    /// End of the last slot, or the start time when nothing is scheduled.
    pub fn end_time(&self) -> NaiveDateTime {
        self.time_slots
            .last()
            .and_then(TimeSlot::end_time)
            .unwrap_or(self.start_time)
    }

    /// Every scheduled match, slot by slot.
    pub fn matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.time_slots.iter().flat_map(TimeSlot::matches)
    }

    pub fn match_count(&self) -> usize {
        self.matches().count()
    }
}
