//! Lay group and knockout matches onto tables and time slots.

use crate::models::{Category, GameMatch, Schedule, ScheduleError, TimeSlot};
use chrono::{Duration, NaiveDateTime};
use std::collections::HashMap;

/// Build the schedule for all categories on `num_tables` tables from `start_time`.
///
/// Two passes: every category's group stage, then every category's knockout
/// stage. Each stage starts when the previous one's last slot ends. Assigned
/// tables and start times are also written back onto the categories' matches.
pub fn build_schedule(
    categories: &mut [Category],
    num_tables: usize,
    start_time: NaiveDateTime,
) -> Result<Schedule, ScheduleError> {
    if num_tables == 0 {
        return Err(ScheduleError::NoTables);
    }

    let mut schedule = Schedule::new(start_time);
    let mut next_start = start_time;

    for category in categories.iter_mut() {
        let slots = schedule_group_stage(category, num_tables, next_start);
        log::debug!(
            "group stage of {} starts {} and takes {} slot(s)",
            category.short_name,
            next_start,
            slots.len()
        );
        next_start = stage_end(&slots).unwrap_or(next_start);
        schedule.time_slots.extend(slots);
    }

    for category in categories.iter_mut() {
        let slots = schedule_knockout_stage(category, num_tables, next_start);
        log::debug!(
            "knockout stage of {} starts {} and takes {} slot(s)",
            category.short_name,
            next_start,
            slots.len()
        );
        next_start = stage_end(&slots).unwrap_or(next_start);
        schedule.time_slots.extend(slots);
    }

    let width = schedule.max_table_count();
    for slot in &mut schedule.time_slots {
        slot.pad_to(width);
    }
    Ok(schedule)
}

/// Label shown for a table index (0-based in, 1-based out).
pub fn table_label(table: usize) -> String {
    format!("T{}", table + 1)
}

/// Group stage of one category.
///
/// Each (group, position in round) gets a fixed table, handed out round-robin
/// across groups. Matches go into the earliest slot where that table is free,
/// after the last slot either entry already plays in.
fn schedule_group_stage(
    category: &mut Category,
    num_tables: usize,
    start: NaiveDateTime,
) -> Vec<TimeSlot> {
    let mut next_table = 0;
    let group_tables: Vec<Vec<usize>> = category
        .groups
        .iter()
        .map(|g| {
            (0..g.matches_per_round())
                .map(|_| {
                    let t = next_table % num_tables;
                    next_table += 1;
                    t
                })
                .collect()
        })
        .collect();

    let num_rounds = category
        .groups
        .iter()
        .map(|g| g.rounds.len())
        .max()
        .unwrap_or(0);
    let mut stage = StageSlots::new(num_tables, start, category.duration_minutes);
    let mut last_slot_of_entry: HashMap<usize, usize> = HashMap::new();

    for r in 0..num_rounds {
        for (g, group) in category.groups.iter_mut().enumerate() {
            let Some(round) = group.rounds.get_mut(r) else {
                continue;
            };
            for (pos, m) in round.iter_mut().enumerate() {
                let table = group_tables[g][pos];
                let earliest = m
                    .entry_indices()
                    .filter_map(|e| last_slot_of_entry.get(&e))
                    .map(|s| s + 1)
                    .max()
                    .unwrap_or(0);
                let slot = stage.first_free_slot(table, earliest);

                m.category_short_name = category.short_name.clone();
                m.group_idx = Some(g);
                m.round_idx = Some(r);
                stage.place(slot, table, m);
                for e in m.entry_indices() {
                    last_slot_of_entry.insert(e, slot);
                }
            }
        }
    }
    stage.slots
}

/// Knockout stage of one category.
///
/// Tables are handed out strictly round-robin. Slots are searched forward only:
/// never before the previous match of the round, and a round never starts
/// before the previous round's last slot.
fn schedule_knockout_stage(
    category: &mut Category,
    num_tables: usize,
    start: NaiveDateTime,
) -> Vec<TimeSlot> {
    let mut stage = StageSlots::new(num_tables, start, category.duration_minutes);
    let mut next_table = 0;
    let mut round_floor = 0;

    for ko_round in category.knockout_rounds.iter_mut() {
        let size = ko_round.round;
        let mut cursor = round_floor;
        for (idx, m) in ko_round.matches.iter_mut().enumerate() {
            let table = next_table % num_tables;
            next_table += 1;
            let slot = stage.first_free_slot(table, cursor);
            cursor = slot;

            m.category_short_name = category.short_name.clone();
            m.group_idx = None;
            m.knockout_round = Some(size);
            m.match_idx = Some(idx);
            stage.place(slot, table, m);
            round_floor = round_floor.max(slot + 1);
        }
    }
    stage.slots
}

/// End of the last occupied match in a stage's final slot.
fn stage_end(slots: &[TimeSlot]) -> Option<NaiveDateTime> {
    slots.last().and_then(TimeSlot::end_time)
}

/// Slots of a single stage of a single category.
struct StageSlots {
    slots: Vec<TimeSlot>,
    num_tables: usize,
    start: NaiveDateTime,
    duration_minutes: u32,
}

impl StageSlots {
    fn new(num_tables: usize, start: NaiveDateTime, duration_minutes: u32) -> Self {
        Self {
            slots: Vec::new(),
            num_tables,
            start,
            duration_minutes,
        }
    }

    /// First slot at or after `from` with `table` free, appending one if none is.
    fn first_free_slot(&mut self, table: usize, from: usize) -> usize {
        debug_assert!(from <= self.slots.len());
        if let Some(s) = (from..self.slots.len()).find(|&s| self.slots[s].is_table_free(table)) {
            return s;
        }
        self.slots.push(TimeSlot::new(self.num_tables));
        self.slots.len() - 1
    }

    fn slot_start(&self, slot: usize) -> NaiveDateTime {
        self.start + Duration::minutes(slot as i64 * i64::from(self.duration_minutes))
    }

    /// Stamp table, duration and start onto `m` and put a copy in the slot.
    fn place(&mut self, slot: usize, table: usize, m: &mut GameMatch) {
        m.table = table_label(table);
        m.duration_minutes = self.duration_minutes;
        m.date_time = Some(self.slot_start(slot));
        self.slots[slot].tables[table] = Some(m.clone());
    }
}
