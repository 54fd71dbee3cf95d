//! Integration tests for laying matches onto tables and time slots.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use tournament_scheduler::{
    build_schedule, generate_group_rounds, generate_knockout_rounds, Category, EntrySlot,
    GameMatch, Group, Schedule, ScheduleError, TimeSlot,
};

fn nine_am() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 8, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn group_with_rounds(entries_idx: Vec<usize>, duration: u32) -> Group {
    let rounds = generate_group_rounds(&entries_idx, duration);
    Group {
        entries_idx,
        rounds,
    }
}

fn assert_well_formed(schedule: &Schedule) {
    let width = schedule.max_table_count();
    let mut previous: Option<NaiveDateTime> = None;
    for slot in &schedule.time_slots {
        assert_eq!(slot.tables.len(), width);
        assert!(!slot.is_empty());
        for (t, m) in slot.tables.iter().enumerate() {
            if let Some(m) = m {
                assert_eq!(m.table, format!("T{}", t + 1));
            }
        }
        let mut playing = HashSet::new();
        for e in slot.matches().flat_map(|m| m.entry_indices()) {
            assert!(playing.insert(e), "entry double-booked in one slot");
        }
        let (start, _) = slot.start_time_and_duration().unwrap();
        if let Some(prev) = previous {
            assert!(start > prev, "slot starts must strictly increase");
        }
        previous = Some(start);
    }
}

#[test]
fn zero_tables_is_an_error() {
    let mut cats = vec![Category::with_groups(
        "MS",
        vec![group_with_rounds(vec![0, 1], 30)],
        30,
        1,
    )];
    assert_eq!(build_schedule(&mut cats, 0, nine_am()), Err(ScheduleError::NoTables));
}

#[test]
fn single_group_one_slot_per_round() {
    let mut cats = vec![Category::with_groups(
        "MS",
        vec![group_with_rounds(vec![0, 1, 2, 3], 30)],
        30,
        2,
    )];
    let schedule = build_schedule(&mut cats, 2, nine_am()).unwrap();

    assert_eq!(schedule.time_slots.len(), 3);
    assert!(schedule.time_slots.iter().all(TimeSlot::is_full));
    assert_eq!(schedule.end_time(), nine_am() + Duration::minutes(90));
    assert_well_formed(&schedule);
}

#[test]
fn two_groups_on_three_tables() {
    let groups = vec![
        group_with_rounds(vec![0, 1, 2, 3], 30),
        group_with_rounds(vec![4, 5, 6, 7], 30),
    ];
    let mut cats = vec![Category::with_groups("MS", groups, 30, 2)];
    let schedule = build_schedule(&mut cats, 3, nine_am()).unwrap();

    assert_eq!(schedule.max_table_count(), 3);
    assert_eq!(schedule.match_count(), 12);
    assert_eq!(schedule.time_slots.len(), 6);
    for (i, slot) in schedule.time_slots.iter().enumerate() {
        let (start, duration) = slot.start_time_and_duration().unwrap();
        assert_eq!(start, nine_am() + Duration::minutes(30 * i as i64));
        assert_eq!(duration, 30);
    }
    assert_well_formed(&schedule);
}

#[test]
fn group_positions_keep_their_table() {
    let groups = vec![
        group_with_rounds(vec![0, 1, 2, 3], 30),
        group_with_rounds(vec![4, 5, 6, 7], 30),
    ];
    let mut cats = vec![Category::with_groups("MS", groups, 30, 2)];
    build_schedule(&mut cats, 3, nine_am()).unwrap();

    let expected = [["T1", "T2"], ["T3", "T1"]];
    for (g, group) in cats[0].groups.iter().enumerate() {
        for (r, round) in group.rounds.iter().enumerate() {
            for (pos, m) in round.iter().enumerate() {
                assert_eq!(m.table, expected[g][pos]);
                assert_eq!(m.group_idx, Some(g));
                assert_eq!(m.round_idx, Some(r));
                assert_eq!(m.category_short_name, "MS");
                assert!(m.date_time.is_some());
            }
        }
    }
}

#[test]
fn entries_play_rounds_in_order() {
    let groups = vec![
        group_with_rounds(vec![0, 1, 2, 3, 4], 20),
        group_with_rounds(vec![5, 6, 7, 8, 9, 10], 20),
    ];
    let mut cats = vec![Category::with_groups("WS", groups, 20, 2)];
    let schedule = build_schedule(&mut cats, 4, nine_am()).unwrap();
    assert_well_formed(&schedule);

    for group in &cats[0].groups {
        for e in &group.entries_idx {
            let times: Vec<_> = group
                .rounds
                .iter()
                .flatten()
                .filter(|m| m.entry_indices().any(|x| x == *e))
                .map(|m| m.date_time.unwrap())
                .collect();
            assert!(times.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn knockout_never_backfills() {
    // 8 qualifiers -> rounds of 8, 4 and 2
    let groups: Vec<Group> = (0..4).map(|g| Group::new(vec![2 * g, 2 * g + 1])).collect();
    let mut cat = Category::with_groups("MD", groups, 40, 2);
    cat.knockout_rounds = generate_knockout_rounds(&cat.groups, 2).unwrap();
    let mut cats = vec![cat];
    let schedule = build_schedule(&mut cats, 3, nine_am()).unwrap();

    let sizes: Vec<Vec<usize>> = schedule
        .time_slots
        .iter()
        .map(|s| s.matches().map(|m| m.knockout_round.unwrap()).collect())
        .collect();
    assert_eq!(sizes, vec![vec![8, 8, 8], vec![8], vec![4, 4], vec![2]]);
    assert_eq!(schedule.time_slots[1].free_tables(), vec![1, 2]);

    let final_match = &cats[0].knockout_rounds[2].matches[0];
    assert_eq!(final_match.table, "T1");
    assert_eq!(final_match.duration_minutes, 40);
    assert_eq!(final_match.date_time, Some(nine_am() + Duration::minutes(120)));
    assert_eq!(final_match.entry_1, EntrySlot::Unfilled);
    assert_well_formed(&schedule);
}

#[test]
fn stages_chain_across_categories() {
    let mut ms = Category::with_groups("MS", vec![group_with_rounds(vec![0, 1], 30)], 30, 2);
    let mut ws = Category::with_groups("WS", vec![group_with_rounds(vec![0, 1], 20)], 20, 2);
    ms.knockout_rounds = generate_knockout_rounds(&ms.groups, 2).unwrap();
    ws.knockout_rounds = generate_knockout_rounds(&ws.groups, 2).unwrap();
    let mut cats = vec![ms, ws];

    let schedule = build_schedule(&mut cats, 2, nine_am()).unwrap();
    let starts: Vec<_> = schedule
        .time_slots
        .iter()
        .map(|s| s.start_time_and_duration().unwrap())
        .collect();
    let at = |m: i64| nine_am() + Duration::minutes(m);
    assert_eq!(
        starts,
        vec![(at(0), 30), (at(30), 20), (at(50), 30), (at(80), 20)]
    );
    assert_eq!(schedule.end_time(), at(100));
    assert_well_formed(&schedule);
}

#[test]
fn rescheduling_is_repeatable() {
    let groups = vec![
        group_with_rounds(vec![0, 1, 2, 3, 4, 5], 30),
        group_with_rounds(vec![6, 7, 8], 30),
    ];
    let cats = vec![Category::with_groups("XD", groups, 30, 2)];
    let mut first = cats.clone();
    let mut second = cats;
    assert_eq!(
        build_schedule(&mut first, 4, nine_am()).unwrap(),
        build_schedule(&mut second, 4, nine_am()).unwrap()
    );
}

#[test]
fn time_slot_helpers() {
    let mut slot = TimeSlot::new(3);
    assert!(slot.is_empty());
    assert!(!slot.is_full());
    assert_eq!(slot.start_time_and_duration(), None);

    let mut a = GameMatch::new(EntrySlot::Entry(0), EntrySlot::Entry(1), 30);
    a.date_time = Some(nine_am() + Duration::minutes(10));
    let mut b = GameMatch::new(EntrySlot::Entry(2), EntrySlot::Entry(3), 45);
    b.date_time = Some(nine_am());
    slot.tables[0] = Some(a);
    slot.tables[2] = Some(b);

    assert_eq!(slot.free_tables(), vec![1]);
    assert!(slot.is_table_free(1));
    assert!(!slot.is_table_free(2));
    assert!(!slot.is_table_free(3));
    assert_eq!(slot.start_time_and_duration(), Some((nine_am(), 45)));
    assert_eq!(slot.end_time(), Some(nine_am() + Duration::minutes(45)));
    assert!(slot.has_different_start_time());
    assert!(slot.has_different_duration());
}
