//! Integration tests for the availability model.
//!
//! Covers the grid ↔ block laws, overlap rules and drag gestures through the
//! public API only.

use organizai_core::availability::{day_runs, SLOTS_PER_DAY};
use organizai_core::{
    from_grid, to_grid, validate_candidate, AvailabilityModel, Day, Event, Interval,
    OverlapError, ReleaseOrigin, Slot, TimeOfDay, WeekGrid,
};
use proptest::prelude::*;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn keys(intervals: &[Interval]) -> Vec<(Day, usize, usize)> {
    let mut keys: Vec<_> = intervals
        .iter()
        .map(|b| (b.day, b.start_slot(), b.end_slot()))
        .collect();
    keys.sort();
    keys
}

fn arb_grid() -> impl Strategy<Value = WeekGrid> {
    prop::collection::vec(prop::collection::vec(any::<bool>(), SLOTS_PER_DAY), 7).prop_map(
        |rows| {
            let mut grid = WeekGrid::new();
            for (day, row) in Day::ALL.into_iter().zip(rows) {
                for (slot, value) in row.into_iter().enumerate() {
                    grid.set(day, Slot::new(slot), value);
                }
            }
            grid
        },
    )
}

proptest! {
    #[test]
    fn expansion_inverts_reduction(grid in arb_grid()) {
        prop_assert_eq!(to_grid(&from_grid(&grid)), grid);
    }

    #[test]
    fn canonical_lists_round_trip(grid in arb_grid()) {
        let list = from_grid(&grid);
        let again = from_grid(&to_grid(&list));
        prop_assert_eq!(keys(&again), keys(&list));
    }

    #[test]
    fn reduction_is_idempotent(grid in arb_grid()) {
        let once = from_grid(&to_grid(&from_grid(&grid)));
        let twice = from_grid(&to_grid(&once));
        prop_assert_eq!(keys(&twice), keys(&once));
    }

    #[test]
    fn reduced_blocks_are_maximal_and_disjoint(grid in arb_grid()) {
        let list = from_grid(&grid);
        for pair in list.windows(2) {
            if pair[0].day == pair[1].day {
                // strictly separated: neither overlapping nor touching
                prop_assert!(pair[0].end_slot() < pair[1].start_slot());
            }
        }
        for day in Day::ALL {
            let count = list.iter().filter(|b| b.day == day).count();
            prop_assert_eq!(count, day_runs(grid.row(day)).len());
        }
    }
}

#[test]
fn touching_ranges_merge_through_the_grid() {
    let list = vec![
        Interval::from_slots(Day::Monday, 2, 5),
        Interval::from_slots(Day::Monday, 5, 8),
    ];
    assert_eq!(keys(&from_grid(&to_grid(&list))), vec![(Day::Monday, 2, 8)]);
}

#[test]
fn overlap_rules() {
    let existing = vec![Interval::new(Day::Tuesday, t("09:00"), t("10:00"))];
    assert!(matches!(
        validate_candidate(Day::Tuesday, t("09:30"), t("11:00"), &existing),
        Err(OverlapError::Overlap { .. })
    ));
    assert!(validate_candidate(Day::Tuesday, t("10:00"), t("11:00"), &existing).is_ok());
}

#[test]
fn drag_shrink_restores_pre_drag_state() {
    let mut model = AvailabilityModel::new();
    model.begin_drag(Day::Monday, Slot::new(10));
    model.continue_drag(Day::Monday, Slot::new(14));
    for slot in 10..=14 {
        assert!(model.grid().get(Day::Monday, Slot::new(slot)));
    }

    model.continue_drag(Day::Monday, Slot::new(12));
    for slot in 10..=12 {
        assert!(model.grid().get(Day::Monday, Slot::new(slot)));
    }
    for slot in 13..=14 {
        assert!(!model.grid().get(Day::Monday, Slot::new(slot)));
    }
}

#[test]
fn cross_day_enter_changes_nothing() {
    let mut model = AvailabilityModel::new();
    model.begin_drag(Day::Monday, Slot::new(5));
    let before = model.grid().clone();

    assert!(model.continue_drag(Day::Tuesday, Slot::new(5)).is_none());
    assert_eq!(model.grid(), &before);
}

#[test]
fn end_to_end_drag_publishes_one_block() {
    let mut model = AvailabilityModel::new();
    model.begin_drag(Day::Monday, Slot::new(16));
    for slot in 17..=19 {
        model.continue_drag(Day::Monday, Slot::new(slot));
    }
    let event = model.end_drag();
    assert!(matches!(event, Some(Event::AvailabilityCommitted { .. })));

    let json = serde_json::to_value(model.intervals()).unwrap();
    let blocks = json.as_array().unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0]["day"], "lunes");
    assert_eq!(blocks[0]["startTime"], "08:00");
    assert_eq!(blocks[0]["endTime"], "10:00");
}

#[test]
fn release_anywhere_ends_the_session() {
    for origin in [ReleaseOrigin::Grid, ReleaseOrigin::Window, ReleaseOrigin::LeftWindow] {
        let mut model = AvailabilityModel::new();
        model.begin_drag(Day::Sunday, Slot::new(40));
        assert!(model.pointer_released(origin).is_some());
        assert!(!model.is_dragging());
        assert_eq!(model.intervals().len(), 1);
    }
}

#[test]
fn form_entry_then_grid_edit() {
    let mut model = AvailabilityModel::new();
    model.add_block(Day::Friday, t("14:00"), t("16:00")).unwrap();

    // Extend the Friday block by painting 16:00-17:00 on the grid.
    model.begin_drag(Day::Friday, t("16:00").slot().unwrap());
    model.continue_drag(Day::Friday, t("16:30").slot().unwrap());
    model.end_drag();

    assert_eq!(keys(model.intervals()), vec![(Day::Friday, 28, 34)]);
    assert_eq!(model.grid().selected_count(), 6);
}
