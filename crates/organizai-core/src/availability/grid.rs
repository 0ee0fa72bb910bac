//! Boolean occupancy grid and its conversions to and from interval lists.
//!
//! The grid is a derived view. [`to_grid`] expands blocks into cells and
//! [`from_grid`] run-length encodes cells back into the unique minimal set
//! of maximal blocks, so `to_grid(&from_grid(&g)) == g` for every grid.

use std::collections::HashMap;

use super::interval::Interval;
use super::slot::{Day, Slot, TimeOfDay, SLOTS_PER_DAY};

/// One day's row of cells.
pub type DayRow = [bool; SLOTS_PER_DAY];

/// Week × slot occupancy, `true` meaning available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekGrid {
    cells: [DayRow; 7],
}

impl Default for WeekGrid {
    fn default() -> Self {
        Self {
            cells: [[false; SLOTS_PER_DAY]; 7],
        }
    }
}

impl WeekGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Day, slot: Slot) -> bool {
        self.cells[day.index()][slot.index()]
    }

    pub fn set(&mut self, day: Day, slot: Slot, value: bool) {
        self.cells[day.index()][slot.index()] = value;
    }

    pub fn row(&self, day: Day) -> &DayRow {
        &self.cells[day.index()]
    }

    pub fn set_row(&mut self, day: Day, row: DayRow) {
        self.cells[day.index()] = row;
    }

    /// Number of available cells across the week.
    pub fn selected_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c).count()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }
}

/// Maximal runs of `true` cells in a row as half-open `(start, end)` pairs.
pub fn day_runs(row: &DayRow) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;

    for (slot, &available) in row.iter().enumerate() {
        match (available, open) {
            (true, None) => open = Some(slot),
            (false, Some(start)) => {
                runs.push((start, slot));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push((start, SLOTS_PER_DAY));
    }

    runs
}

/// Expand the blocks of a single day into a row.
pub fn expand_day(intervals: &[Interval], day: Day) -> DayRow {
    let mut row = [false; SLOTS_PER_DAY];
    for block in intervals.iter().filter(|b| b.day == day) {
        for cell in &mut row[block.slots()] {
            *cell = true;
        }
    }
    row
}

/// Interval → grid expansion.
pub fn to_grid(intervals: &[Interval]) -> WeekGrid {
    let mut grid = WeekGrid::new();
    for day in Day::ALL {
        grid.set_row(day, expand_day(intervals, day));
    }
    grid
}

/// Grid → interval reduction. Every block gets a fresh id; output is in
/// day-then-start order.
pub fn from_grid(grid: &WeekGrid) -> Vec<Interval> {
    reduce(grid, |_| None)
}

/// Grid → interval reduction that keeps the id of any block in `previous`
/// whose `(day, start, end)` is reproduced exactly.
pub fn from_grid_preserving(grid: &WeekGrid, previous: &[Interval]) -> Vec<Interval> {
    let known: HashMap<_, &str> = previous
        .iter()
        .map(|b| (b.range_key(), b.id.as_str()))
        .collect();
    reduce(grid, |key| known.get(&key).map(|id| id.to_string()))
}

fn reduce<F>(grid: &WeekGrid, mut reuse_id: F) -> Vec<Interval>
where
    F: FnMut((Day, TimeOfDay, TimeOfDay)) -> Option<String>,
{
    let mut intervals = Vec::new();
    for day in Day::ALL {
        for (start, end) in day_runs(grid.row(day)) {
            let start = TimeOfDay::from_boundary(start);
            let end = TimeOfDay::from_boundary(end);
            let block = match reuse_id((day, start, end)) {
                Some(id) => Interval::with_id(id, day, start, end),
                None => Interval::new(day, start, end),
            };
            intervals.push(block);
        }
    }
    intervals
}
