//! Drag-selection state machine for live grid edits.
//!
//! ## State Transitions
//!
//! ```text
//! Idle --begin--> Dragging --extend (same day)--> Dragging --finish--> Idle
//! ```
//!
//! The machine only paints the working grid. Turning the painted grid back
//! into blocks on `finish` is the owner's job (see `AvailabilityModel`).

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::grid::{expand_day, WeekGrid};
use super::interval::Interval;
use super::slot::{Day, Slot};

/// Whether a gesture paints cells available or clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    Select,
    Deselect,
}

impl DragMode {
    /// Mode for a gesture starting on a cell with the given state.
    pub fn for_anchor(anchor_was_set: bool) -> Self {
        if anchor_was_set {
            DragMode::Deselect
        } else {
            DragMode::Select
        }
    }

    /// Value painted into cells.
    pub fn paint(self) -> bool {
        self == DragMode::Select
    }
}

/// An in-progress gesture. The mode is fixed when the gesture starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub anchor_day: Day,
    pub anchor_slot: Slot,
    pub mode: DragMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// Start a gesture on `(day, slot)` and toggle the anchor cell.
    ///
    /// # Panics
    ///
    /// Panics if a gesture is already active; the owner must finish it first.
    pub fn begin(&mut self, grid: &mut WeekGrid, day: Day, slot: Slot) -> DragSession {
        assert!(
            !self.is_dragging(),
            "drag session started while another is active"
        );

        let mode = DragMode::for_anchor(grid.get(day, slot));
        grid.set(day, slot, mode.paint());

        let session = DragSession {
            anchor_day: day,
            anchor_slot: slot,
            mode,
        };
        *self = DragState::Dragging(session);
        session
    }

    /// Pointer entered `(day, slot)` during a gesture.
    ///
    /// Restores the anchor day from `committed` (the authoritative block list)
    /// and repaints the inclusive range between the anchor and `slot`, so a
    /// shrinking drag releases cells it painted earlier. Returns the painted
    /// range, or `None` when idle or when `day` is not the anchor day.
    pub fn extend(
        &self,
        grid: &mut WeekGrid,
        committed: &[Interval],
        day: Day,
        slot: Slot,
    ) -> Option<RangeInclusive<usize>> {
        let session = self.session()?;
        if day != session.anchor_day {
            return None;
        }

        let lo = session.anchor_slot.index().min(slot.index());
        let hi = session.anchor_slot.index().max(slot.index());

        let mut row = expand_day(committed, day);
        for cell in &mut row[lo..=hi] {
            *cell = session.mode.paint();
        }
        grid.set_row(day, row);

        Some(lo..=hi)
    }

    /// End the gesture, returning the session that was active.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }
}
