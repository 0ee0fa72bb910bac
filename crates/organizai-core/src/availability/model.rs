//! Availability model: the authoritative block list plus its derived grid.
//!
//! The block list is the only source of truth. The grid is rebuilt from it
//! after every list change and only diverges from it while a drag session
//! is painting; the session is reconciled back into the list on commit.
//!
//! ## Usage
//!
//! ```ignore
//! let mut model = AvailabilityModel::new();
//! model.begin_drag(Day::Monday, Slot::new(16));
//! model.continue_drag(Day::Monday, Slot::new(19));
//! model.end_drag(); // Some(Event::AvailabilityCommitted { .. })
//! ```

use chrono::Utc;
use tracing::{debug, warn};

use super::drag::{DragSession, DragState};
use super::grid::{from_grid_preserving, to_grid, WeekGrid};
use super::interval::{sort_canonical, Interval};
use super::release::{ReleaseGuard, ReleaseOrigin};
use super::slot::{Day, Slot, TimeOfDay};
use super::validate::validate_candidate;
use crate::error::OverlapError;
use crate::events::Event;

/// Single-writer availability state for one user session.
#[derive(Debug, Default)]
pub struct AvailabilityModel {
    intervals: Vec<Interval>,
    grid: WeekGrid,
    drag: DragState,
    release: ReleaseGuard,
}

impl AvailabilityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an existing block list, e.g. from a plan file.
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        let mut model = Self::new();
        model.replace_list(intervals);
        model
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The canonical block list, in day-then-start order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The grid view, including any uncommitted drag paint.
    pub fn grid(&self) -> &WeekGrid {
        &self.grid
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // ── List commands ────────────────────────────────────────────────

    /// Bulk replace the block list and rebuild the grid.
    pub fn set_intervals(&mut self, intervals: Vec<Interval>) -> Event {
        let discarded_drag = self.drag.finish();
        if let Some(session) = discarded_drag {
            self.release.unsubscribe();
            warn!(?session, "block list replaced during a drag; discarding gesture");
        }
        self.replace_list(intervals);
        Event::AvailabilityReplaced {
            count: self.intervals.len(),
            discarded_drag,
            at: Utc::now(),
        }
    }

    /// Validate and append a block entered through the form.
    ///
    /// The new block keeps its own identity even when it touches a
    /// neighbour; only a later grid commit merges adjacent blocks.
    pub fn add_block(
        &mut self,
        day: Day,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Event, OverlapError> {
        validate_candidate(day, start, end, &self.intervals)?;

        let block = Interval::new(day, start, end);
        debug!(id = %block.id, %day, %start, %end, "availability block added");

        let mut next = self.intervals.clone();
        next.push(block.clone());
        self.set_intervals(next);

        Ok(Event::BlockAdded {
            block,
            at: Utc::now(),
        })
    }

    /// Remove a block by id.
    pub fn remove_block(&mut self, id: &str) -> Option<Event> {
        let position = self.intervals.iter().position(|b| b.id == id)?;

        let mut next = self.intervals.clone();
        let block = next.remove(position);
        debug!(id = %block.id, "availability block removed");
        self.set_intervals(next);

        Some(Event::BlockRemoved {
            block,
            at: Utc::now(),
        })
    }

    // ── Drag commands ────────────────────────────────────────────────

    /// Pointer pressed on `(day, slot)`.
    pub fn begin_drag(&mut self, day: Day, slot: Slot) -> Event {
        if self.drag.is_dragging() {
            // A release was missed; publish what was painted before starting over.
            warn!("drag started while another was active; committing the previous one");
            self.commit(None);
        }

        let session = self.drag.begin(&mut self.grid, day, slot);
        self.release.subscribe();

        Event::DragStarted {
            day,
            slot,
            mode: session.mode,
            at: Utc::now(),
        }
    }

    /// Pointer entered `(day, slot)`. Cells on other days than the anchor
    /// day are ignored.
    pub fn continue_drag(&mut self, day: Day, slot: Slot) -> Option<Event> {
        let mode = self.drag.session()?.mode;
        let range = self.drag.extend(&mut self.grid, &self.intervals, day, slot)?;
        Some(Event::DragUpdated {
            day,
            from_slot: *range.start(),
            to_slot: *range.end(),
            mode,
            at: Utc::now(),
        })
    }

    /// Pointer released over the grid.
    pub fn end_drag(&mut self) -> Option<Event> {
        self.pointer_released(ReleaseOrigin::Grid)
    }

    /// A pointer release observed anywhere. Commits the active gesture
    /// whatever the origin; a no-op when no gesture is active.
    pub fn pointer_released(&mut self, origin: ReleaseOrigin) -> Option<Event> {
        self.release.release(origin)?;
        self.commit(Some(origin))
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn commit(&mut self, origin: Option<ReleaseOrigin>) -> Option<Event> {
        let session: DragSession = self.drag.finish()?;
        self.release.unsubscribe();

        let intervals = from_grid_preserving(&self.grid, &self.intervals);
        debug!(
            ?session,
            ?origin,
            blocks = intervals.len(),
            "drag committed"
        );
        self.intervals = intervals;

        Some(Event::AvailabilityCommitted {
            session,
            origin,
            intervals: self.intervals.clone(),
            at: Utc::now(),
        })
    }

    fn replace_list(&mut self, mut intervals: Vec<Interval>) {
        sort_canonical(&mut intervals);
        self.grid = to_grid(&intervals);
        self.intervals = intervals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn drag_select_and_commit() {
        let mut model = AvailabilityModel::new();
        model.begin_drag(Day::Monday, Slot::new(16));
        model.continue_drag(Day::Monday, Slot::new(19));
        assert!(model.intervals().is_empty(), "nothing published mid-gesture");

        let event = model.end_drag().expect("commit event");
        assert!(matches!(event, Event::AvailabilityCommitted { .. }));
        assert!(!model.is_dragging());

        let blocks = model.intervals();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].day, Day::Monday);
        assert_eq!(blocks[0].start_time, t("08:00"));
        assert_eq!(blocks[0].end_time, t("10:00"));
    }

    #[test]
    fn release_outside_grid_commits() {
        let mut model = AvailabilityModel::new();
        model.begin_drag(Day::Wednesday, Slot::new(2));
        let event = model.pointer_released(ReleaseOrigin::Window);
        match event {
            Some(Event::AvailabilityCommitted { origin, .. }) => {
                assert_eq!(origin, Some(ReleaseOrigin::Window))
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(model.intervals().len(), 1);
        assert!(model.pointer_released(ReleaseOrigin::Window).is_none());
    }

    #[test]
    fn release_without_drag_is_ignored() {
        let mut model = AvailabilityModel::new();
        assert!(model.end_drag().is_none());
        assert!(model.pointer_released(ReleaseOrigin::LeftWindow).is_none());
    }

    #[test]
    fn continue_without_drag_is_ignored() {
        let mut model = AvailabilityModel::new();
        assert!(model.continue_drag(Day::Monday, Slot::new(4)).is_none());
        assert!(model.grid().is_empty());
    }

    #[test]
    fn deselect_drag_splits_block() {
        let mut model =
            AvailabilityModel::from_intervals(vec![Interval::from_slots(Day::Thursday, 10, 20)]);
        model.begin_drag(Day::Thursday, Slot::new(14));
        model.continue_drag(Day::Thursday, Slot::new(15));
        model.end_drag();

        let keys: Vec<_> = model
            .intervals()
            .iter()
            .map(|b| (b.start_slot(), b.end_slot()))
            .collect();
        assert_eq!(keys, vec![(10, 14), (16, 20)]);
    }

    #[test]
    fn commit_preserves_ids_of_untouched_blocks() {
        let kept = Interval::from_slots(Day::Friday, 20, 24);
        let mut model = AvailabilityModel::from_intervals(vec![kept.clone()]);
        model.begin_drag(Day::Monday, Slot::new(0));
        model.end_drag();

        let friday = model
            .intervals()
            .iter()
            .find(|b| b.day == Day::Friday)
            .unwrap();
        assert_eq!(friday.id, kept.id);
    }

    #[test]
    fn form_blocks_stay_separate_until_a_grid_commit() {
        let mut model = AvailabilityModel::new();
        model.add_block(Day::Tuesday, t("09:00"), t("10:00")).unwrap();
        model.add_block(Day::Tuesday, t("10:00"), t("11:00")).unwrap();
        assert_eq!(model.intervals().len(), 2);

        model.begin_drag(Day::Saturday, Slot::new(0));
        model.end_drag();
        let tuesday: Vec<_> = model
            .intervals()
            .iter()
            .filter(|b| b.day == Day::Tuesday)
            .collect();
        assert_eq!(tuesday.len(), 1);
        assert_eq!(tuesday[0].start_time, t("09:00"));
        assert_eq!(tuesday[0].end_time, t("11:00"));
    }

    #[test]
    fn add_block_rejects_overlap_and_keeps_list() {
        let mut model = AvailabilityModel::new();
        model.add_block(Day::Tuesday, t("09:00"), t("10:00")).unwrap();
        let err = model
            .add_block(Day::Tuesday, t("09:30"), t("11:00"))
            .unwrap_err();
        assert!(matches!(err, OverlapError::Overlap { .. }));
        assert_eq!(model.intervals().len(), 1);
    }

    #[test]
    fn add_block_resyncs_grid() {
        let mut model = AvailabilityModel::new();
        model.add_block(Day::Sunday, t("23:00"), t("24:00")).unwrap();
        assert!(model.grid().get(Day::Sunday, Slot::new(46)));
        assert!(model.grid().get(Day::Sunday, Slot::new(47)));
        assert_eq!(model.grid().selected_count(), 2);
    }

    #[test]
    fn remove_block_clears_cells() {
        let mut model = AvailabilityModel::new();
        let id = match model.add_block(Day::Monday, t("08:00"), t("09:00")).unwrap() {
            Event::BlockAdded { block, .. } => block.id,
            other => panic!("unexpected {other:?}"),
        };
        assert!(model.remove_block(&id).is_some());
        assert!(model.intervals().is_empty());
        assert!(model.grid().is_empty());
        assert!(model.remove_block(&id).is_none());
    }

    #[test]
    fn set_intervals_discards_active_drag() {
        let mut model = AvailabilityModel::new();
        model.begin_drag(Day::Monday, Slot::new(3));
        let event = model.set_intervals(vec![Interval::from_slots(Day::Tuesday, 0, 2)]);
        match event {
            Event::AvailabilityReplaced {
                count,
                discarded_drag,
                ..
            } => {
                assert_eq!(count, 1);
                assert!(discarded_drag.is_some());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(!model.is_dragging());
        assert!(!model.grid().get(Day::Monday, Slot::new(3)));
        assert!(model.end_drag().is_none());
    }

    #[test]
    fn begin_while_dragging_commits_previous_gesture() {
        let mut model = AvailabilityModel::new();
        model.begin_drag(Day::Monday, Slot::new(3));
        model.begin_drag(Day::Tuesday, Slot::new(7));
        assert_eq!(model.intervals().len(), 1);
        assert_eq!(model.intervals()[0].day, Day::Monday);

        model.end_drag();
        assert_eq!(model.intervals().len(), 2);
    }
}
