//! Availability blocks: half-open runs of slots on one day.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use uuid::Uuid;

use super::slot::{Day, TimeOfDay};
use crate::error::ValidationError;

/// One availability block `[start_time, end_time)` on `day`.
///
/// Serialized as `{ "id", "day", "startTime", "endTime" }`. Blocks are never
/// edited in place; a changed range is a removal plus a new block with a new id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IntervalRecord")]
pub struct Interval {
    pub id: String,
    pub day: Day,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl Interval {
    /// Create a block with a freshly generated id.
    ///
    /// # Panics
    ///
    /// Panics if `start >= end`; callers validate ranges first.
    pub fn new(day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), day, start, end)
    }

    /// # Panics
    ///
    /// Panics if `start >= end`.
    pub fn with_id(id: impl Into<String>, day: Day, start: TimeOfDay, end: TimeOfDay) -> Self {
        assert!(start < end, "empty interval {start}-{end} on {day}");
        Self {
            id: id.into(),
            day,
            start_time: start,
            end_time: end,
        }
    }

    /// Build from slot boundaries (`0..=48`).
    pub fn from_slots(day: Day, start_slot: usize, end_slot: usize) -> Self {
        Self::new(
            day,
            TimeOfDay::from_boundary(start_slot),
            TimeOfDay::from_boundary(end_slot),
        )
    }

    pub fn start_slot(&self) -> usize {
        self.start_time.boundary()
    }

    pub fn end_slot(&self) -> usize {
        self.end_time.boundary()
    }

    /// Covered cell indices.
    pub fn slots(&self) -> Range<usize> {
        self.start_slot()..self.end_slot()
    }

    pub fn contains_slot(&self, day: Day, slot: usize) -> bool {
        self.day == day && self.slots().contains(&slot)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_time.minutes() - self.start_time.minutes()
    }

    /// Half-open intersection test against another range on `day`.
    /// Touching ranges do not intersect.
    pub fn intersects(&self, day: Day, start: TimeOfDay, end: TimeOfDay) -> bool {
        self.day == day && start < self.end_time && self.start_time < end
    }

    /// `(day, start, end)` identity, ignoring the id.
    pub fn range_key(&self) -> (Day, TimeOfDay, TimeOfDay) {
        (self.day, self.start_time, self.end_time)
    }
}

/// Unchecked wire shape, validated on conversion.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalRecord {
    id: String,
    day: Day,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

impl TryFrom<IntervalRecord> for Interval {
    type Error = ValidationError;

    fn try_from(r: IntervalRecord) -> Result<Self, Self::Error> {
        if r.start_time >= r.end_time {
            return Err(ValidationError::InvalidValue {
                field: "endTime".into(),
                message: format!(
                    "block {} ends at {} which is not after its start {}",
                    r.id, r.end_time, r.start_time
                ),
            });
        }
        Ok(Self {
            id: r.id,
            day: r.day,
            start_time: r.start_time,
            end_time: r.end_time,
        })
    }
}

/// Sort blocks into canonical day-then-start order.
pub fn sort_canonical(intervals: &mut [Interval]) {
    intervals.sort_by_key(|i| (i.day, i.start_time, i.end_time));
}
