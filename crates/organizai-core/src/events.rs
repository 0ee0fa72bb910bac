use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::{Day, DragMode, DragSession, Interval, ReleaseOrigin, Slot};

/// Every change to the availability model produces an Event.
/// Views re-render from them; the schedule request reads the committed list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    DragStarted {
        day: Day,
        slot: Slot,
        mode: DragMode,
        at: DateTime<Utc>,
    },
    /// The working grid was repainted for the inclusive slot range.
    DragUpdated {
        day: Day,
        from_slot: usize,
        to_slot: usize,
        mode: DragMode,
        at: DateTime<Utc>,
    },
    /// A gesture ended and the reduced block list was published.
    AvailabilityCommitted {
        session: DragSession,
        origin: Option<ReleaseOrigin>,
        intervals: Vec<Interval>,
        at: DateTime<Utc>,
    },
    BlockAdded {
        block: Interval,
        at: DateTime<Utc>,
    },
    BlockRemoved {
        block: Interval,
        at: DateTime<Utc>,
    },
    /// The whole list was replaced. A gesture in flight is dropped unpublished.
    AvailabilityReplaced {
        count: usize,
        discarded_drag: Option<DragSession>,
        at: DateTime<Utc>,
    },
}
