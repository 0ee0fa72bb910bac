//! Overlap validation for blocks entered through the form.

use super::interval::Interval;
use super::slot::{Day, TimeOfDay};
use crate::error::OverlapError;

/// Check a candidate block against the existing list.
///
/// Rules, in order: the range must be non-empty, and it must not intersect
/// any block on the same day (touching is allowed). Accepted candidates are
/// not merged with their neighbours.
pub fn validate_candidate(
    day: Day,
    start: TimeOfDay,
    end: TimeOfDay,
    existing: &[Interval],
) -> Result<(), OverlapError> {
    if start >= end {
        return Err(OverlapError::InvalidRange { start, end });
    }

    if let Some(conflicting) = existing.iter().find(|b| b.intersects(day, start, end)) {
        return Err(OverlapError::Overlap {
            day,
            start,
            end,
            conflicting: conflicting.clone(),
        });
    }

    Ok(())
}
