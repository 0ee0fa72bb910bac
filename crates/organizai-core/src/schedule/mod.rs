//! Schedule request and response types.
//!
//! The schedule service receives tasks, availability and a strategy, and
//! answers with an ordered list of allocated blocks. How it allocates is not
//! this crate's concern; this module only shapes the payloads.

mod client;

pub use client::ScheduleClient;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::availability::{Day, Interval};
use crate::error::ValidationError;
use crate::strategy::Strategy;
use crate::task::{Priority, Task};

/// Body of `POST /generate-schedule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub availability: Vec<Interval>,
    #[serde(default)]
    pub strategy: Strategy,
}

impl ScheduleRequest {
    pub fn new(tasks: Vec<Task>, availability: Vec<Interval>, strategy: Strategy) -> Self {
        Self {
            tasks,
            availability,
            strategy,
        }
    }

    /// A request needs at least one task and one availability block.
    pub fn readiness(&self) -> Result<(), ValidationError> {
        let message = match (self.tasks.is_empty(), self.availability.is_empty()) {
            (false, false) => return Ok(()),
            (true, true) => "add at least one task and one availability block",
            (true, false) => "add at least one task",
            (false, true) => "add at least one availability block",
        };
        Err(ValidationError::EmptyCollection(message.into()))
    }

    /// One-line summary of what will be sent.
    pub fn describe(&self) -> String {
        format!(
            "{} task(s), {} availability block(s), strategy '{}'",
            self.tasks.len(),
            self.availability.len(),
            self.strategy.name()
        )
    }
}

/// Body returned by the schedule service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub schedule: Vec<ScheduleBlock>,
}

/// A block of time the service allocated to a task.
///
/// Times are free `HH:MM` values; the service is not bound to the
/// half-hour lattice of the availability grid. An `"24:00"` end, as sent for
/// availability reaching midnight, is held as [`END_OF_DAY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    #[serde(deserialize_with = "lenient_day")]
    pub day: Day,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub task_name: String,
    pub task_id: String,
    #[serde(deserialize_with = "lenient_priority")]
    pub priority: Priority,
}

/// `"24:00"` on the wire. `NaiveTime` has no midnight-at-end, so the last
/// second of the day stands in for it and is written back as `"24:00"`.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => panic!("23:59:59 is a valid time"),
};

impl ScheduleBlock {
    pub fn start_label(&self) -> String {
        hhmm::format(&self.start_time)
    }

    pub fn end_label(&self) -> String {
        hhmm::format(&self.end_time)
    }
}

/// Group blocks per weekday, Monday first, each day ordered by start time.
/// Days without blocks are included with an empty list.
pub fn group_by_day(blocks: &[ScheduleBlock]) -> Vec<(Day, Vec<ScheduleBlock>)> {
    Day::ALL
        .into_iter()
        .map(|day| {
            let mut day_blocks: Vec<_> = blocks.iter().filter(|b| b.day == day).cloned().collect();
            day_blocks.sort_by_key(|b| b.start_time);
            (day, day_blocks)
        })
        .collect()
}

/// Accept wire tokens as well as accented display names (`"miércoles"`).
fn lenient_day<'de, D>(deserializer: D) -> Result<Day, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// Accept any casing and the English names (`"Alta"`, `"high"`).
fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

mod hhmm {
    use super::*;

    const FORMAT: &str = "%H:%M";
    const MIDNIGHT_END: &str = "24:00";

    pub fn format(time: &NaiveTime) -> String {
        if *time == END_OF_DAY {
            MIDNIGHT_END.to_string()
        } else {
            time.format(FORMAT).to_string()
        }
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim() == MIDNIGHT_END {
            return Ok(END_OF_DAY);
        }
        NaiveTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}
