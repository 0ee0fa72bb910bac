//! Tasks handed to the schedule service alongside availability.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{TaskError, ValidationError};

/// Task priority. Wire tokens are `alta`, `media`, `baja`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    #[serde(rename = "alta")]
    High,
    #[default]
    #[serde(rename = "media")]
    Medium,
    #[serde(rename = "baja")]
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "alta",
            Priority::Medium => "media",
            Priority::Low => "baja",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Media",
            Priority::Low => "Baja",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alta" | "high" => Ok(Priority::High),
            "media" | "medium" => Ok(Priority::Medium),
            "baja" | "low" => Ok(Priority::Low),
            _ => Err(ValidationError::InvalidValue {
                field: "priority".into(),
                message: format!("unknown priority '{s}' (expected alta, media or baja)"),
            }),
        }
    }
}

/// Lowest and highest grade on the 1.0–7.0 scale.
pub const GRADE_RANGE: std::ops::RangeInclusive<f64> = 1.0..=7.0;

/// A piece of coursework to be scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    /// Duration in minutes.
    pub duration: u32,
    pub due_date: NaiveDate,
    pub priority: Priority,
    /// Current course average, 1.0–7.0.
    pub actual_grade: f64,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated task form input.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub name: String,
    pub duration: i64,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub actual_grade: f64,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration: 60,
            due_date: None,
            priority: Priority::Medium,
            actual_grade: 4.0,
        }
    }
}

impl TaskDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Validate the draft and assign an id.
    ///
    /// Checks run in order: name, due date presence, due date not before
    /// `today`, duration, grade.
    pub fn into_task(self, today: NaiveDate) -> Result<Task, TaskError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(TaskError::MissingName);
        }
        let due_date = self.due_date.ok_or(TaskError::MissingDueDate)?;
        if due_date < today {
            return Err(TaskError::DueDateInPast { due_date, today });
        }
        if self.duration <= 0 {
            return Err(TaskError::NonPositiveDuration(self.duration));
        }
        if !self.actual_grade.is_finite() || !GRADE_RANGE.contains(&self.actual_grade) {
            return Err(TaskError::GradeOutOfRange(self.actual_grade));
        }

        Ok(Task {
            id: Uuid::new_v4().to_string(),
            name,
            duration: u32::try_from(self.duration).unwrap_or(u32::MAX),
            due_date,
            priority: self.priority,
            actual_grade: self.actual_grade,
            created_at: Utc::now(),
        })
    }
}
