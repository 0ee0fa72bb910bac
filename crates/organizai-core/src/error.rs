//! Core error types for organizai-core.
//!
//! Recoverable rejections (overlapping blocks, bad task drafts) are plain
//! values the caller surfaces to the user. Coordinates outside the fixed
//! week lattice are caller bugs and are asserted on instead; only the
//! text-parsing constructors report them as [`ValidationError::OutOfBounds`].

use std::path::PathBuf;
use thiserror::Error;

use crate::availability::{Day, Interval, TimeOfDay};

/// Core error type for organizai-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Availability block rejected by the overlap validator
    #[error("Availability rejected: {0}")]
    Overlap(#[from] OverlapError),

    /// Task draft rejected
    #[error("Task rejected: {0}")]
    Task(#[from] TaskError),

    /// Remote schedule service failures
    #[error("Schedule service error: {message}")]
    Remote {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Rejection returned when a discretely entered block cannot be accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    /// Start is not strictly before end.
    #[error("start time {start} must be earlier than end time {end}")]
    InvalidRange { start: TimeOfDay, end: TimeOfDay },

    /// Candidate intersects an existing block on the same day.
    #[error(
        "{day} {start}-{end} overlaps existing block {} ({}-{})",
        .conflicting.id,
        .conflicting.start_time,
        .conflicting.end_time
    )]
    Overlap {
        day: Day,
        start: TimeOfDay,
        end: TimeOfDay,
        conflicting: Interval,
    },
}

/// Task draft validation errors, checked in declaration order.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TaskError {
    #[error("task name is required")]
    MissingName,

    #[error("due date is required")]
    MissingDueDate,

    #[error("due date {due_date} is before today ({today})")]
    DueDateInPast {
        due_date: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    #[error("duration must be greater than 0 minutes (got {0})")]
    NonPositiveDuration(i64),

    #[error("grade must be between 1.0 and 7.0 (got {0})")]
    GradeOutOfRange(f64),
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        CoreError::Remote {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
