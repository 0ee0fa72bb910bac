//! # OrganizAI Core Library
//!
//! Business logic for OrganizAI, a weekly study planner. The user declares
//! recurring availability either by painting a half-hour grid or by typing
//! blocks into a form; both views edit one block list, which is then sent
//! with the user's tasks and study strategy to a remote schedule service.
//!
//! ## Architecture
//!
//! - **Availability**: the grid ↔ block conversions, the overlap validator
//!   and the drag-selection state machine, wrapped by [`AvailabilityModel`]
//! - **Tasks & strategies**: validated task drafts and the study strategies
//!   the service understands
//! - **Schedule**: request/response payloads and the [`ScheduleClient`]
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`AvailabilityModel`]: authoritative block list plus derived grid
//! - [`ScheduleRequest`]: the payload handed to the schedule service
//! - [`Config`]: application configuration management

pub mod availability;
pub mod error;
pub mod events;
pub mod schedule;
pub mod storage;
pub mod strategy;
pub mod task;

pub use availability::{
    from_grid, to_grid, validate_candidate, AvailabilityModel, Day, DragMode, DragSession,
    DragState, Interval, ReleaseOrigin, Slot, TimeOfDay, WeekGrid,
};
pub use error::{ConfigError, CoreError, OverlapError, TaskError, ValidationError};
pub use events::Event;
pub use schedule::{group_by_day, ScheduleBlock, ScheduleClient, ScheduleRequest, ScheduleResponse};
pub use storage::{ApiConfig, Config, PlannerConfig};
pub use strategy::Strategy;
pub use task::{Priority, Task, TaskDraft};
