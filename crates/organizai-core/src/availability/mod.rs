//! Weekly availability: the interval model, the overlap validator and the
//! drag-selection state machine that edits it through the grid view.

mod drag;
mod grid;
mod interval;
mod model;
mod release;
mod slot;
mod validate;

pub use drag::{DragMode, DragSession, DragState};
pub use grid::{day_runs, expand_day, from_grid, from_grid_preserving, to_grid, DayRow, WeekGrid};
pub use interval::{sort_canonical, Interval};
pub use model::AvailabilityModel;
pub use release::ReleaseOrigin;
pub use slot::{Day, Slot, TimeOfDay, SLOTS_PER_DAY, SLOT_MINUTES};
pub use validate::validate_candidate;
