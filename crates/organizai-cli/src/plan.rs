//! Plan file: the schedule request kept as JSON between invocations.

use std::path::Path;

use organizai_core::{Config, ScheduleRequest};
use tracing::debug;

/// Load the plan, or start an empty one using the configured strategy.
pub fn load(path: &Path) -> Result<ScheduleRequest, Box<dyn std::error::Error>> {
    if !path.exists() {
        debug!(path = %path.display(), "no plan file yet; starting empty");
        let config = Config::load_or_default();
        return Ok(ScheduleRequest {
            strategy: config.planner.default_strategy,
            ..ScheduleRequest::default()
        });
    }
    let content = std::fs::read_to_string(path)?;
    let plan = serde_json::from_str(&content)
        .map_err(|e| format!("invalid plan file {}: {e}", path.display()))?;
    Ok(plan)
}

pub fn save(path: &Path, plan: &ScheduleRequest) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}
