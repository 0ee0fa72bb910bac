//! Schedule commands: inspect the outgoing payload and call the service.

use std::path::Path;
use std::time::Duration;

use clap::Subcommand;
use organizai_core::{group_by_day, Config, ScheduleClient};

use crate::plan;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Print the request payload without sending it
    Request,
    /// Send the plan to the schedule service and print the result
    Generate {
        /// Override the configured service URL
        #[arg(long)]
        base_url: Option<String>,
        /// Print the returned blocks as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(plan_path: &Path, action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let plan = plan::load(plan_path)?;

    match action {
        ScheduleAction::Request => {
            if let Err(e) = plan.readiness() {
                eprintln!("warning: {e}");
            }
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        ScheduleAction::Generate { base_url, json } => {
            let config = Config::load_or_default();
            let client = match base_url {
                Some(url) => {
                    ScheduleClient::new(&url, Duration::from_secs(config.api.timeout_secs))?
                }
                None => ScheduleClient::from_config(&config.api)?,
            };

            let runtime = tokio::runtime::Runtime::new()?;
            let blocks = runtime.block_on(client.generate(&plan))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
                return Ok(());
            }
            if blocks.is_empty() {
                println!("The service returned an empty schedule.");
                return Ok(());
            }
            for (day, day_blocks) in group_by_day(&blocks) {
                if day_blocks.is_empty() {
                    continue;
                }
                println!("{}", day.label());
                for block in day_blocks {
                    println!(
                        "  {}-{}  {} [{}]",
                        block.start_label(),
                        block.end_label(),
                        block.task_name,
                        block.priority.label()
                    );
                }
            }
        }
    }
    Ok(())
}
