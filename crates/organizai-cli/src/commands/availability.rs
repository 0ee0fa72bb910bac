//! Availability commands: form entry and grid painting over the plan's blocks.

use std::path::Path;

use clap::Subcommand;
use organizai_core::availability::SLOTS_PER_DAY;
use organizai_core::{AvailabilityModel, Day, Slot, TimeOfDay};

use crate::plan;

#[derive(Subcommand)]
pub enum AvailabilityAction {
    /// List availability blocks
    List {
        /// Print the raw block list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a block through the form
    Add {
        /// Weekday (e.g. "lunes", "Miércoles")
        #[arg(long)]
        day: Day,
        /// Start time, HH:MM on the half hour
        #[arg(long)]
        start: TimeOfDay,
        /// End time, HH:MM on the half hour ("24:00" for end of day)
        #[arg(long)]
        end: TimeOfDay,
    },
    /// Remove a block by id
    Remove {
        /// Block ID
        id: String,
    },
    /// Paint a range of cells as a single drag gesture
    Drag {
        /// Weekday of the gesture
        #[arg(long)]
        day: Day,
        /// Cell the pointer is pressed on (its start time)
        #[arg(long)]
        from: TimeOfDay,
        /// Cell the pointer is released on (its start time)
        #[arg(long)]
        to: TimeOfDay,
    },
    /// Render the weekly grid
    Grid,
    /// Remove every block
    Clear,
}

pub fn run(plan_path: &Path, action: AvailabilityAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = plan::load(plan_path)?;
    let mut model = AvailabilityModel::from_intervals(std::mem::take(&mut plan.availability));

    match action {
        AvailabilityAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(model.intervals())?);
            } else if model.intervals().is_empty() {
                println!("No availability blocks.");
            } else {
                for block in model.intervals() {
                    println!(
                        "{:<10} {}-{}  {}",
                        block.day.label(),
                        block.start_time,
                        block.end_time,
                        block.id
                    );
                }
            }
            return Ok(());
        }
        AvailabilityAction::Add { day, start, end } => {
            model.add_block(day, start, end)?;
            println!("Block added: {} {start}-{end}", day.label());
        }
        AvailabilityAction::Remove { id } => {
            if model.remove_block(&id).is_none() {
                return Err(format!("block not found: {id}").into());
            }
            println!("Block removed: {id}");
        }
        AvailabilityAction::Drag { day, from, to } => {
            let from = cell(from)?;
            let to = cell(to)?;
            model.begin_drag(day, from);
            // Pointer enters every cell between press and release, like a real gesture.
            let path: Vec<usize> = if from.index() <= to.index() {
                (from.index()..=to.index()).collect()
            } else {
                (to.index()..=from.index()).rev().collect()
            };
            for index in path.into_iter().skip(1) {
                model.continue_drag(day, Slot::new(index));
            }
            model.end_drag();
            println!("{} blocks after drag", model.intervals().len());
        }
        AvailabilityAction::Grid => {
            print!("{}", render_grid(&model));
            return Ok(());
        }
        AvailabilityAction::Clear => {
            model.set_intervals(Vec::new());
            println!("Availability cleared");
        }
    }

    plan.availability = model.intervals().to_vec();
    plan::save(plan_path, &plan)
}

fn cell(time: TimeOfDay) -> Result<Slot, String> {
    time.slot()
        .ok_or_else(|| format!("{time} is not the start of a cell"))
}

fn render_grid(model: &AvailabilityModel) -> String {
    let mut out = String::new();
    for day in Day::ALL {
        out.push_str(&format!("{:<10}", day.label()));
        for slot in Slot::all() {
            if slot.index() % 2 == 0 {
                out.push(' ');
            }
            out.push(if model.grid().get(day, slot) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "{} of {} cells selected\n",
        model.grid().selected_count(),
        SLOTS_PER_DAY * Day::ALL.len()
    ));
    out
}
