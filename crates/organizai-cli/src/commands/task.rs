//! Task management commands for CLI.

use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use organizai_core::{Config, Priority};

use crate::plan;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the plan
    Add {
        /// Task name
        name: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Duration in minutes (default from config)
        #[arg(long)]
        duration: Option<i64>,
        /// Priority: alta, media or baja (default from config)
        #[arg(long)]
        priority: Option<Priority>,
        /// Current course average, 1.0-7.0 (default from config)
        #[arg(long)]
        grade: Option<f64>,
    },
    /// List tasks
    List {
        /// Print the raw task list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a task by id
    Remove {
        /// Task ID
        id: String,
    },
}

pub fn run(plan_path: &Path, action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = plan::load(plan_path)?;

    match action {
        TaskAction::Add {
            name,
            due,
            duration,
            priority,
            grade,
        } => {
            let config = Config::load_or_default();
            let mut draft = config.task_draft(name);
            draft.due_date = due;
            if let Some(duration) = duration {
                draft.duration = duration;
            }
            if let Some(priority) = priority {
                draft.priority = priority;
            }
            if let Some(grade) = grade {
                draft.actual_grade = grade;
            }

            let task = draft.into_task(Local::now().date_naive())?;
            println!("Task created: {}", task.id);
            plan.tasks.push(task);
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&plan.tasks)?);
            } else if plan.tasks.is_empty() {
                println!("No tasks.");
            } else {
                for task in &plan.tasks {
                    println!(
                        "{}  {} ({} min, due {}, prioridad {}, nota {})",
                        task.id,
                        task.name,
                        task.duration,
                        task.due_date,
                        task.priority.label(),
                        task.actual_grade
                    );
                }
            }
            return Ok(());
        }
        TaskAction::Remove { id } => {
            let before = plan.tasks.len();
            plan.tasks.retain(|task| task.id != id);
            if plan.tasks.len() == before {
                return Err(format!("task not found: {id}").into());
            }
            println!("Task removed: {id}");
        }
    }

    plan::save(plan_path, &plan)
}
