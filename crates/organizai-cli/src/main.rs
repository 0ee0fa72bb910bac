use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod plan;

#[derive(Parser)]
#[command(name = "organizai-cli", version, about = "OrganizAI CLI")]
struct Cli {
    /// Plan file holding tasks, availability and strategy
    #[arg(long, global = true, default_value = "organizai-plan.json")]
    plan: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly availability blocks
    Availability {
        #[command(subcommand)]
        action: commands::availability::AvailabilityAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Study strategy selection
    Strategy {
        #[command(subcommand)]
        action: commands::strategy::StrategyAction,
    },
    /// Schedule generation
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ORGANIZAI_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Availability { action } => commands::availability::run(&cli.plan, action),
        Commands::Task { action } => commands::task::run(&cli.plan, action),
        Commands::Strategy { action } => commands::strategy::run(&cli.plan, action),
        Commands::Schedule { action } => commands::schedule::run(&cli.plan, action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
