use std::path::Path;

use clap::Subcommand;
use organizai_core::Strategy;

use crate::plan;

#[derive(Subcommand)]
pub enum StrategyAction {
    /// List available study strategies
    List,
    /// Describe a strategy (defaults to the plan's current one)
    Show {
        strategy: Option<Strategy>,
    },
    /// Select the strategy used for scheduling
    Set {
        strategy: Strategy,
    },
}

pub fn run(plan_path: &Path, action: StrategyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = plan::load(plan_path)?;

    match action {
        StrategyAction::List => {
            for strategy in Strategy::ALL {
                let marker = if strategy == plan.strategy { "*" } else { " " };
                println!(
                    "{marker} {:<10} {:<18} {}",
                    strategy.as_str(),
                    strategy.name(),
                    strategy.description()
                );
            }
        }
        StrategyAction::Show { strategy } => {
            let strategy = strategy.unwrap_or(plan.strategy);
            println!("{}", strategy.name());
            println!("{}", strategy.description());
            println!();
            println!("{}", strategy.how_it_works());
            println!();
            for benefit in strategy.benefits() {
                println!("- {benefit}");
            }
        }
        StrategyAction::Set { strategy } => {
            plan.strategy = strategy;
            plan::save(plan_path, &plan)?;
            println!("Strategy set: {}", strategy.name());
        }
    }
    Ok(())
}
