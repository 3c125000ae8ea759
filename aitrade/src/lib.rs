use ait_solver::{Budget, Catalog, io::Problem};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, event};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

pub mod config;
pub mod loader;

use config::AppConfig;
use loader::CatalogLoader;

// The top-level arguments: an optional configuration file and the subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// A TOML configuration file, layered between the defaults and AIT_* environment variables
    #[arg(short, long, global = true, env = "AIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Solve {
                io,
                algo,
                budget,
                format,
            } => {
                let (catalog, budget) = read_problem(&io, budget, &config)?;
                let outcome = solve(algo, &catalog, budget, &config.solver)?;
                format.write(io.write()?, &outcome)?;
            }
            Commands::Compare { io, budget } => {
                let (catalog, budget) = read_problem(&io, budget, &config)?;
                let comparison = compare(&catalog, budget, &config.solver)?;
                write_comparison(io.write()?, &comparison)?;

                if !comparison.agree() {
                    return Err(CliError::Disagreement {
                        exhaustive: comparison.exhaustive.total_profit(),
                        knapsack: comparison.knapsack.total_profit(),
                    }
                    .into());
                }
            }
        }

        Ok(())
    }
}

/// Read the catalog and settle on a budget.
///
/// The budget flag wins over a budget embedded in a JSON problem, which wins
/// over the configured one.
fn read_problem(
    io: &IOArgs,
    flag: Option<f64>,
    config: &AppConfig,
) -> anyhow::Result<(Catalog, Budget)> {
    let format = io.input_format();
    event!(Level::DEBUG, ?format, "reading catalog");

    let (catalog, embedded) = match format {
        InputFormat::Json => {
            let problem = serde_json::from_reader::<_, Problem>(io.read()?)?;
            (problem.assets, problem.budget)
        }
        InputFormat::Csv => {
            let loader =
                CatalogLoader::new(config.loader.profit_mode, &config.loader.delimiter)?;
            let (catalog, _) = loader.load(io.read()?)?;
            (catalog, None)
        }
    };

    let budget = match (flag, embedded) {
        (Some(amount), _) => Budget::new(amount)?,
        (None, Some(budget)) => budget,
        (None, None) => config.solver.budget()?,
    };

    Ok((catalog, budget))
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("optimizers disagree: exhaustive found {exhaustive}, knapsack found {knapsack}")]
    Disagreement { exhaustive: f64, knapsack: f64 },
}
