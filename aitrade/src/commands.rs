use super::IOArgs;
use clap::Subcommand;

mod compare;
mod report;
mod solve;

pub use compare::{Comparison, compare};
pub use report::{ReportFormat, write_comparison};
pub use solve::{Algorithm, Outcome, solve};

#[derive(Subcommand)]
pub enum Commands {
    /// Select the most profitable affordable portfolio and report it
    Solve {
        #[command(flatten)]
        io: IOArgs,

        /// Request a specific optimizer
        #[arg(short, long, default_value = "auto")]
        algo: Algorithm,

        /// The budget ceiling (overrides the configuration and the input file)
        #[arg(short, long)]
        budget: Option<f64>,

        /// The report format
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,
    },

    /// Run both optimizers and check that they reach the same profit
    Compare {
        #[command(flatten)]
        io: IOArgs,

        /// The budget ceiling (overrides the configuration and the input file)
        #[arg(short, long)]
        budget: Option<f64>,
    },
}
