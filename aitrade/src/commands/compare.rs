use super::Algorithm;
use crate::config::SolverConfig;
use ait_solver::{Budget, Catalog, OptimizeError, Portfolio};
use tracing::{Level, event};

/// The outcome of running both optimizers on the same problem
#[derive(Debug)]
pub struct Comparison {
    pub budget: Budget,
    pub exhaustive: Portfolio,
    pub knapsack: Portfolio,
    /// The largest profit difference still considered agreement (one minor unit)
    pub tolerance: f64,
}

impl Comparison {
    pub fn difference(&self) -> f64 {
        (self.exhaustive.total_profit() - self.knapsack.total_profit()).abs()
    }

    /// Whether both optimizers reached the same profit.
    ///
    /// The selected subsets are not compared, since different subsets may be
    /// equally optimal.
    pub fn agree(&self) -> bool {
        self.difference() <= self.tolerance
    }
}

pub fn compare(
    catalog: &Catalog,
    budget: Budget,
    config: &SolverConfig,
) -> Result<Comparison, OptimizeError> {
    let tolerance = config.knapsack()?.scale.tolerance();

    let exhaustive = Algorithm::Exhaustive
        .find_best(catalog, budget, config)?
        .unwrap_or_default();
    let knapsack = Algorithm::Knapsack
        .find_best(catalog, budget, config)?
        .unwrap_or_default();

    let comparison = Comparison {
        budget,
        exhaustive,
        knapsack,
        tolerance,
    };

    event!(
        Level::INFO,
        exhaustive = comparison.exhaustive.total_profit(),
        knapsack = comparison.knapsack.total_profit(),
        agree = comparison.agree(),
        "compared optimizers"
    );

    Ok(comparison)
}
