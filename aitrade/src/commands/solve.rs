use crate::config::SolverConfig;
use ait_solver::{
    Budget, Catalog, OptimizeError, Portfolio, PortfolioOptimizer as _,
    exhaustive::ExhaustiveSolver, knapsack::KnapsackSolver,
};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;
use tracing::{Level, event};

// This explicitly articulates the available optimizers for the `solve` subcommand
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Exhaustive search for small catalogs, the knapsack otherwise
    Auto,
    /// Enumerate every subset
    Exhaustive,
    /// Dynamic programming over minor currency units
    Knapsack,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (match self {
            Self::Auto => "auto",
            Self::Exhaustive => "exhaustive",
            Self::Knapsack => "knapsack",
        })
        .fmt(f)
    }
}

// Conveniently, we can use the same enum to handle the particulars of calling into
// the various optimizer implementations
impl Algorithm {
    /// Pick a concrete optimizer for a catalog of the given size
    pub fn resolve(self, assets: usize, config: &SolverConfig) -> Self {
        match self {
            Self::Auto if assets <= config.exhaustive_limit => Self::Exhaustive,
            Self::Auto => Self::Knapsack,
            other => other,
        }
    }

    pub fn find_best(
        self,
        catalog: &Catalog,
        budget: Budget,
        config: &SolverConfig,
    ) -> Result<Option<Portfolio>, OptimizeError> {
        match self.resolve(catalog.len(), config) {
            Self::Exhaustive => ExhaustiveSolver::new(config.exhaustive()).find_best(catalog, budget),
            Self::Knapsack | Self::Auto => {
                KnapsackSolver::new(config.knapsack()?).find_best(catalog, budget)
            }
        }
    }
}

/// The result of a `solve` run
#[derive(Debug)]
pub struct Outcome {
    /// The optimizer that actually ran
    pub algorithm: Algorithm,
    pub budget: Budget,
    /// The size of the catalog the portfolio was drawn from
    pub catalog_len: usize,
    /// The selection, empty when nothing improves on buying nothing
    pub portfolio: Portfolio,
}

impl Outcome {
    pub fn remaining(&self) -> f64 {
        (self.budget.amount() - self.portfolio.total_cost()).max(0.0)
    }
}

pub fn solve(
    algorithm: Algorithm,
    catalog: &Catalog,
    budget: Budget,
    config: &SolverConfig,
) -> Result<Outcome, OptimizeError> {
    let algorithm = algorithm.resolve(catalog.len(), config);
    event!(
        Level::INFO,
        %algorithm,
        assets = catalog.len(),
        budget = budget.amount(),
        "optimizing"
    );

    let portfolio = algorithm
        .find_best(catalog, budget, config)?
        .unwrap_or_default();

    Ok(Outcome {
        algorithm,
        budget,
        catalog_len: catalog.len(),
        portfolio,
    })
}
