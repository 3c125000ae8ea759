use crate::{Budget, Catalog, OptimizeError, Portfolio, PortfolioOptimizer};
use serde::{Deserialize, Serialize};

/// A representation of a single optimization problem.
///
/// ```json
/// { "budget": 500, "assets": [{ "name": "A", "price": 100, "profit": 20 }] }
/// ```
///
/// The budget is validated on deserialization. When it is omitted, the caller
/// decides; [`Problem::solve`] falls back to the default of 500.
#[derive(Debug, Serialize, Deserialize)]
pub struct Problem {
    /// The ceiling on total purchase cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    /// The candidate assets
    pub assets: Catalog,
}

impl Problem {
    /// Solve the problem with the given optimizer
    pub fn solve<T: PortfolioOptimizer>(
        &self,
        optimizer: &T,
    ) -> Result<Option<Portfolio>, OptimizeError> {
        optimizer.find_best(&self.assets, self.budget.unwrap_or_default())
    }
}

/// A flattened view of a portfolio, suitable for reports and reference outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The names of the selected assets
    pub assets: Vec<String>,
    /// The sum of the selected prices
    pub total_cost: f64,
    /// The sum of the selected profits
    pub total_profit: f64,
}

impl From<&Portfolio> for Summary {
    fn from(value: &Portfolio) -> Self {
        Self {
            assets: value.names().map(str::to_owned).collect(),
            total_cost: value.total_cost(),
            total_profit: value.total_profit(),
        }
    }
}
