use crate::{Budget, Catalog, ConfigurationError, OptimizeError, Portfolio, PortfolioOptimizer};
use tracing::{Level, event};

mod subsets;
pub use subsets::Subsets;

/// Configuration for [`ExhaustiveSolver`]
#[derive(Clone, Debug, PartialEq)]
pub struct ExhaustiveSettings {
    /// Refuse catalogs with more assets than this. `None` disables the check.
    pub max_assets: Option<usize>,
}

impl ExhaustiveSettings {
    /// Beyond this many assets the 2^n enumeration stops being practical
    pub const PRACTICAL_LIMIT: usize = 24;
}

impl Default for ExhaustiveSettings {
    fn default() -> Self {
        Self {
            max_assets: Some(Self::PRACTICAL_LIMIT),
        }
    }
}

/// Finds the optimum by evaluating every non-empty subset of the catalog.
///
/// Runs in O(2^n · n) time and O(n) memory. This is the reference against
/// which the production solver is checked, and is only suitable for small
/// catalogs.
///
/// Subsets are visited by increasing size, then in catalog order (see
/// [`Subsets`]), and replace the incumbent only when strictly more
/// profitable. The empty portfolio is the initial incumbent, so ties are won
/// by the first subset encountered and a zero-profit purchase never beats
/// buying nothing.
#[derive(Clone, Debug, Default)]
pub struct ExhaustiveSolver(ExhaustiveSettings);

impl PortfolioOptimizer for ExhaustiveSolver {
    type Settings = ExhaustiveSettings;

    fn new(settings: Self::Settings) -> Self {
        Self(settings)
    }

    fn find_best(
        &self,
        catalog: &Catalog,
        budget: Budget,
    ) -> Result<Option<Portfolio>, OptimizeError> {
        catalog.validate()?;

        if let Some(limit) = self.0.max_assets {
            if catalog.len() > limit {
                return Err(ConfigurationError::TooManyAssets {
                    count: catalog.len(),
                    limit,
                }
                .into());
            }
        }

        let assets = catalog.assets();
        let mut subsets = Subsets::new(assets.len());

        let mut best_profit = 0.0;
        let mut best: Option<Vec<usize>> = None;

        while let Some(subset) = subsets.advance() {
            let (cost, profit) = subset.iter().fold((0.0, 0.0), |(cost, profit), &i| {
                (cost + assets[i].price(), profit + assets[i].profit())
            });

            if !budget.admits(cost) {
                continue;
            }

            if profit > best_profit {
                event!(Level::TRACE, ?subset, cost, profit, "new incumbent");
                best_profit = profit;
                best = Some(subset.to_vec());
            }
        }

        event!(
            Level::DEBUG,
            assets = assets.len(),
            subsets = %subsets.total(),
            budget = budget.amount(),
            profit = best_profit,
            "exhaustive search complete"
        );

        Ok(best.map(|selection| Portfolio::from_selection(catalog, selection)))
    }
}
