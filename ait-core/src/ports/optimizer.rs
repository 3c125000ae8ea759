use crate::models::{Budget, Catalog, OptimizeError, Portfolio};

/// Interface for algorithms that select the most profitable affordable portfolio.
///
/// Implementations are interchangeable strategies over the same contract and
/// must agree on the optimal total profit for any catalog they can both
/// handle. They need not agree on which subset is returned when several
/// subsets reach that profit.
///
/// Optimizers are pure: they read the catalog and budget, touch no shared
/// state, and return a freshly built portfolio.
pub trait PortfolioOptimizer {
    /// The configuration type for this optimizer
    type Settings;

    /// Create a new instance with the provided settings
    fn new(settings: Self::Settings) -> Self;

    /// Find the subset of the catalog with the greatest total profit whose total
    /// price does not exceed the budget.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(portfolio))` with a non-empty portfolio whose profit is
    ///   strictly positive and maximal.
    /// - `Ok(None)` when no non-empty subset beats buying nothing: the catalog
    ///   is empty, nothing fits the budget, or nothing that fits has a positive
    ///   profit. Callers treat this as the empty portfolio.
    /// - `Err(_)` when the settings are unusable for this input or an asset
    ///   violates the precondition (finite price strictly above zero, finite
    ///   profit). No computation is attempted in that case.
    fn find_best(
        &self,
        catalog: &Catalog,
        budget: Budget,
    ) -> Result<Option<Portfolio>, OptimizeError>;
}
