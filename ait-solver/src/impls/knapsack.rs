use crate::{
    Budget, Catalog, ConfigurationError, CurrencyScale, OptimizeError, Portfolio,
    PortfolioOptimizer,
};
use tracing::{Level, event};

/// Configuration for [`KnapsackSolver`]
#[derive(Clone, Debug, PartialEq)]
pub struct KnapsackSettings {
    /// The fixed-point conversion applied to prices and the budget
    pub scale: CurrencyScale,
    /// The largest number of capacity cells (scaled budget + 1) to allocate
    pub max_capacity: usize,
}

impl Default for KnapsackSettings {
    fn default() -> Self {
        Self {
            scale: CurrencyScale::CENTS,
            max_capacity: 100_000_000,
        }
    }
}

/// Finds the optimum with a 0/1 knapsack dynamic program over integer minor units.
///
/// Prices and the budget are converted to minor units with the configured
/// [`CurrencyScale`]: prices are rounded up and the budget down, so a subset
/// that fits the table always fits the real budget. Profits are not scaled.
/// `best_profit[c]` holds the best profit reachable with a scaled cost of at
/// most `c`. Each asset sweeps the capacities downward, which keeps it from
/// being counted twice, and replaces a cell only on a strict improvement.
///
/// Every improvement is recorded in a per-asset bit row, so reconstruction
/// walks the assets backwards and never revisits one. Among all capacities
/// reaching the maximal profit, the smallest is reconstructed, so the
/// cheapest optimal subset is reported; a maximal profit of zero yields no
/// portfolio.
///
/// Runs in O(n · C) time with O(C) profit cells and O(n · C) bits, where C is
/// the scaled budget.
///
/// Whole-minor-unit prices are represented exactly. A price with a finer
/// fraction is charged the next whole unit, which may exclude a subset whose
/// real cost fits only within that fraction; choose a finer scale when such
/// prices matter.
#[derive(Clone, Debug, Default)]
pub struct KnapsackSolver(KnapsackSettings);

impl PortfolioOptimizer for KnapsackSolver {
    type Settings = KnapsackSettings;

    fn new(settings: Self::Settings) -> Self {
        Self(settings)
    }

    fn find_best(
        &self,
        catalog: &Catalog,
        budget: Budget,
    ) -> Result<Option<Portfolio>, OptimizeError> {
        catalog.validate()?;

        let KnapsackSettings {
            scale,
            max_capacity,
        } = &self.0;

        let capacity = scale.capacity_units(budget.amount())?;
        let cells = capacity.saturating_add(1);
        if cells > *max_capacity {
            return Err(ConfigurationError::CapacityExceeded {
                required: cells,
                limit: *max_capacity,
            }
            .into());
        }

        // Only assets that fit on their own and earn something can ever
        // improve a cell, everything else is dropped up front.
        let mut items = Vec::with_capacity(catalog.len());
        for (index, asset) in catalog.iter().enumerate() {
            let cost = scale.cost_units(asset.price())?.max(1);
            let profit = asset.profit();
            if cost <= capacity && profit > 0.0 {
                items.push(Item {
                    index,
                    cost,
                    profit,
                });
            }
        }

        if items.is_empty() {
            event!(
                Level::DEBUG,
                assets = catalog.len(),
                capacity,
                "knapsack has no candidate assets"
            );
            return Ok(None);
        }

        let mut best_profit = vec![0.0; cells];
        let mut taken = Trace::new(items.len(), cells);

        for (row, item) in items.iter().enumerate() {
            for c in (item.cost..cells).rev() {
                let candidate = best_profit[c - item.cost] + item.profit;
                if candidate > best_profit[c] {
                    best_profit[c] = candidate;
                    taken.set(row, c);
                }
            }
        }

        // leftover budget is allowed, so the optimum may sit below the full capacity
        let mut optimum = 0;
        for c in 1..cells {
            if best_profit[c] > best_profit[optimum] {
                optimum = c;
            }
        }

        event!(
            Level::DEBUG,
            assets = catalog.len(),
            candidates = items.len(),
            capacity,
            optimum,
            profit = best_profit[optimum],
            "knapsack table complete"
        );

        if best_profit[optimum] <= 0.0 {
            return Ok(None);
        }

        let mut selection = Vec::new();
        let mut c = optimum;
        for (row, item) in items.iter().enumerate().rev() {
            if taken.get(row, c) {
                selection.push(item.index);
                c -= item.cost;
            }
        }
        selection.reverse();

        Ok(Some(Portfolio::from_selection(catalog, selection)))
    }
}

/// An asset as the table sees it
struct Item {
    index: usize,
    cost: usize,
    profit: f64,
}

/// One bit per (asset, capacity), set when the asset improved that capacity
struct Trace {
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Trace {
    fn new(rows: usize, cells: usize) -> Self {
        let words_per_row = cells.div_ceil(64);
        Self {
            words_per_row,
            bits: vec![0; rows * words_per_row],
        }
    }

    fn set(&mut self, row: usize, cell: usize) {
        self.bits[row * self.words_per_row + cell / 64] |= 1u64 << (cell % 64);
    }

    fn get(&self, row: usize, cell: usize) -> bool {
        self.bits[row * self.words_per_row + cell / 64] & (1u64 << (cell % 64)) != 0
    }
}
