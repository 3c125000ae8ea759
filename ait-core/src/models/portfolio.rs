use super::{Asset, Catalog, Set};

/// A selection of catalog assets, each bought at most once, together with its
/// aggregate cost and profit.
///
/// A portfolio holds copies of the selected assets and has no reference back to
/// the catalog it was drawn from. The default portfolio is empty, with zero
/// cost and zero profit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Portfolio {
    assets: Vec<Asset>,
    total_cost: f64,
    total_profit: f64,
}

impl Portfolio {
    /// Build a portfolio from positions in the catalog.
    ///
    /// Repeated positions are collapsed, keeping the first occurrence, so the
    /// result never contains an asset twice. Totals are summed from the
    /// original asset values, not from any scaled representation.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of bounds for the catalog.
    pub fn from_selection<I: IntoIterator<Item = usize>>(catalog: &Catalog, selection: I) -> Self {
        let positions = selection.into_iter().collect::<Set<usize>>();

        let assets = positions
            .into_iter()
            .map(|index| catalog[index].clone())
            .collect::<Vec<_>>();

        // fold from +0.0, an empty f64 sum would yield -0.0
        let total_cost = assets.iter().fold(0.0, |acc, asset| acc + asset.price());
        let total_profit = assets.iter().fold(0.0, |acc, asset| acc + asset.profit());

        Self {
            assets,
            total_cost,
            total_profit,
        }
    }

    /// The selected assets
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// The names of the selected assets
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(Asset::name)
    }

    /// The sum of the selected prices
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// The sum of the selected profits
    pub fn total_profit(&self) -> f64 {
        self.total_profit
    }

    /// The number of selected assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether nothing was selected
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
