use super::ViolationKind;

/// A candidate purchase: an indivisible asset with a fixed price and a fixed
/// profit realized after the holding period.
///
/// Assets are immutable values. The constructor performs no validation, since
/// filtering of malformed input is the loader's job; optimizers call
/// [`Asset::validate`] before computing anything.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Asset {
    name: String,
    price: f64,
    profit: f64,
}

impl Asset {
    /// Create a new asset from its name, purchase price and absolute profit
    pub fn new(name: impl Into<String>, price: f64, profit: f64) -> Self {
        Self {
            name: name.into(),
            price,
            profit,
        }
    }

    /// The identifier of the asset
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The purchase price of the asset
    pub fn price(&self) -> f64 {
        self.price
    }

    /// The absolute profit realized by holding the asset
    pub fn profit(&self) -> f64 {
        self.profit
    }

    /// The profit as a fraction of the price (0.2 means a 20% return)
    pub fn return_rate(&self) -> f64 {
        self.profit / self.price
    }

    /// Check the optimizer precondition for this asset.
    ///
    /// The price must be finite and strictly positive, and the profit must be
    /// finite. The profit may be zero or negative.
    pub fn validate(&self) -> Result<(), ViolationKind> {
        if !self.price.is_finite() {
            Err(ViolationKind::NonFinitePrice(self.price))
        } else if self.price <= 0.0 {
            Err(ViolationKind::NonPositivePrice(self.price))
        } else if !self.profit.is_finite() {
            Err(ViolationKind::NonFiniteProfit(self.profit))
        } else {
            Ok(())
        }
    }
}
