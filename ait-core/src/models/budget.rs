use super::ConfigurationError;

/// The ceiling on the total purchase cost of a portfolio.
///
/// A budget is always finite and non-negative; a zero budget is valid and
/// simply admits no purchase.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Budget(f64);

impl Budget {
    /// The ceiling used by the reference use case
    pub const DEFAULT: f64 = 500.0;

    /// Create a budget, rejecting negative and non-finite amounts
    pub fn new(amount: f64) -> Result<Self, ConfigurationError> {
        if !amount.is_finite() {
            Err(ConfigurationError::NonFiniteBudget(amount))
        } else if amount < 0.0 {
            Err(ConfigurationError::NegativeBudget(amount))
        } else {
            // normalize -0.0
            Ok(Self(amount.max(0.0)))
        }
    }

    /// The budget amount in major currency units
    pub fn amount(self) -> f64 {
        self.0
    }

    /// Whether a total cost stays within this budget.
    ///
    /// Sums of decimal prices pick up binary representation error (three
    /// prices of 0.1 add up to 0.30000000000000004), so a cost within a
    /// billionth of the ceiling, relative to its size, is treated as equal to it.
    pub fn admits(self, cost: f64) -> bool {
        cost <= self.0 + Self::RELATIVE_SLACK * self.0.max(1.0)
    }

    const RELATIVE_SLACK: f64 = 1e-9;
}

impl Default for Budget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for Budget {
    type Error = ConfigurationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Budget> for f64 {
    fn from(value: Budget) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_hundred() {
        assert_eq!(Budget::default().amount(), 500.0);
    }

    #[test]
    fn zero_is_allowed() {
        let budget = Budget::new(0.0).unwrap();
        assert!(budget.admits(0.0));
        assert!(!budget.admits(0.01));
    }

    #[test]
    fn representation_error_is_admitted() {
        let budget = Budget::new(0.3).unwrap();
        assert!(budget.admits(0.1 + 0.1 + 0.1));
        assert!(!budget.admits(0.31));
    }

    #[test]
    fn negative_is_rejected() {
        assert_eq!(
            Budget::new(-1.0),
            Err(ConfigurationError::NegativeBudget(-1.0))
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            Budget::new(f64::NAN),
            Err(ConfigurationError::NonFiniteBudget(_))
        ));
        assert!(matches!(
            Budget::new(f64::INFINITY),
            Err(ConfigurationError::NonFiniteBudget(_))
        ));
    }

    #[test]
    fn deserialize_validates() {
        let budget: Budget = serde_json::from_str("750").unwrap();
        assert_eq!(budget.amount(), 750.0);
        assert!(serde_json::from_str::<Budget>("-5").is_err());
    }
}
