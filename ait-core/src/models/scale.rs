use super::ConfigurationError;

/// Scaled amounts this close to a whole number of minor units (relative to
/// their magnitude) are taken to be that number.
const SNAP: f64 = 1e-12;

/// Fixed-point conversion of currency amounts into integer minor units.
///
/// Conversions are directional, so a budget check made in minor units never
/// admits a purchase that the real amounts would refuse: prices are charged
/// upwards ([`CurrencyScale::cost_units`]) and budgets are floored
/// ([`CurrencyScale::capacity_units`]). Before either, an amount that is a
/// whole number of minor units up to floating-point representation error is
/// snapped to that number, so 19.99 is 1999 cents both ways while 19.994 costs
/// 2000 and a budget of 19.994 holds 1999.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyScale {
    factor: u32,
}

impl CurrencyScale {
    /// Hundredths
    pub const CENTS: Self = Self { factor: 100 };

    /// Create a scale with the given number of minor units per major unit
    pub fn new(factor: u32) -> Result<Self, ConfigurationError> {
        if factor == 0 {
            Err(ConfigurationError::ZeroScale)
        } else {
            Ok(Self { factor })
        }
    }

    /// The number of minor units per major unit
    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// The value of one minor unit in major units
    pub fn tolerance(&self) -> f64 {
        1.0 / f64::from(self.factor)
    }

    /// The smallest number of minor units that covers a price
    pub fn cost_units(&self, price: f64) -> Result<usize, ConfigurationError> {
        self.to_units(price, f64::ceil)
    }

    /// The largest number of minor units a budget can pay for
    pub fn capacity_units(&self, budget: f64) -> Result<usize, ConfigurationError> {
        self.to_units(budget, f64::floor)
    }

    fn to_units(
        &self,
        amount: f64,
        direction: fn(f64) -> f64,
    ) -> Result<usize, ConfigurationError> {
        let scaled = amount * f64::from(self.factor);
        let nearest = scaled.round();
        let units = if (scaled - nearest).abs() <= SNAP * nearest.abs().max(1.0) {
            nearest
        } else {
            direction(scaled)
        };

        // NaN fails both comparisons
        if units >= 0.0 && units < usize::MAX as f64 {
            Ok(units as usize)
        } else {
            Err(ConfigurationError::AmountOutOfRange(amount))
        }
    }
}

impl Default for CurrencyScale {
    fn default() -> Self {
        Self::CENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(19.99, 1999, 1999)]
    #[case(0.29, 29, 29)]
    #[case(1.1, 110, 110)]
    #[case(4.35, 435, 435)]
    #[case(500.0, 50_000, 50_000)]
    #[case(100.004, 10_001, 10_000)]
    #[case(99.996, 10_000, 9_999)]
    #[case(0.001, 1, 0)]
    #[case(0.0, 0, 0)]
    fn cents(#[case] amount: f64, #[case] cost: usize, #[case] capacity: usize) {
        let scale = CurrencyScale::CENTS;
        assert_eq!(scale.cost_units(amount), Ok(cost));
        assert_eq!(scale.capacity_units(amount), Ok(capacity));
    }

    #[test]
    fn finer_scales_resolve_sub_cent_amounts() {
        let scale = CurrencyScale::new(1000).unwrap();
        assert_eq!(scale.cost_units(100.004), Ok(100_004));
        assert_eq!(scale.capacity_units(99.996), Ok(99_996));
        assert_eq!(scale.tolerance(), 0.001);
    }

    #[test]
    fn zero_factor_is_rejected() {
        assert_eq!(CurrencyScale::new(0), Err(ConfigurationError::ZeroScale));
    }

    #[test]
    fn out_of_range() {
        let scale = CurrencyScale::CENTS;
        assert_eq!(
            scale.capacity_units(-0.5),
            Err(ConfigurationError::AmountOutOfRange(-0.5))
        );
        assert!(scale.cost_units(1e300).is_err());
        assert!(scale.cost_units(f64::NAN).is_err());
        assert!(scale.capacity_units(f64::INFINITY).is_err());
    }
}
