use thiserror::Error;

/// The ways in which the parameters of an optimization call may be invalid.
///
/// These are detected before any computation takes place.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// The budget is below zero
    #[error("budget must be non-negative, got {0}")]
    NegativeBudget(f64),
    /// The budget is NaN or infinite
    #[error("budget must be finite, got {0}")]
    NonFiniteBudget(f64),
    /// The currency scaling factor is zero
    #[error("currency scale factor must be positive")]
    ZeroScale,
    /// An amount does not fit the integer minor-unit representation
    #[error("amount {0} cannot be represented in minor currency units")]
    AmountOutOfRange(f64),
    /// The scaled budget would require a table larger than allowed
    #[error("scaled budget requires {required} table cells, the limit is {limit}")]
    CapacityExceeded {
        /// The number of cells the budget requires
        required: usize,
        /// The configured limit
        limit: usize,
    },
    /// The catalog is too large for an exhaustive search
    #[error("exhaustive search over {count} assets exceeds the limit of {limit}")]
    TooManyAssets {
        /// The size of the catalog
        count: usize,
        /// The configured limit
        limit: usize,
    },
}

/// The specific way an asset fails the optimizer precondition
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ViolationKind {
    /// The price is zero or negative
    #[error("price must be strictly positive, got {0}")]
    NonPositivePrice(f64),
    /// The price is NaN or infinite
    #[error("price must be finite, got {0}")]
    NonFinitePrice(f64),
    /// The profit is NaN or infinite
    #[error("profit must be finite, got {0}")]
    NonFiniteProfit(f64),
}

/// An asset that should have been rejected by the loader reached an optimizer.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("asset #{index} ({name:?}) violates the optimizer precondition: {kind}")]
pub struct PreconditionViolation {
    /// The position of the asset in the catalog
    pub index: usize,
    /// The name of the asset
    pub name: String,
    /// What is wrong with it
    pub kind: ViolationKind,
}

/// Any failure of an optimization call.
///
/// Note that the absence of a solution is not an error: optimizers report it
/// as `Ok(None)`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum OptimizeError {
    /// The call parameters were rejected
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// The catalog contains an invalid asset
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),
}
