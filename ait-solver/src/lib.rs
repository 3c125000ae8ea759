/**
 * These are implementations of the portfolio optimizer.
 */
mod impls;
pub use impls::*;

/// Raw, serde-friendly problem and summary types
#[cfg(feature = "io")]
pub mod io;

// The models and the optimizer port are re-exported so that callers need only
// depend on this crate.
pub use ait_core::models::{
    Asset, Budget, Catalog, ConfigurationError, CurrencyScale, OptimizeError, Portfolio,
    PreconditionViolation, ViolationKind,
};
pub use ait_core::ports::PortfolioOptimizer;
