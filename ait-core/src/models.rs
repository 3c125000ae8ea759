mod asset;
mod budget;
mod catalog;
mod error;
mod portfolio;
mod scale;

pub use asset::Asset;
pub use budget::Budget;
pub use catalog::Catalog;
pub use error::{ConfigurationError, OptimizeError, PreconditionViolation, ViolationKind};
pub use portfolio::Portfolio;
pub use scale::CurrencyScale;

/// An insertion-ordered set with a fast, deterministic hasher.
///
/// Selections are reported in the order they were made, so we use
/// indexmap::IndexSet rather than std::collections::HashSet.
pub type Set<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;
