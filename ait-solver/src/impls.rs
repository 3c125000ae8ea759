/// Implementation enumerating every subset, used as a correctness oracle
#[cfg(feature = "exhaustive")]
pub mod exhaustive;

/// Implementation using a bounded 0/1 knapsack dynamic program
#[cfg(feature = "knapsack")]
pub mod knapsack;
