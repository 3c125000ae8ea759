#![allow(unused_macros)]
use rstest_reuse::template;

// This creates a testing "template" to allow for the injection of each
// optimizer implementation

#[template]
#[rstest]
#[case::exhaustive(ait_solver::exhaustive::ExhaustiveSolver::default())]
#[case::knapsack(ait_solver::knapsack::KnapsackSolver::default())]
pub fn all_solvers(#[case] solver: impl ait_solver::PortfolioOptimizer) -> () {}
