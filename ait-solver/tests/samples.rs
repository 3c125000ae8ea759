use ait_solver::{
    CurrencyScale, PortfolioOptimizer,
    io::{Problem, Summary},
};
use approx::assert_abs_diff_eq;
use rstest::*;
use rstest_reuse::{self, *};
use std::{fs::File, io::BufReader, path::PathBuf};

mod all_solvers;
use all_solvers::all_solvers;

// This test case is a dynamically generated, Cartesian product of test cases.
// For every optimizer, and for every (input.json, output.json) pair in `./samples/**`,
//   1. Read in the problem,
//   2. Read in the known-good summary (or null when nothing should be bought),
//   3. Solve the problem,
//   4. Compare the solution to the known-good summary.
// Only the total profit is compared exactly: when several subsets are optimal,
// optimizers may legitimately report different ones.

#[apply(all_solvers)]
#[rstest]
fn run_sample(
    #[case] solver: impl PortfolioOptimizer,
    #[files("tests/samples/**/input.json")] input: PathBuf,
) {
    let mut output = input.clone();
    output.set_file_name("output.json");

    let problem: Problem =
        serde_json::from_reader(BufReader::new(File::open(input).unwrap())).unwrap();

    let reference: Option<Summary> =
        serde_json::from_reader(BufReader::new(File::open(output).unwrap())).unwrap();

    let solution = problem.solve(&solver).unwrap();

    match (solution, reference) {
        (None, None) => {}
        (Some(portfolio), Some(reference)) => {
            let summary = Summary::from(&portfolio);
            assert_abs_diff_eq!(summary.total_profit, reference.total_profit, epsilon = 1e-6);

            // The samples are priced in whole cents, so the budget is checked exactly
            let cents = CurrencyScale::CENTS;
            let spent = portfolio
                .assets()
                .iter()
                .map(|asset| cents.cost_units(asset.price()).unwrap())
                .sum::<usize>();
            let budget = problem.budget.unwrap_or_default();
            assert!(spent <= cents.capacity_units(budget.amount()).unwrap());
        }
        (solution, reference) => {
            panic!("expected {reference:?}, got {solution:?}");
        }
    }
}
