use ait_solver::{
    Asset, Budget, Catalog, CurrencyScale, Portfolio, PortfolioOptimizer,
    exhaustive::ExhaustiveSolver,
    knapsack::{KnapsackSettings, KnapsackSolver},
};
use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rstest::*;
use std::collections::HashSet;

// Both optimizers must agree on the optimal profit. They are NOT required to
// agree on the subset: when several subsets reach the same profit, the
// exhaustive search reports the first in enumeration order while the knapsack
// reports the one its table reconstructs.

const ONE_CENT: f64 = 0.01;

/// A random catalog of up to 15 assets, priced in whole cents, whose profits
/// are a percentage of the price (and so rarely a whole number of cents)
fn random_problem(rng: &mut StdRng) -> (Catalog, Budget) {
    random_catalog(rng, |rng| rng.random_range(100..=20_000) as f64 / 100.0)
}

/// As [`random_problem`], but every price has a fraction of a cent
fn random_sub_cent_problem(rng: &mut StdRng) -> (Catalog, Budget) {
    random_catalog(rng, |rng| {
        // an odd number of thousandths is never a whole cent
        let mills = rng.random_range(100..=20_000) * 10 + rng.random_range(0..5) * 2 + 1;
        mills as f64 / 1000.0
    })
}

fn random_catalog(
    rng: &mut StdRng,
    price: impl Fn(&mut StdRng) -> f64,
) -> (Catalog, Budget) {
    let n = rng.random_range(0..=15);
    let catalog = (0..n)
        .map(|i| {
            let price = price(rng);
            let percent = rng.random_range(-500..=4_000) as f64 / 100.0;
            Asset::new(format!("Action-{}", i + 1), price, price * percent / 100.0)
        })
        .collect::<Catalog>();
    let budget = Budget::new(rng.random_range(0..=100_000) as f64 / 100.0).unwrap();
    (catalog, budget)
}

fn profit(portfolio: &Option<Portfolio>) -> f64 {
    portfolio.as_ref().map_or(0.0, Portfolio::total_profit)
}

fn assert_well_formed(portfolio: &Option<Portfolio>, catalog: &Catalog, budget: Budget) {
    let Some(portfolio) = portfolio else {
        return;
    };
    assert!(!portfolio.is_empty());
    assert!(portfolio.total_profit() > 0.0);
    assert!(budget.admits(portfolio.total_cost()));

    // Exactly, in whole cents: each price rounded up never exceeds the budget rounded down
    let cents = CurrencyScale::CENTS;
    let spent = portfolio
        .assets()
        .iter()
        .map(|asset| cents.cost_units(asset.price()).unwrap())
        .sum::<usize>();
    assert!(spent <= cents.capacity_units(budget.amount()).unwrap());

    // Names are unique in these catalogs, so they identify assets
    let names = portfolio.names().collect::<HashSet<_>>();
    assert_eq!(names.len(), portfolio.len(), "an asset was bought twice");
    assert!(
        portfolio
            .assets()
            .iter()
            .all(|asset| catalog.iter().any(|candidate| candidate == asset))
    );
}

#[rstest]
fn optimizers_agree_on_profit(#[values(1, 2, 3, 4, 5, 6, 7, 8)] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let oracle = ExhaustiveSolver::default();
    let knapsack = KnapsackSolver::default();

    for _ in 0..25 {
        let (catalog, budget) = random_problem(&mut rng);

        let expected = oracle.find_best(&catalog, budget).unwrap();
        let actual = knapsack.find_best(&catalog, budget).unwrap();

        assert_well_formed(&expected, &catalog, budget);
        assert_well_formed(&actual, &catalog, budget);
        assert_abs_diff_eq!(profit(&actual), profit(&expected), epsilon = ONE_CENT);
    }
}

#[rstest]
fn sub_cent_prices_never_overspend(#[values(21, 22, 23, 24)] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let oracle = ExhaustiveSolver::default();
    let knapsack = KnapsackSolver::default();

    for _ in 0..25 {
        let (catalog, budget) = random_sub_cent_problem(&mut rng);

        let expected = oracle.find_best(&catalog, budget).unwrap();
        let actual = knapsack.find_best(&catalog, budget).unwrap();

        if let Some(portfolio) = &actual {
            assert!(
                portfolio.total_cost() <= budget.amount(),
                "{} > {}",
                portfolio.total_cost(),
                budget.amount()
            );
        }
        // prices are charged whole cents, so the knapsack may only fall short
        assert!(profit(&actual) <= profit(&expected) + 1e-9);
    }
}

#[rstest]
fn a_finer_scale_recovers_sub_cent_optima(#[values(31, 32, 33)] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let oracle = ExhaustiveSolver::default();
    let knapsack = KnapsackSolver::new(KnapsackSettings {
        scale: CurrencyScale::new(1000).unwrap(),
        ..Default::default()
    });

    for _ in 0..25 {
        let (catalog, budget) = random_sub_cent_problem(&mut rng);

        let expected = oracle.find_best(&catalog, budget).unwrap();
        let actual = knapsack.find_best(&catalog, budget).unwrap();

        if let Some(portfolio) = &actual {
            assert!(budget.admits(portfolio.total_cost()));
        }
        assert_abs_diff_eq!(profit(&actual), profit(&expected), epsilon = 1e-6);
    }
}

#[rstest]
fn profit_is_monotone_in_budget(#[values(11, 12, 13)] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (catalog, _) = random_problem(&mut rng);
    let oracle = ExhaustiveSolver::default();
    let knapsack = KnapsackSolver::default();

    let mut previous = (0.0, 0.0);
    for cents in (0..=150_000).step_by(2_500) {
        let budget = Budget::new(cents as f64 / 100.0).unwrap();
        let current = (
            profit(&oracle.find_best(&catalog, budget).unwrap()),
            profit(&knapsack.find_best(&catalog, budget).unwrap()),
        );
        assert!(current.0 >= previous.0 - 1e-9);
        assert!(current.1 >= previous.1 - 1e-9);
        previous = current;
    }
}

#[test]
fn tied_optima_may_differ() {
    // {C} and {A, B} both cost 10 and earn 10
    let catalog = Catalog::new(vec![
        Asset::new("A", 5.0, 5.0),
        Asset::new("B", 5.0, 5.0),
        Asset::new("C", 10.0, 10.0),
    ]);
    let budget = Budget::new(10.0).unwrap();

    let oracle = ExhaustiveSolver::default()
        .find_best(&catalog, budget)
        .unwrap()
        .unwrap();
    let knapsack = KnapsackSolver::default()
        .find_best(&catalog, budget)
        .unwrap()
        .unwrap();

    assert_eq!(oracle.names().collect::<Vec<_>>(), vec!["C"]);
    assert_eq!(knapsack.names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(oracle.total_profit(), knapsack.total_profit());
}

#[test]
fn fractional_prices_agree_within_a_cent() {
    let catalog = Catalog::new(vec![
        Asset::new("Share-GRUT", 4.98, 1.91),
        Asset::new("Share-GHIZ", 28.0, 11.08),
        Asset::new("Share-NHWA", 29.18, 11.38),
        Asset::new("Share-UEZB", 24.87, 9.73),
        Asset::new("Share-LPDM", 39.35, 15.42),
        Asset::new("Share-MTLR", 16.48, 6.38),
        Asset::new("Share-USSR", 25.62, 9.96),
        Asset::new("Share-GTQK", 15.4, 5.93),
        Asset::new("Share-FKJW", 21.08, 8.13),
        Asset::new("Share-MLGM", 0.01, 0.0),
        Asset::new("Share-QLMK", 17.38, 6.59),
        Asset::new("Share-WPLI", 34.64, 13.17),
    ]);
    let budget = Budget::new(100.0).unwrap();

    let expected = ExhaustiveSolver::default()
        .find_best(&catalog, budget)
        .unwrap();
    let actual = KnapsackSolver::default().find_best(&catalog, budget).unwrap();

    assert_abs_diff_eq!(profit(&actual), profit(&expected), epsilon = ONE_CENT);
}
