//! Statistical behavior of epsilon-greedy selection and tie-breaking.
//!
//! Greedy resolution here randomizes among *all* value maximizers, not only
//! when every legal action ties. The classic reference implementation only
//! randomized in the all-tie case, which quietly biases the policy toward
//! the first maximizer in enumeration order; these tests pin the corrected
//! behavior.

use std::collections::HashMap;

use statrs::distribution::{ChiSquared, ContinuousCDF};
use tdlearn::{ActionSpace, TabularValues, TdAgent, ValueStrategy};

/// One non-terminal state "s" with four actions, and a terminal state.
struct FourActions;

impl ActionSpace<&'static str, usize> for FourActions {
    fn legal_actions(&self, state: &&'static str) -> Vec<usize> {
        match *state {
            "s" => vec![0, 1, 2, 3],
            _ => vec![],
        }
    }
}

/// Build a strategy holding the given action values for state "s".
fn strategy_with(values: &[(usize, f64)]) -> TabularValues<&'static str, usize> {
    let mut strategy = TabularValues::new(1.0, 0.0);
    for &(action, value) in values {
        // alpha = 1 against a terminal next state stores the reward as-is.
        strategy.update(&"s", &action, &"end", &[], value);
    }
    strategy
}

fn chi_square_critical(df: f64) -> f64 {
    ChiSquared::new(df).unwrap().inverse_cdf(0.999)
}

#[test]
fn no_action_exactly_when_no_legal_actions() {
    let mut agent = TdAgent::new(strategy_with(&[]), 0.5).with_seed(3);
    assert_eq!(agent.select_action(&FourActions, &"end"), None);
    assert_eq!(agent.greedy_action(&FourActions, &"end"), None);
    assert!(agent.select_action(&FourActions, &"s").is_some());
    assert!(agent.greedy_action(&FourActions, &"s").is_some());
}

#[test]
fn epsilon_zero_is_deterministic() {
    let mut agent =
        TdAgent::new(strategy_with(&[(0, 0.1), (1, 0.7), (2, 0.3), (3, 0.2)]), 0.0).with_seed(11);

    for _ in 0..1_000 {
        assert_eq!(agent.select_action(&FourActions, &"s"), Some(1));
    }
}

#[test]
fn epsilon_one_is_uniform_over_the_legal_set() {
    // Distinct values, so any greedy leakage would skew the counts toward
    // action 3.
    let mut agent =
        TdAgent::new(strategy_with(&[(0, 0.1), (1, 0.2), (2, 0.3), (3, 0.9)]), 1.0).with_seed(17);

    let draws = 4_000usize;
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..draws {
        let action = agent.select_action(&FourActions, &"s").unwrap();
        *counts.entry(action).or_default() += 1;
    }

    let expected = draws as f64 / 4.0;
    let chi_square: f64 = (0..4)
        .map(|action| {
            let observed = *counts.get(&action).unwrap_or(&0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();

    assert!(
        chi_square < chi_square_critical(3.0),
        "chi-square {chi_square} rejects uniformity, counts {counts:?}"
    );
}

#[test]
fn ties_randomize_among_all_maximizers() {
    // Actions 1 and 3 tie at the maximum; 0 and 2 are strictly worse. The
    // reference behavior would always return action 1 here.
    let mut agent =
        TdAgent::new(strategy_with(&[(0, 0.1), (1, 0.8), (2, 0.5), (3, 0.8)]), 0.0).with_seed(23);

    let draws = 2_000usize;
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..draws {
        let action = agent.greedy_action(&FourActions, &"s").unwrap();
        *counts.entry(action).or_default() += 1;
    }

    assert!(!counts.contains_key(&0), "dominated action 0 selected");
    assert!(!counts.contains_key(&2), "dominated action 2 selected");

    let expected = draws as f64 / 2.0;
    let chi_square: f64 = [1usize, 3]
        .iter()
        .map(|action| {
            let observed = *counts.get(action).unwrap_or(&0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();

    assert!(
        chi_square < chi_square_critical(1.0),
        "chi-square {chi_square} rejects uniform tie-breaking, counts {counts:?}"
    );
}

#[test]
fn all_equal_values_randomize_over_everything() {
    // Fresh table: every action reads 0.0, so the whole legal set ties.
    let mut agent = TdAgent::new(strategy_with(&[]), 0.0).with_seed(31);

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..2_000 {
        let action = agent.greedy_action(&FourActions, &"s").unwrap();
        *counts.entry(action).or_default() += 1;
    }

    assert_eq!(counts.len(), 4, "some action never selected: {counts:?}");
}

#[test]
fn near_ties_within_tolerance_count_as_ties() {
    let values = strategy_with(&[(0, 0.5), (1, 0.5 + tdlearn::VALUE_TOLERANCE / 2.0)]);
    let mut agent = TdAgent::new(values, 0.0).with_seed(37);

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for _ in 0..1_000 {
        let action = agent.greedy_action(&FourActions, &"s").unwrap();
        *counts.entry(action).or_default() += 1;
    }

    assert!(counts.contains_key(&0));
    assert!(counts.contains_key(&1));
}
