//! Common test utilities for the tdlearn test suite.

use tdlearn::{ActionSpace, Environment, FeatureExtractor, FeatureKey, FeatureVector};

pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_tol(a, b, 1e-9)
}

pub fn approx_eq_tol(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Deterministic chain of `length` cells.
///
/// Cells `0` and `length - 1` are terminal; interior cells allow `'L'` and
/// `'R'`. Entering the left terminal pays -1.0, entering the right terminal
/// pays +1.0, every other step pays nothing. With any discount below 1 the
/// optimal policy from every interior cell is `'R'`, with
/// Q*(s, 'R') = discount^(length - 2 - s).
pub struct LineWorld {
    pub length: usize,
    pub start: usize,
}

impl LineWorld {
    pub fn new(length: usize, start: usize) -> Self {
        assert!(length >= 3);
        assert!(start > 0 && start < length - 1);
        Self { length, start }
    }
}

impl ActionSpace<usize, char> for LineWorld {
    fn legal_actions(&self, state: &usize) -> Vec<char> {
        if *state == 0 || *state >= self.length - 1 {
            vec![]
        } else {
            vec!['L', 'R']
        }
    }
}

impl Environment<usize, char> for LineWorld {
    fn initial_state(&mut self) -> usize {
        self.start
    }

    fn transition(&mut self, state: &usize, action: &char) -> (usize, f64) {
        match action {
            'L' => {
                let next = state - 1;
                let reward = if next == 0 { -1.0 } else { 0.0 };
                (next, reward)
            }
            _ => {
                let next = state + 1;
                let reward = if next == self.length - 1 { 1.0 } else { 0.0 };
                (next, reward)
            }
        }
    }
}

/// Emits the single constant feature `"bias" = 1.0` for every pair, which
/// collapses the linear strategy to one shared scalar estimate.
pub struct BiasExtractor;

impl<S, A> FeatureExtractor<S, A> for BiasExtractor {
    fn features(&self, _state: &S, _action: &A) -> FeatureVector {
        [(FeatureKey::from("bias"), 1.0)].into_iter().collect()
    }

    fn name(&self) -> &str {
        "bias"
    }
}
