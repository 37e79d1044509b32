//! Tabular value strategy: exact per-pair Q-learning

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{ports::ValueStrategy, value::q_table::QTable};

/// Tabular action-value strategy (off-policy TD control).
///
/// Keeps one learned entry per visited (state, action) pair and nudges it
/// toward the one-step bootstrapped target on every observed transition:
///
/// Q(s,a) ← Q(s,a) + α·[r + γ·max_a' Q(s',a') − Q(s,a)]
///
/// Exact within visited pairs, but learns nothing about pairs it has never
/// seen; [`LinearValues`](crate::value::LinearValues) trades that exactness
/// for generalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabularValues<S: Eq + Hash, A: Eq + Hash> {
    table: QTable<S, A>,
    learning_rate: f64,
    discount: f64,
}

impl<S: Eq + Hash, A: Eq + Hash> TabularValues<S, A> {
    /// Create an empty tabular strategy.
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α step size in (0.0, 1.0]
    /// * `discount` - γ horizon discount in [0.0, 1.0]
    pub fn new(learning_rate: f64, discount: f64) -> Self {
        Self {
            table: QTable::new(),
            learning_rate,
            discount,
        }
    }

    /// Rebuild a strategy from a previously learned table.
    pub fn from_parts(table: QTable<S, A>, learning_rate: f64, discount: f64) -> Self {
        Self {
            table,
            learning_rate,
            discount,
        }
    }

    /// The learned Q-table.
    pub fn q_table(&self) -> &QTable<S, A> {
        &self.table
    }

    /// The α step size.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// The γ horizon discount.
    pub fn discount(&self) -> f64 {
        self.discount
    }
}

impl<S, A> ValueStrategy<S, A> for TabularValues<S, A>
where
    S: Eq + Hash + Clone + Send,
    A: Eq + Hash + Clone + Send,
{
    fn value(&self, state: &S, action: &A) -> f64 {
        self.table.get(state, action)
    }

    fn update(
        &mut self,
        state: &S,
        action: &A,
        next_state: &S,
        next_legal_actions: &[A],
        reward: f64,
    ) {
        let current = self.table.get(state, action);
        // state_value is 0.0 for an empty legal set, which is the terminal
        // future value by definition.
        let best_next = self.state_value(next_state, next_legal_actions);
        let target = reward + self.discount * best_next;
        let new_value = current + self.learning_rate * (target - current);
        self.table.set(state.clone(), action.clone(), new_value);
    }

    fn reset(&mut self) {
        self.table.clear();
    }

    fn name(&self) -> &'static str {
        "tabular"
    }
}
