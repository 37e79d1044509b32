//! Q-table: a default-valued mutable mapping from (state, action) to value

use std::{collections::HashMap, hash::Hash};

use serde::{Deserialize, Serialize};

/// Q-table mapping (state, action) pairs to action-value estimates.
///
/// The container makes the default-on-read / explicit-on-write contract
/// visible: [`get`](QTable::get) resolves unseen keys to 0.0 without
/// inserting anything, and [`set`](QTable::set) is the only operation that
/// grows the table. Absence of a key is therefore distinct from a stored
/// 0.0, which [`contains`](QTable::contains) can observe. Entries are never
/// deleted except by [`clear`](QTable::clear).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable<S: Eq + Hash, A: Eq + Hash> {
    entries: HashMap<S, HashMap<A, f64>>,
}

impl<S: Eq + Hash, A: Eq + Hash> QTable<S, A> {
    /// Create an empty Q-table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Get the value stored for a (state, action) pair, or 0.0 if the pair
    /// has never been written. Reading never mutates storage.
    pub fn get(&self, state: &S, action: &A) -> f64 {
        self.entries
            .get(state)
            .and_then(|actions| actions.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Store a value for a (state, action) pair.
    pub fn set(&mut self, state: S, action: A, value: f64) {
        self.entries.entry(state).or_default().insert(action, value);
    }

    /// Whether an entry has been explicitly written for this pair.
    pub fn contains(&self, state: &S, action: &A) -> bool {
        self.entries
            .get(state)
            .is_some_and(|actions| actions.contains_key(action))
    }

    /// Total number of stored (state, action) entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all stored entries.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, f64)> {
        self.entries.iter().flat_map(|(state, actions)| {
            actions
                .iter()
                .map(move |(action, value)| (state, action, *value))
        })
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Eq + Hash, A: Eq + Hash> Default for QTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
