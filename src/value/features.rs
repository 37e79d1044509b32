//! Sparse feature vectors and the shared weight vector

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::FeatureKey;

/// Sparse numeric description of a single (state, action) pair.
///
/// Produced by a [`FeatureExtractor`](crate::ports::FeatureExtractor);
/// only the keys present in the vector participate in value computation,
/// so absent features contribute nothing by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: HashMap<FeatureKey, f64>,
}

impl FeatureVector {
    /// Create an empty feature vector.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Set the value of a feature.
    pub fn insert(&mut self, key: FeatureKey, value: f64) {
        self.values.insert(key, value);
    }

    /// Get the value of a feature, or 0.0 if absent.
    pub fn get(&self, key: &FeatureKey) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// Iterate over (key, value) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureKey, f64)> {
        self.values.iter().map(|(key, value)| (key, *value))
    }

    /// Number of features present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no features are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(FeatureKey, f64)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (FeatureKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Weight per feature, shared across all states and actions.
///
/// Keys are created lazily: a read of an unknown key resolves to 0.0
/// without inserting, and only [`set`](WeightVector::set) and
/// [`add`](WeightVector::add) grow the vector. Sharing weights across the
/// whole state space is what gives linear approximation its generalization,
/// and its risk of interference between states with overlapping features.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    weights: HashMap<FeatureKey, f64>,
}

impl WeightVector {
    /// Create an empty weight vector.
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// Get the weight for a feature key, or 0.0 if never written.
    pub fn get(&self, key: &FeatureKey) -> f64 {
        self.weights.get(key).copied().unwrap_or(0.0)
    }

    /// Store a weight for a feature key.
    pub fn set(&mut self, key: FeatureKey, weight: f64) {
        self.weights.insert(key, weight);
    }

    /// Add a delta to a feature's weight, creating the key at 0.0 first if
    /// it has never been written.
    pub fn add(&mut self, key: &FeatureKey, delta: f64) {
        *self.weights.entry(key.clone()).or_insert(0.0) += delta;
    }

    /// Dot product with a feature vector, summed over the feature vector's
    /// keys only. Weight keys absent from the features contribute nothing;
    /// feature keys absent from the weights contribute 0.0.
    pub fn dot(&self, features: &FeatureVector) -> f64 {
        features
            .iter()
            .map(|(key, value)| self.get(key) * value)
            .sum()
    }

    /// Iterate over (key, weight) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureKey, f64)> {
        self.weights.iter().map(|(key, weight)| (key, *weight))
    }

    /// Number of weights present.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no weights have been written.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Remove all weights.
    pub fn clear(&mut self) {
        self.weights.clear();
    }
}
