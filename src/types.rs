//! Newtype wrappers and shared value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a scalar feature produced by a feature extractor.
///
/// Feature keys are opaque labels shared between [`FeatureVector`]s and the
/// [`WeightVector`]: a weight exists per feature key, not per state or
/// action, which is what gives linear approximation its generalization.
///
/// [`FeatureVector`]: crate::value::FeatureVector
/// [`WeightVector`]: crate::value::WeightVector
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureKey(String);

impl FeatureKey {
    /// Create a new feature key from any string-like label.
    pub fn new(label: impl Into<String>) -> Self {
        FeatureKey(label.into())
    }

    /// Get the key's label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeatureKey {
    fn from(label: &str) -> Self {
        FeatureKey(label.to_string())
    }
}

impl From<String> for FeatureKey {
    fn from(label: String) -> Self {
        FeatureKey(label)
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single observed transition: the agent took `action` in `state`, the
/// environment answered with `next_state` and `reward`.
///
/// All four fields are fixed inputs by the time the transition reaches the
/// learner; the TD update consumes the tuple exactly once and never
/// re-samples any part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition<S, A> {
    /// State the action was taken in
    pub state: S,
    /// Action taken
    pub action: A,
    /// State the environment transitioned to
    pub next_state: S,
    /// Immediate reward observed
    pub reward: f64,
}

impl<S, A> Transition<S, A> {
    /// Create a new transition record.
    pub fn new(state: S, action: A, next_state: S, reward: f64) -> Self {
        Self {
            state,
            action,
            next_state,
            reward,
        }
    }
}
