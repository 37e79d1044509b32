//! Linear value strategy: gradient Q-learning over sparse features

use std::fmt;

use crate::{
    ports::{FeatureExtractor, ValueStrategy},
    value::features::WeightVector,
};

/// Linear-function-approximation strategy (semi-gradient TD control).
///
/// The value estimate is linear in a shared weight vector,
/// Q(s,a) = w·x(s,a), with x the extractor's sparse feature vector. Each
/// observed transition applies one stochastic-gradient step on the squared
/// TD error; for a linear value function the gradient is the feature vector
/// itself, so the update touches exactly the features active in the pair:
///
/// w\[k\] ← w\[k\] + α·\[r + γ·max_a' Q(s',a') − Q(s,a)\]·x(s,a)\[k\]
///
/// States that share features share weight, which is the point, and the
/// risk: an update for one state moves the estimates of every state it
/// overlaps with.
pub struct LinearValues<S, A> {
    weights: WeightVector,
    extractor: Box<dyn FeatureExtractor<S, A>>,
    learning_rate: f64,
    discount: f64,
}

impl<S, A> LinearValues<S, A> {
    /// Create a strategy with fresh zero weights.
    ///
    /// # Arguments
    ///
    /// * `extractor` - feature projection for (state, action) pairs
    /// * `learning_rate` - α step size in (0.0, 1.0]
    /// * `discount` - γ horizon discount in [0.0, 1.0]
    pub fn new(
        extractor: Box<dyn FeatureExtractor<S, A>>,
        learning_rate: f64,
        discount: f64,
    ) -> Self {
        Self {
            weights: WeightVector::new(),
            extractor,
            learning_rate,
            discount,
        }
    }

    /// Rebuild a strategy from previously learned weights.
    pub fn from_parts(
        extractor: Box<dyn FeatureExtractor<S, A>>,
        weights: WeightVector,
        learning_rate: f64,
        discount: f64,
    ) -> Self {
        Self {
            weights,
            extractor,
            learning_rate,
            discount,
        }
    }

    /// The learned weights.
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Registry name of the extractor this strategy projects with.
    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
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

impl<S, A> fmt::Debug for LinearValues<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearValues")
            .field("weights", &self.weights)
            .field("extractor", &self.extractor.name())
            .field("learning_rate", &self.learning_rate)
            .field("discount", &self.discount)
            .finish()
    }
}

impl<S, A> ValueStrategy<S, A> for LinearValues<S, A>
where
    S: Send,
    A: Send,
{
    fn value(&self, state: &S, action: &A) -> f64 {
        self.weights.dot(&self.extractor.features(state, action))
    }

    fn update(
        &mut self,
        state: &S,
        action: &A,
        next_state: &S,
        next_legal_actions: &[A],
        reward: f64,
    ) {
        // Terminal future value is exactly 0.0, independent of whatever
        // stale weight values a lookup on next_state would produce.
        let best_next = if next_legal_actions.is_empty() {
            0.0
        } else {
            self.state_value(next_state, next_legal_actions)
        };

        // The TD error is fixed before any weight moves; every feature's
        // step uses the same pre-update estimate.
        let td_error = reward + self.discount * best_next - self.value(state, action);

        let features = self.extractor.features(state, action);
        for (key, value) in features.iter() {
            if value != 0.0 {
                self.weights.add(key, self.learning_rate * td_error * value);
            }
        }
    }

    fn reset(&mut self) {
        self.weights.clear();
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::FeatureKey, value::features::FeatureVector};

    /// Emits a constant bias feature plus the action index as a feature.
    struct TestExtractor;

    impl FeatureExtractor<&'static str, usize> for TestExtractor {
        fn features(&self, _state: &&'static str, action: &usize) -> FeatureVector {
            [
                (FeatureKey::from("bias"), 1.0),
                (FeatureKey::from("action"), *action as f64),
            ]
            .into_iter()
            .collect()
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    fn test_values(learning_rate: f64, discount: f64) -> LinearValues<&'static str, usize> {
        LinearValues::new(Box::new(TestExtractor), learning_rate, discount)
    }

    #[test]
    fn value_is_dot_product_of_weights_and_features() {
        let mut values = test_values(0.5, 0.8);
        values.weights.set(FeatureKey::from("bias"), 2.0);
        values.weights.set(FeatureKey::from("action"), 0.5);

        // 2.0 * 1.0 + 0.5 * 3.0
        assert_eq!(values.value(&"s", &3), 3.5);
    }

    #[test]
    fn value_with_zero_weights_is_zero() {
        let values = test_values(0.5, 0.8);
        assert_eq!(values.value(&"s", &1), 0.0);
    }

    #[test]
    fn update_moves_each_active_weight_by_scaled_error() {
        let mut values = test_values(0.5, 0.8);

        // td_error = 10 + 0.8 * 0 - 0 = 10
        values.update(&"s", &2usize, &"end", &[], 10.0);

        // bias: 0 + 0.5 * 10 * 1.0; action: 0 + 0.5 * 10 * 2.0
        assert_eq!(values.weights().get(&FeatureKey::from("bias")), 5.0);
        assert_eq!(values.weights().get(&FeatureKey::from("action")), 10.0);
    }

    #[test]
    fn terminal_next_state_ignores_stale_weights() {
        let mut values = test_values(1.0, 1.0);
        // Stale weights that would make any next-state lookup large.
        values.weights.set(FeatureKey::from("bias"), 100.0);
        values.weights.set(FeatureKey::from("action"), 100.0);

        // With an empty next legal set the target is just the reward:
        // td_error = 1 + 1.0 * 0 - (100 * 1 + 100 * 2) = -299
        values.update(&"s", &2usize, &"end", &[], 1.0);

        assert_eq!(values.weights().get(&FeatureKey::from("bias")), -199.0);
        assert_eq!(values.weights().get(&FeatureKey::from("action")), -498.0);
    }

    #[test]
    fn zero_valued_features_do_not_create_weights() {
        let mut values = test_values(0.5, 0.8);

        // Action 0 makes the "action" feature 0.0, so only "bias" may move.
        values.update(&"s", &0usize, &"end", &[], 4.0);

        assert_eq!(values.weights().len(), 1);
        assert_eq!(values.weights().get(&FeatureKey::from("bias")), 2.0);
    }

    #[test]
    fn reset_clears_weights() {
        let mut values = test_values(0.5, 0.8);
        values.update(&"s", &1usize, &"end", &[], 4.0);
        values.reset();
        assert!(values.weights().is_empty());
        assert_eq!(values.value(&"s", &1), 0.0);
    }
}
