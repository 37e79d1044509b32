//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for creating a TD learning agent.
///
/// This type provides a builder-style API for configuring agents before
/// creation through the dependency injection container. Defaults follow the
/// classic Q-learning setup: a little exploration, a moderate step size,
/// and a fairly short horizon.
///
/// # Examples
///
/// ```
/// use tdlearn::app::AgentConfig;
///
/// let config = AgentConfig::new()
///     .with_epsilon(0.1)
///     .with_learning_rate(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Exploration probability ε
    pub epsilon: f64,
    /// Learning rate α
    pub learning_rate: f64,
    /// Discount factor γ
    pub discount: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the default hyperparameters
    /// (ε = 0.05, α = 0.2, γ = 0.8, no seed).
    pub fn new() -> Self {
        Self {
            epsilon: 0.05,
            learning_rate: 0.2,
            discount: 0.8,
            seed: None,
        }
    }

    /// Set the exploration probability.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor.
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check all hyperparameters are in range: ε ∈ [0, 1], α ∈ (0, 1],
    /// γ ∈ [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.epsilon) || !self.epsilon.is_finite() {
            return Err(Error::InvalidHyperparameter {
                name: "epsilon",
                value: self.epsilon,
                expected: "[0, 1]",
            });
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(Error::InvalidHyperparameter {
                name: "learning_rate",
                value: self.learning_rate,
                expected: "(0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.discount) || !self.discount.is_finite() {
            return Err(Error::InvalidHyperparameter {
                name: "discount",
                value: self.discount,
                expected: "[0, 1]",
            });
        }
        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AgentConfig::new();
        assert_eq!(config.epsilon, 0.05);
        assert_eq!(config.learning_rate, 0.2);
        assert_eq!(config.discount, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn epsilon_out_of_range_is_rejected() {
        assert!(AgentConfig::new().with_epsilon(1.5).validate().is_err());
        assert!(AgentConfig::new().with_epsilon(-0.1).validate().is_err());
        assert!(AgentConfig::new().with_epsilon(1.0).validate().is_ok());
        assert!(AgentConfig::new().with_epsilon(0.0).validate().is_ok());
    }

    #[test]
    fn zero_learning_rate_is_rejected() {
        assert!(AgentConfig::new().with_learning_rate(0.0).validate().is_err());
        assert!(AgentConfig::new().with_learning_rate(1.1).validate().is_err());
        assert!(AgentConfig::new().with_learning_rate(1.0).validate().is_ok());
    }

    #[test]
    fn discount_out_of_range_is_rejected() {
        assert!(AgentConfig::new().with_discount(1.01).validate().is_err());
        assert!(AgentConfig::new().with_discount(f64::NAN).validate().is_err());
        assert!(AgentConfig::new().with_discount(0.0).validate().is_ok());
        assert!(AgentConfig::new().with_discount(1.0).validate().is_ok());
    }
}
