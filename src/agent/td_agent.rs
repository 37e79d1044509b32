//! Epsilon-greedy TD learning agent
//!
//! The agent composes a pluggable value strategy with the action-selection
//! policy both strategies share. Exploration, greedy resolution, and
//! transition observation are written once here; whether values come from a
//! Q-table or a linear approximation is the strategy's business.

use std::{hash::Hash, marker::PhantomData};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    ports::{ActionSpace, ValueStrategy},
    types::Transition,
    value::{LinearValues, TabularValues},
};

/// Tolerance within which two action values count as tied.
pub const VALUE_TOLERANCE: f64 = 1e-6;

/// Agent with a tabular value strategy.
pub type TabularAgent<S, A> = TdAgent<S, A, TabularValues<S, A>>;

/// Agent with a linear-approximation value strategy.
pub type LinearAgent<S, A> = TdAgent<S, A, LinearValues<S, A>>;

/// Agent with a runtime-chosen value strategy.
pub type DynAgent<S, A> = TdAgent<S, A, Box<dyn ValueStrategy<S, A>>>;

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// TD learning agent with epsilon-greedy action selection.
///
/// With probability `epsilon` the agent explores by drawing uniformly from
/// the legal-action set; otherwise it exploits the greedy action. Greedy
/// resolution collects *all* actions whose value ties with the maximum
/// (within [`VALUE_TOLERANCE`]) and picks uniformly among them; ties never
/// fall back to enumeration order. Note this deliberately diverges from the
/// classic reference implementation, which randomizes only when every legal
/// action ties; that variant biases the policy toward ordering artifacts of
/// the legal-action enumeration.
///
/// The agent owns its RNG; constructing it with
/// [`with_seed`](TdAgent::with_seed) makes every selection reproducible.
#[derive(Debug)]
pub struct TdAgent<S, A, V> {
    strategy: V,
    epsilon: f64,
    learning_enabled: bool,
    rng: StdRng,
    rng_seed: Option<u64>,
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A, V> TdAgent<S, A, V>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    V: ValueStrategy<S, A>,
{
    /// Create an agent around a value strategy.
    ///
    /// # Arguments
    ///
    /// * `strategy` - tabular or linear value estimation
    /// * `epsilon` - exploration probability in [0.0, 1.0]
    pub fn new(strategy: V, epsilon: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&epsilon));
        Self {
            strategy,
            epsilon,
            learning_enabled: true,
            rng: build_rng(None),
            rng_seed: None,
            _marker: PhantomData,
        }
    }

    /// Seed the agent's RNG for reproducible selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Reseed the agent's RNG.
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    /// The seed the RNG was last built from, if any.
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Current exploration probability.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Set the exploration probability. The controller flips this to 0.0
    /// when training episodes are exhausted.
    pub fn set_epsilon(&mut self, epsilon: f64) {
        debug_assert!((0.0..=1.0).contains(&epsilon));
        self.epsilon = epsilon;
    }

    /// Whether observed transitions still update the value strategy.
    pub fn learning_enabled(&self) -> bool {
        self.learning_enabled
    }

    /// Enable or disable learning. Disabled agents still select actions but
    /// ignore observed transitions.
    pub fn set_learning_enabled(&mut self, enabled: bool) {
        self.learning_enabled = enabled;
    }

    /// The plugged value strategy.
    pub fn strategy(&self) -> &V {
        &self.strategy
    }

    /// Current value estimate for a (state, action) pair.
    pub fn value(&self, state: &S, action: &A) -> f64 {
        self.strategy.value(state, action)
    }

    /// Value of a state under the current estimates: the maximum over its
    /// legal actions, 0.0 if the state is terminal.
    pub fn state_value<E: ActionSpace<S, A>>(&self, env: &E, state: &S) -> f64 {
        self.strategy.state_value(state, &env.legal_actions(state))
    }

    /// Epsilon-greedy action selection.
    ///
    /// Returns `None` exactly when the state has no legal actions. With
    /// probability `epsilon` the action is a uniform draw from the legal
    /// set; otherwise it is a greedy choice.
    pub fn select_action<E: ActionSpace<S, A>>(&mut self, env: &E, state: &S) -> Option<A> {
        let legal_actions = env.legal_actions(state);
        if legal_actions.is_empty() {
            return None;
        }

        if self.rng.random::<f64>() < self.epsilon {
            // Explore: uniform draw over the legal set.
            legal_actions.choose(&mut self.rng).cloned()
        } else {
            // Exploit: greedy action under the current estimates.
            self.greedy_among(state, &legal_actions)
        }
    }

    /// Greedy action selection with uniform tie-breaking.
    ///
    /// Returns `None` exactly when the state has no legal actions.
    pub fn greedy_action<E: ActionSpace<S, A>>(&mut self, env: &E, state: &S) -> Option<A> {
        let legal_actions = env.legal_actions(state);
        self.greedy_among(state, &legal_actions)
    }

    /// Observe one completed transition and let the strategy learn from it.
    ///
    /// Must be called exactly once per transition, after all four inputs
    /// are fixed. Does nothing when learning is disabled.
    pub fn observe_transition<E: ActionSpace<S, A>>(
        &mut self,
        env: &E,
        transition: &Transition<S, A>,
    ) {
        if !self.learning_enabled {
            return;
        }
        let next_legal_actions = env.legal_actions(&transition.next_state);
        self.strategy.update(
            &transition.state,
            &transition.action,
            &transition.next_state,
            &next_legal_actions,
            transition.reward,
        );
    }

    /// Discard learned values and rebuild the RNG from its seed.
    pub fn reset(&mut self) {
        self.strategy.reset();
        self.rng = build_rng(self.rng_seed);
    }

    /// Erase the strategy's concrete type, keeping its learned state.
    pub fn into_dyn(self) -> DynAgent<S, A>
    where
        V: 'static,
    {
        TdAgent {
            strategy: Box::new(self.strategy),
            epsilon: self.epsilon,
            learning_enabled: self.learning_enabled,
            rng: self.rng,
            rng_seed: self.rng_seed,
            _marker: PhantomData,
        }
    }

    fn greedy_among(&mut self, state: &S, legal_actions: &[A]) -> Option<A> {
        if legal_actions.is_empty() {
            return None;
        }

        let best_value = self.strategy.state_value(state, legal_actions);

        // All maximizers, not just the first: picking by enumeration order
        // under ties would leak the legal-action ordering into the policy.
        let maximizers: Vec<&A> = legal_actions
            .iter()
            .filter(|action| (self.strategy.value(state, action) - best_value).abs() < VALUE_TOLERANCE)
            .collect();

        maximizers.choose(&mut self.rng).map(|&action| action.clone())
    }
}
