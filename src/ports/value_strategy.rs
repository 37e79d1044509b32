//! Value-strategy port - the pluggable estimation capability pair
//!
//! A single agent type holds one value strategy; tabular and
//! linear-approximate estimation both satisfy this interface, so
//! epsilon-greedy selection and episode bookkeeping are written once,
//! independent of which strategy is plugged in.

/// Pluggable action-value estimation.
///
/// A strategy answers two questions: what is the current estimate for a
/// (state, action) pair, and how should one observed transition move that
/// estimate toward its one-step bootstrapped target. Implementations own
/// their learned store (Q-table or weight vector) together with the step
/// size and discount that shape the update.
///
/// Lookups never fail and never mutate: an unseen pair reads as 0.0, and a
/// state with no legal actions has value 0.0 by definition.
pub trait ValueStrategy<S, A>: Send {
    /// Current estimate for taking `action` in `state`.
    ///
    /// Returns 0.0 for pairs no update has touched. No side effects.
    fn value(&self, state: &S, action: &A) -> f64;

    /// Value of a state: the maximum estimate over its legal actions.
    ///
    /// An empty legal-action set is the definition of a terminal state and
    /// yields 0.0 here, not as a special case anywhere else.
    fn state_value(&self, state: &S, legal_actions: &[A]) -> f64 {
        if legal_actions.is_empty() {
            return 0.0;
        }
        legal_actions
            .iter()
            .map(|action| self.value(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Apply one TD update for an observed transition.
    ///
    /// `next_legal_actions` is the legal-action set of `next_state` as
    /// reported by the environment collaborator; empty means the transition
    /// ended the episode and the future value term is exactly 0.0. Called
    /// exactly once per observed transition, strictly after all four inputs
    /// are fixed.
    fn update(
        &mut self,
        state: &S,
        action: &A,
        next_state: &S,
        next_legal_actions: &[A],
        reward: f64,
    );

    /// Discard everything learned, returning to the initial empty store.
    fn reset(&mut self);

    /// Short identifier used in saved-agent metadata and logging.
    fn name(&self) -> &'static str;
}

impl<S, A> ValueStrategy<S, A> for Box<dyn ValueStrategy<S, A>> {
    fn value(&self, state: &S, action: &A) -> f64 {
        (**self).value(state, action)
    }

    fn state_value(&self, state: &S, legal_actions: &[A]) -> f64 {
        (**self).state_value(state, legal_actions)
    }

    fn update(
        &mut self,
        state: &S,
        action: &A,
        next_state: &S,
        next_legal_actions: &[A],
        reward: f64,
    ) {
        (**self).update(state, action, next_state, next_legal_actions, reward)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
