//! Environment ports - the simulation collaborator's interface
//!
//! The learner never models the environment; it only consumes these
//! interfaces. Environment dynamics themselves live outside the crate
//! (the test suite carries toy implementations).

/// Source of the per-state legal-action set.
///
/// This is the one interface the learning core itself depends on: both the
/// policy (which actions may be selected) and the updater (which actions
/// bound the future-value maximum) consume it.
///
/// # Caller contract
///
/// An empty return value defines the state as terminal. If a state that is
/// actually terminal is reported with a non-empty legal set, the learner
/// will silently overestimate future value; this is a caller contract, not
/// a detectable error.
pub trait ActionSpace<S, A> {
    /// Legal actions available in `state`, in the environment's order.
    /// Empty means `state` is terminal.
    fn legal_actions(&self, state: &S) -> Vec<A>;
}

/// Full simulation interface consumed by the training pipeline.
///
/// Implementations may be stochastic and keep internal RNG state, hence the
/// `&mut self` receivers on [`initial_state`](Environment::initial_state)
/// and [`transition`](Environment::transition).
pub trait Environment<S, A>: ActionSpace<S, A> {
    /// Produce the starting state of a fresh episode.
    fn initial_state(&mut self) -> S;

    /// Execute `action` in `state`, returning the successor state and the
    /// immediate reward. Terminality of the successor is judged through
    /// [`ActionSpace::legal_actions`], never through a sentinel value.
    fn transition(&mut self, state: &S, action: &A) -> (S, f64);

    /// Bookkeeping hook invoked after an action has been selected but
    /// before the transition executes. The default does nothing.
    fn notify_action_taken(&mut self, _state: &S, _action: &A) {}
}
