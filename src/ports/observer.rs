//! Observer port - abstraction for training observation and data collection
//!
//! Observers allow composable data collection during training without
//! coupling the pipeline to specific output formats or metrics.

use crate::{Result, types::Transition};

/// Observer trait for monitoring training runs.
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_transition(...)` - for each observed transition
///    - `on_episode_end(episode, episode_return, steps)`
/// 3. `on_training_end()` - once at the end
///
/// All methods default to no-ops, so an observer implements only the events
/// it cares about.
pub trait TrainingObserver<S, A>: Send {
    /// Called once before the first episode.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode starts.
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called for each transition, after the learner has observed it.
    fn on_transition(
        &mut self,
        _episode: usize,
        _step: usize,
        _transition: &Transition<S, A>,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends, with the undiscounted return and the
    /// number of steps taken.
    fn on_episode_end(&mut self, _episode: usize, _episode_return: f64, _steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
