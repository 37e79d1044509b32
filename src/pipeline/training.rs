//! Training pipeline driving an agent against an environment

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    agent::TdAgent,
    ports::{Environment, TrainingObserver, ValueStrategy},
    types::Transition,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Total number of episodes to run
    pub num_episodes: usize,

    /// Episode count after which exploration and learning are switched off
    /// on the agent. `None` keeps learning for the whole run. This is a
    /// controller responsibility: the agent only exposes the switches.
    pub num_training: Option<usize>,

    /// Per-episode step cap, guarding against environments that never
    /// reach a terminal state
    pub max_steps: usize,

    /// Random seed applied to the agent before the first episode
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_episodes: 500,
            num_training: None,
            max_steps: 10_000,
            seed: None,
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Episodes completed
    pub episodes: usize,

    /// Total environment steps across all episodes
    pub total_steps: usize,

    /// Mean undiscounted return per episode
    pub mean_return: f64,

    /// Undiscounted return of each episode, in order
    pub episode_returns: Vec<f64>,
}

impl TrainingResult {
    /// Assemble a result from per-episode returns.
    pub fn new(episode_returns: Vec<f64>, total_steps: usize) -> Self {
        let episodes = episode_returns.len();
        let mean_return = if episodes > 0 {
            episode_returns.iter().sum::<f64>() / episodes as f64
        } else {
            0.0
        };

        Self {
            episodes,
            total_steps,
            mean_return,
            episode_returns,
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Training pipeline for a single agent against an environment
pub struct TrainingPipeline<S, A> {
    config: TrainingConfig,
    observers: Vec<Box<dyn TrainingObserver<S, A>>>,
}

impl<S, A> TrainingPipeline<S, A>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
{
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn TrainingObserver<S, A>>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run training with the given agent and environment.
    ///
    /// Each episode runs the select → notify → transition → observe loop
    /// until the environment reports a state with no legal actions (or the
    /// step cap trips). After `num_training` episodes the agent's
    /// exploration and learning are switched off and the remaining episodes
    /// evaluate the greedy policy.
    pub fn run<E, V>(
        &mut self,
        env: &mut E,
        agent: &mut TdAgent<S, A, V>,
    ) -> Result<TrainingResult>
    where
        E: Environment<S, A>,
        V: ValueStrategy<S, A>,
    {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed);
        }

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_episodes)?;
        }

        let mut episode_returns = Vec::with_capacity(self.config.num_episodes);
        let mut total_steps = 0;

        for episode in 0..self.config.num_episodes {
            if self.config.num_training == Some(episode) {
                agent.set_epsilon(0.0);
                agent.set_learning_enabled(false);
            }

            for observer in &mut self.observers {
                observer.on_episode_start(episode)?;
            }

            let (episode_return, steps) = self.run_episode(episode, env, agent)?;
            total_steps += steps;

            for observer in &mut self.observers {
                observer.on_episode_end(episode, episode_return, steps)?;
            }
            episode_returns.push(episode_return);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        Ok(TrainingResult::new(episode_returns, total_steps))
    }

    fn run_episode<E, V>(
        &mut self,
        episode: usize,
        env: &mut E,
        agent: &mut TdAgent<S, A, V>,
    ) -> Result<(f64, usize)>
    where
        E: Environment<S, A>,
        V: ValueStrategy<S, A>,
    {
        let mut state = env.initial_state();
        let mut episode_return = 0.0;
        let mut steps = 0;

        // Selection returning None means the state has no legal actions,
        // which is the episode's terminal condition.
        while let Some(action) = agent.select_action(&*env, &state) {
            env.notify_action_taken(&state, &action);
            let (next_state, reward) = env.transition(&state, &action);

            let transition = Transition::new(state, action, next_state, reward);
            agent.observe_transition(&*env, &transition);
            for observer in &mut self.observers {
                observer.on_transition(episode, steps, &transition)?;
            }

            episode_return += reward;
            steps += 1;
            state = transition.next_state;

            if steps >= self.config.max_steps {
                break;
            }
        }

        Ok((episode_return, steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ports::ActionSpace,
        value::TabularValues,
    };

    /// A corridor of `length` cells; Right moves toward the exit with
    /// reward 1.0 on the final step, Left moves back for free.
    struct Corridor {
        length: usize,
    }

    impl ActionSpace<usize, char> for Corridor {
        fn legal_actions(&self, state: &usize) -> Vec<char> {
            if *state >= self.length {
                vec![]
            } else if *state == 0 {
                vec!['R']
            } else {
                vec!['L', 'R']
            }
        }
    }

    impl Environment<usize, char> for Corridor {
        fn initial_state(&mut self) -> usize {
            0
        }

        fn transition(&mut self, state: &usize, action: &char) -> (usize, f64) {
            match action {
                'L' => (state - 1, 0.0),
                _ => {
                    let next = state + 1;
                    let reward = if next == self.length { 1.0 } else { 0.0 };
                    (next, reward)
                }
            }
        }
    }

    #[test]
    fn training_runs_all_episodes() {
        let config = TrainingConfig {
            num_episodes: 10,
            num_training: None,
            max_steps: 100,
            seed: Some(42),
        };

        let mut pipeline = TrainingPipeline::new(config);
        let mut env = Corridor { length: 4 };
        let mut agent = TdAgent::new(TabularValues::new(0.5, 0.9), 0.1);

        let result = pipeline.run(&mut env, &mut agent).unwrap();

        assert_eq!(result.episodes, 10);
        assert_eq!(result.episode_returns.len(), 10);
        // Every episode ends by reaching the exit, collecting the 1.0.
        assert!(result.episode_returns.iter().all(|&r| r == 1.0));
        assert_eq!(agent.rng_seed(), Some(42));
    }

    #[test]
    fn num_training_freezes_exploration_and_learning() {
        let config = TrainingConfig {
            num_episodes: 6,
            num_training: Some(3),
            max_steps: 100,
            seed: Some(7),
        };

        let mut pipeline = TrainingPipeline::new(config);
        let mut env = Corridor { length: 3 };
        let mut agent = TdAgent::new(TabularValues::new(0.5, 0.9), 0.5);

        pipeline.run(&mut env, &mut agent).unwrap();

        assert_eq!(agent.epsilon(), 0.0);
        assert!(!agent.learning_enabled());
    }

    #[test]
    fn max_steps_caps_runaway_episodes() {
        // Epsilon 0 with an all-zero table can bounce between L and R
        // forever; the cap must end the episode regardless.
        let config = TrainingConfig {
            num_episodes: 1,
            num_training: None,
            max_steps: 5,
            seed: Some(1),
        };

        let mut pipeline = TrainingPipeline::new(config);
        let mut env = Corridor { length: 1_000 };
        let mut agent = TdAgent::new(TabularValues::new(0.5, 0.9), 1.0);

        let result = pipeline.run(&mut env, &mut agent).unwrap();
        assert_eq!(result.total_steps, 5);
    }

    #[test]
    fn result_statistics_are_consistent() {
        let result = TrainingResult::new(vec![1.0, 0.0, 2.0], 30);
        assert_eq!(result.episodes, 3);
        assert_eq!(result.total_steps, 30);
        assert!((result.mean_return - 1.0).abs() < 1e-12);
    }

    #[test]
    fn result_roundtrips_through_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("result.json");

        let result = TrainingResult::new(vec![0.5, 1.5], 12);
        result.save(&path).unwrap();
        let loaded = TrainingResult::load(&path).unwrap();

        assert_eq!(loaded.episodes, 2);
        assert_eq!(loaded.episode_returns, vec![0.5, 1.5]);
    }
}
