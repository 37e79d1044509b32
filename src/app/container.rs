//! Dependency injection container for the tdlearn application layer.
//!
//! This module provides centralized dependency management following
//! hexagonal architecture principles. The container owns infrastructure
//! dependencies (repository, extractor registry) and provides factory
//! methods for creating agents from validated configurations.

use std::{hash::Hash, path::Path, sync::Arc};

use serde::{Serialize, de::DeserializeOwned};

use super::{config::AgentConfig, registry::ExtractorRegistry};
use crate::{
    Result,
    adapters::MsgPackRepository,
    agent::{LinearAgent, RestoredAgent, SavedAgent, TabularAgent, TdAgent},
    ports::{AgentRepository, FeatureExtractor},
    value::{LinearValues, TabularValues},
};

/// Application container with dependency injection.
///
/// Owns the agent repository, the feature-extractor registry, and an
/// optional default seed, and wires them into the agents it creates.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use tdlearn::app::{AgentConfig, App};
///
/// let app: App<String, usize> = App::new();
/// let config = AgentConfig::new().with_seed(42);
/// let agent = app.create_tabular_agent(&config)?;
/// # Ok::<(), tdlearn::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use tdlearn::app::App;
/// use tdlearn::adapters::InMemoryRepository;
///
/// let app: App<String, usize> = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App<S: Eq + Hash, A: Eq + Hash> {
    repository: Arc<dyn AgentRepository<S, A> + Send + Sync>,
    extractors: ExtractorRegistry<S, A>,
    default_seed: Option<u64>,
}

impl<S, A> App<S, A>
where
    S: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
    A: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
{
    /// Create an app with production defaults: a [`MsgPackRepository`], an
    /// empty extractor registry, and no default seed.
    pub fn new() -> Self {
        Self {
            repository: Arc::new(MsgPackRepository::new()),
            extractors: ExtractorRegistry::new(),
            default_seed: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    ///
    /// Primarily used for testing with in-memory dependencies.
    pub fn for_testing() -> AppBuilder<S, A> {
        AppBuilder::new()
    }

    /// The agent repository.
    pub fn repository(&self) -> Arc<dyn AgentRepository<S, A> + Send + Sync> {
        Arc::clone(&self.repository)
    }

    /// The feature-extractor registry.
    pub fn extractors(&self) -> &ExtractorRegistry<S, A> {
        &self.extractors
    }

    /// Register a feature-extractor factory under a name.
    pub fn register_extractor<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn FeatureExtractor<S, A>> + Send + Sync + 'static,
    {
        self.extractors.register(name, factory);
    }

    /// Create a tabular agent from a validated configuration.
    pub fn create_tabular_agent(&self, config: &AgentConfig) -> Result<TabularAgent<S, A>> {
        config.validate()?;
        let strategy = TabularValues::new(config.learning_rate, config.discount);
        Ok(self.finish_agent(TdAgent::new(strategy, config.epsilon), config))
    }

    /// Create a linear agent whose extractor is resolved by name through
    /// the registry.
    pub fn create_linear_agent(
        &self,
        config: &AgentConfig,
        extractor: &str,
    ) -> Result<LinearAgent<S, A>> {
        let extractor = self.extractors.create(extractor)?;
        self.create_linear_agent_with(config, extractor)
    }

    /// Create a linear agent with a directly injected extractor instance.
    pub fn create_linear_agent_with(
        &self,
        config: &AgentConfig,
        extractor: Box<dyn FeatureExtractor<S, A>>,
    ) -> Result<LinearAgent<S, A>> {
        config.validate()?;
        let strategy = LinearValues::new(extractor, config.learning_rate, config.discount);
        Ok(self.finish_agent(TdAgent::new(strategy, config.epsilon), config))
    }

    /// Save an agent snapshot through the configured repository.
    pub fn save_agent(&self, saved: &SavedAgent<S, A>, path: &Path) -> Result<()> {
        self.repository.save(saved, path)
    }

    /// Load an agent from the configured repository, rehydrating linear
    /// extractors through the registry. The container's default seed, if
    /// any, reseeds the restored agent.
    pub fn load_agent(&self, path: &Path) -> Result<RestoredAgent<S, A>> {
        let saved = self.repository.load(path)?;
        let mut restored = saved.restore(&self.extractors)?;

        if let Some(seed) = self.default_seed {
            match &mut restored {
                RestoredAgent::Tabular(agent) => agent.set_rng_seed(seed),
                RestoredAgent::Linear(agent) => agent.set_rng_seed(seed),
            }
        }

        Ok(restored)
    }

    fn finish_agent<V>(&self, agent: TdAgent<S, A, V>, config: &AgentConfig) -> TdAgent<S, A, V>
    where
        V: crate::ports::ValueStrategy<S, A>,
    {
        // Config seed wins over the container default.
        match config.seed.or(self.default_seed) {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        }
    }
}

impl<S, A> Default for App<S, A>
where
    S: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
    A: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an app with custom dependencies.
pub struct AppBuilder<S: Eq + Hash, A: Eq + Hash> {
    repository: Option<Arc<dyn AgentRepository<S, A> + Send + Sync>>,
    extractors: Option<ExtractorRegistry<S, A>>,
    default_seed: Option<u64>,
}

impl<S, A> AppBuilder<S, A>
where
    S: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
    A: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
{
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            repository: None,
            extractors: None,
            default_seed: None,
        }
    }

    /// Set a custom agent repository.
    pub fn with_repository<R: AgentRepository<S, A> + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.repository = Some(Arc::new(repo));
        self
    }

    /// Set the feature-extractor registry.
    pub fn with_extractors(mut self, extractors: ExtractorRegistry<S, A>) -> Self {
        self.extractors = Some(extractors);
        self
    }

    /// Set a default random seed for all agents created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// Falls back to a [`MsgPackRepository`] and an empty registry where
    /// nothing was specified.
    pub fn build(self) -> App<S, A> {
        App {
            repository: self
                .repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            extractors: self.extractors.unwrap_or_default(),
            default_seed: self.default_seed,
        }
    }
}

impl<S, A> Default for AppBuilder<S, A>
where
    S: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
    A: Eq + Hash + Clone + Send + Serialize + DeserializeOwned + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
