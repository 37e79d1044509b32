//! Serialization support for TD learning agents.

use std::{
    fs::File,
    hash::Hash,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::Context;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    agent::td_agent::{DynAgent, LinearAgent, TabularAgent, TdAgent},
    app::ExtractorRegistry,
    error::{Error, Result},
    value::{LinearValues, TabularValues, WeightVector},
};

/// Which value strategy a saved agent holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Tabular,
    Linear,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Tabular => "tabular",
            StrategyKind::Linear => "linear",
        }
    }
}

/// Provenance of a saved agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMetadata {
    /// Episodes the agent was trained for before saving
    pub episodes: usize,
    /// Free-form description of the environment it was trained on
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum StrategySnapshot<S: Eq + Hash, A: Eq + Hash> {
    Tabular(TabularValues<S, A>),
    Linear {
        weights: WeightVector,
        extractor: String,
        learning_rate: f64,
        discount: f64,
    },
}

/// Versioned serialized form of a [`TdAgent`].
///
/// A tabular snapshot carries the whole strategy. A linear snapshot carries
/// the learned weights plus the *name* of its feature extractor: extractors
/// are code, not data, so restoration resolves the name through an
/// [`ExtractorRegistry`] and fails cleanly when the projection the agent
/// was trained with is not registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAgent<S: Eq + Hash, A: Eq + Hash> {
    pub version: u32,
    epsilon: f64,
    rng_seed: Option<u64>,
    strategy: StrategySnapshot<S, A>,
    pub metadata: TrainingMetadata,
}

/// An agent restored from a snapshot, tagged by its strategy.
pub enum RestoredAgent<S: Eq + Hash, A: Eq + Hash> {
    Tabular(TabularAgent<S, A>),
    Linear(LinearAgent<S, A>),
}

impl<S, A> RestoredAgent<S, A>
where
    S: Eq + Hash + Clone + Send + 'static,
    A: Eq + Hash + Clone + Send + 'static,
{
    /// Erase the strategy's concrete type.
    pub fn into_dyn(self) -> DynAgent<S, A> {
        match self {
            RestoredAgent::Tabular(agent) => agent.into_dyn(),
            RestoredAgent::Linear(agent) => agent.into_dyn(),
        }
    }
}

fn rebuild<S, A, V>(strategy: V, epsilon: f64, rng_seed: Option<u64>) -> TdAgent<S, A, V>
where
    S: Eq + Hash + Clone,
    A: Eq + Hash + Clone,
    V: crate::ports::ValueStrategy<S, A>,
{
    let agent = TdAgent::new(strategy, epsilon);
    match rng_seed {
        Some(seed) => agent.with_seed(seed),
        None => agent,
    }
}

impl<S, A> SavedAgent<S, A>
where
    S: Eq + Hash + Clone + Send,
    A: Eq + Hash + Clone + Send,
{
    pub const VERSION: u32 = 1;

    /// Snapshot a tabular agent.
    pub fn from_tabular(agent: &TabularAgent<S, A>, metadata: TrainingMetadata) -> Self {
        Self {
            version: Self::VERSION,
            epsilon: agent.epsilon(),
            rng_seed: agent.rng_seed(),
            strategy: StrategySnapshot::Tabular(agent.strategy().clone()),
            metadata,
        }
    }

    /// Snapshot a linear agent. The extractor itself is not serialized;
    /// only its registry name travels with the weights.
    pub fn from_linear(agent: &LinearAgent<S, A>, metadata: TrainingMetadata) -> Self {
        let strategy = agent.strategy();
        Self {
            version: Self::VERSION,
            epsilon: agent.epsilon(),
            rng_seed: agent.rng_seed(),
            strategy: StrategySnapshot::Linear {
                weights: strategy.weights().clone(),
                extractor: strategy.extractor_name().to_string(),
                learning_rate: strategy.learning_rate(),
                discount: strategy.discount(),
            },
            metadata,
        }
    }

    /// Which strategy this snapshot holds.
    pub fn kind(&self) -> StrategyKind {
        match &self.strategy {
            StrategySnapshot::Tabular(_) => StrategyKind::Tabular,
            StrategySnapshot::Linear { .. } => StrategyKind::Linear,
        }
    }

    fn check_version(&self) -> Result<()> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        Ok(())
    }

    /// Restore a tabular agent from this snapshot.
    pub fn to_tabular(&self) -> Result<TabularAgent<S, A>> {
        self.check_version()?;
        match &self.strategy {
            StrategySnapshot::Tabular(values) => {
                Ok(rebuild(values.clone(), self.epsilon, self.rng_seed))
            }
            StrategySnapshot::Linear { .. } => Err(Error::StrategyMismatch {
                found: "linear",
                requested: "tabular",
            }),
        }
    }

    /// Restore a linear agent, resolving its extractor through `registry`.
    pub fn to_linear(&self, registry: &ExtractorRegistry<S, A>) -> Result<LinearAgent<S, A>> {
        self.check_version()?;
        match &self.strategy {
            StrategySnapshot::Linear {
                weights,
                extractor,
                learning_rate,
                discount,
            } => {
                let extractor = registry.create(extractor)?;
                let values = LinearValues::from_parts(
                    extractor,
                    weights.clone(),
                    *learning_rate,
                    *discount,
                );
                Ok(rebuild(values, self.epsilon, self.rng_seed))
            }
            StrategySnapshot::Tabular(_) => Err(Error::StrategyMismatch {
                found: "tabular",
                requested: "linear",
            }),
        }
    }

    /// Restore whichever agent this snapshot holds.
    pub fn restore(&self, registry: &ExtractorRegistry<S, A>) -> Result<RestoredAgent<S, A>> {
        match self.kind() {
            StrategyKind::Tabular => Ok(RestoredAgent::Tabular(self.to_tabular()?)),
            StrategyKind::Linear => Ok(RestoredAgent::Linear(self.to_linear(registry)?)),
        }
    }
}

impl<S, A> SavedAgent<S, A>
where
    S: Eq + Hash + Serialize + DeserializeOwned,
    A: Eq + Hash + Serialize + DeserializeOwned,
{
    /// Write the snapshot to a MessagePack file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write(&mut writer, self).context("Failed to serialize agent")?;

        Ok(())
    }

    /// Read a snapshot back from a MessagePack file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        rmp_serde::decode::from_read(reader).context("Failed to deserialize agent")
    }
}
