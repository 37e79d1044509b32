//! Temporal-difference action-value estimation
//!
//! This crate provides:
//! - Tabular Q-learning with explicit default-valued Q-table storage
//! - Linear-function-approximation Q-learning over sparse features
//! - Epsilon-greedy action selection with uniform tie-breaking among
//!   value maximizers
//! - A training pipeline with composable observers, agent persistence,
//!   and CSV export for analysis
//!
//! The learner is generic over opaque state and action types and consumes
//! its environment purely through the [`ports`] traits: a state is terminal
//! exactly when its legal-action set is empty, every unseen value reads as
//! 0.0, and learning happens one observed transition at a time.

pub mod adapters;
pub mod agent;
pub mod app;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod ports;
pub mod types;
pub mod value;

pub use agent::{
    DynAgent, LinearAgent, RestoredAgent, SavedAgent, StrategyKind, TabularAgent, TdAgent,
    TrainingMetadata, VALUE_TOLERANCE,
};
pub use app::{AgentConfig, App, ExtractorRegistry};
pub use error::{Error, Result};
pub use pipeline::{TrainingConfig, TrainingPipeline, TrainingResult};
pub use ports::{ActionSpace, Environment, FeatureExtractor, TrainingObserver, ValueStrategy};
pub use types::{FeatureKey, Transition};
pub use value::{FeatureVector, LinearValues, QTable, TabularValues, WeightVector};
