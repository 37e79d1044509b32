//! The TD learning agent and its persistence snapshot
//!
//! [`TdAgent`] composes a value strategy with epsilon-greedy action
//! selection; [`SavedAgent`] is its versioned serialized form.

pub mod serialization;
pub mod td_agent;

// Public re-exports
pub use serialization::{RestoredAgent, SavedAgent, StrategyKind, TrainingMetadata};
pub use td_agent::{DynAgent, LinearAgent, TabularAgent, TdAgent, VALUE_TOLERANCE};
