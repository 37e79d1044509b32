//! Training pipeline for TD learning agents
//!
//! The pipeline is the external episode controller of the learner: it asks
//! the agent for actions, executes them against an
//! [`Environment`](crate::ports::Environment), feeds the observed
//! transitions back, and fans lifecycle events out to observers. The
//! learner itself never knows about episodes; terminality only ever reaches
//! it as an empty legal-action set.

pub mod observers;
pub mod training;

// Public re-exports
pub use observers::{JsonlObserver, MetricsObserver, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};
