//! Ports (trait boundaries) for pluggable behavior and external collaborators.
//!
//! This module defines the interfaces between the learning core and
//! everything around it. Following hexagonal architecture, these traits are
//! owned by the domain and implemented either by the crate's own adapters or
//! by the embedding application:
//!
//! - [`ValueStrategy`] - the pluggable value-estimation capability pair
//! - [`ActionSpace`] / [`Environment`] - the simulation collaborator
//! - [`FeatureExtractor`] - the feature-engineering collaborator
//! - [`TrainingObserver`] - episode-lifecycle observation
//! - [`AgentRepository`] - persistence boundary

pub mod environment;
pub mod extractor;
pub mod observer;
pub mod repository;
pub mod value_strategy;

pub use environment::{ActionSpace, Environment};
pub use extractor::FeatureExtractor;
pub use observer::TrainingObserver;
pub use repository::AgentRepository;
pub use value_strategy::ValueStrategy;
