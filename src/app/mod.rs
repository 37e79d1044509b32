//! Application layer with dependency injection container.
//!
//! This module wires the crate together the way an embedding application
//! consumes it: a validated [`AgentConfig`], an explicit [`ExtractorRegistry`]
//! mapping extractor names to constructors, and an [`App`] container that
//! owns the repository and registry and hands out ready-made agents.

pub mod config;
pub mod container;
pub mod registry;

pub use config::AgentConfig;
pub use container::{App, AppBuilder};
pub use registry::ExtractorRegistry;
