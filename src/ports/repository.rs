//! Repository port for agent persistence.
//!
//! This module defines the trait boundary between the domain and
//! infrastructure layers for storing and retrieving serialized agents.

use std::path::Path;

use crate::{Result, agent::SavedAgent};

/// Port for persisting and loading serialized agent snapshots.
///
/// The trait abstracts the storage mechanism, allowing different
/// implementations (MessagePack files, in-memory stores for tests, a
/// database) without coupling the domain logic to a serialization format.
pub trait AgentRepository<S: Eq + std::hash::Hash, A: Eq + std::hash::Hash> {
    /// Save an agent snapshot to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization
    /// fails.
    fn save(&self, agent: &SavedAgent<S, A>, path: &Path) -> Result<()>;

    /// Load an agent snapshot from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or
    /// holds an invalid or corrupted snapshot.
    fn load(&self, path: &Path) -> Result<SavedAgent<S, A>>;
}
