//! In-memory agent repository for testing.
//!
//! This adapter provides a pure in-memory implementation of AgentRepository,
//! enabling fast tests without any file system I/O.

use std::{
    collections::HashMap,
    hash::Hash,
    path::Path,
    sync::{Arc, Mutex},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Result, agent::SavedAgent, error::Error, ports::AgentRepository};

/// In-memory repository for testing.
///
/// Stores serialized agents in a shared HashMap keyed by path, avoiding the
/// file system entirely. All clones share the same underlying storage, so a
/// test can hand one clone to the code under test and inspect through
/// another.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of agents currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Remove all stored agents.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    /// Whether an agent exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl<S, A> AgentRepository<S, A> for InMemoryRepository
where
    S: Eq + Hash + Serialize + DeserializeOwned,
    A: Eq + Hash + Serialize + DeserializeOwned,
{
    fn save(&self, agent: &SavedAgent<S, A>, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();

        let bytes = rmp_serde::to_vec(agent).map_err(|e| Error::SerializationContext {
            operation: "serialize agent for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<SavedAgent<S, A>> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let bytes = storage.get(&key).ok_or_else(|| Error::Io {
            operation: format!("load agent from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize agent from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        agent::{TdAgent, TrainingMetadata},
        ports::ValueStrategy,
        value::TabularValues,
    };

    fn saved_agent() -> SavedAgent<String, usize> {
        let mut values = TabularValues::new(0.5, 0.8);
        values.update(&"start".to_string(), &0, &"end".to_string(), &[], 4.0);
        SavedAgent::from_tabular(
            &TdAgent::new(values, 0.05),
            TrainingMetadata::default(),
        )
    }

    #[test]
    fn in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let saved = saved_agent();
        let path = Path::new("test_agent");

        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        repo.save(&saved, path).unwrap();
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        let loaded: SavedAgent<String, usize> = repo.load(path).unwrap();
        let restored = loaded.to_tabular().unwrap();
        assert_eq!(restored.value(&"start".to_string(), &0), 2.0);
    }

    #[test]
    fn load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        let result: Result<SavedAgent<String, usize>> = repo.load(Path::new("nonexistent"));
        assert!(result.is_err());
    }

    #[test]
    fn clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();

        repo1.save(&saved_agent(), Path::new("shared")).unwrap();

        let loaded: SavedAgent<String, usize> = repo2.load(Path::new("shared")).unwrap();
        assert_eq!(loaded.kind(), crate::agent::StrategyKind::Tabular);
        assert_eq!(repo1.count(), 1);
        assert_eq!(repo2.count(), 1);
    }

    #[test]
    fn clear_removes_all() {
        let repo = InMemoryRepository::new();
        repo.save(&saved_agent(), Path::new("a")).unwrap();
        repo.save(&saved_agent(), Path::new("b")).unwrap();
        assert_eq!(repo.count(), 2);

        repo.clear();
        assert_eq!(repo.count(), 0);
    }
}
