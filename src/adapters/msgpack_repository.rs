//! MessagePack implementation of the agent repository.
//!
//! This adapter implements the AgentRepository port using rmp_serde for
//! compact binary serialization.

use std::{fs::File, hash::Hash, marker::PhantomData, path::Path};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    Result,
    agent::SavedAgent,
    error::Error,
    ports::AgentRepository,
};

/// MessagePack-based agent repository.
///
/// Provides persistent storage using the MessagePack binary format via
/// rmp_serde. This format offers good compression and fast
/// serialization/deserialization.
#[derive(Debug, Clone, Copy)]
pub struct MsgPackRepository<S, A> {
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A> MsgPackRepository<S, A> {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S, A> Default for MsgPackRepository<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> AgentRepository<S, A> for MsgPackRepository<S, A>
where
    S: Eq + Hash + Serialize + DeserializeOwned,
    A: Eq + Hash + Serialize + DeserializeOwned,
{
    fn save(&self, agent: &SavedAgent<S, A>, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, agent).map_err(|e| Error::SerializationContext {
            operation: "serialize agent to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<SavedAgent<S, A>> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let agent =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize agent from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        Ok(agent)
    }
}
