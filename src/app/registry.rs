//! Explicit name → constructor registry for feature extractors.

use std::{
    collections::HashMap,
    fmt::{self, Debug},
};

use crate::{
    adapters::IdentityExtractor,
    error::{Error, Result},
    ports::FeatureExtractor,
};

/// Factory producing a fresh boxed extractor.
pub type ExtractorFactory<S, A> = Box<dyn Fn() -> Box<dyn FeatureExtractor<S, A>> + Send + Sync>;

/// Registry mapping extractor names to constructors.
///
/// Feature extractors are code, not data, so serialized agents reference
/// them by name and the registry resolves the name back to an instance on
/// load. The mapping is explicit: nothing is looked up by reflection or
/// runtime type name, only what was registered can be created.
pub struct ExtractorRegistry<S, A> {
    factories: HashMap<String, ExtractorFactory<S, A>>,
}

impl<S, A> ExtractorRegistry<S, A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the built-in `"identity"` extractor
    /// registered.
    pub fn with_identity() -> Self
    where
        S: Debug + 'static,
        A: Debug + 'static,
    {
        let mut registry = Self::new();
        registry.register("identity", || Box::new(IdentityExtractor::new()));
        registry
    }

    /// Register a factory under a name, replacing any previous registration
    /// with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn FeatureExtractor<S, A>> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Instantiate the extractor registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownExtractor`] listing the registered names when
    /// `name` was never registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn FeatureExtractor<S, A>>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(Error::UnknownExtractor {
                name: name.to_string(),
                registered: self.names().join(", "),
            }),
        }
    }

    /// Whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S, A> Default for ExtractorRegistry<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> fmt::Debug for ExtractorRegistry<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("names", &self.names())
            .finish()
    }
}
