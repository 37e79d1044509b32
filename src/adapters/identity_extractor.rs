//! Identity feature projection: one indicator feature per (state, action) pair.

use std::{fmt::Debug, marker::PhantomData};

use crate::{
    ports::FeatureExtractor,
    types::FeatureKey,
    value::FeatureVector,
};

/// The identity projection.
///
/// Emits a single indicator feature with value 1.0 whose key names the
/// (state, action) pair itself, so a linear strategy over these features
/// degenerates to a tabular one: every pair gets its own weight and nothing
/// generalizes. Useful as a baseline and as the default projection when no
/// domain features exist yet.
///
/// Keys are derived from the pair's `Debug` rendering, which must be
/// injective per pair (derived `Debug` on field-less or data-carrying enums
/// and structs is).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityExtractor<S, A> {
    _marker: PhantomData<fn() -> (S, A)>,
}

impl<S, A> IdentityExtractor<S, A> {
    /// Create an identity extractor.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S: Debug, A: Debug> FeatureExtractor<S, A> for IdentityExtractor<S, A> {
    fn features(&self, state: &S, action: &A) -> FeatureVector {
        let key = FeatureKey::new(format!("{state:?}|{action:?}"));
        [(key, 1.0)].into_iter().collect()
    }

    fn name(&self) -> &str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_indicator_feature_per_pair() {
        let extractor: IdentityExtractor<&str, usize> = IdentityExtractor::new();
        let features = extractor.features(&"s", &3);

        assert_eq!(features.len(), 1);
        assert_eq!(features.get(&FeatureKey::new("\"s\"|3")), 1.0);
    }

    #[test]
    fn distinct_pairs_get_distinct_keys() {
        let extractor: IdentityExtractor<&str, usize> = IdentityExtractor::new();
        let first = extractor.features(&"s", &0);
        let second = extractor.features(&"s", &1);
        let third = extractor.features(&"t", &0);

        assert_ne!(first, second);
        assert_ne!(first, third);
        assert_ne!(second, third);
    }
}
