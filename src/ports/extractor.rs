//! Feature-extractor port - the feature-engineering collaborator

use crate::value::FeatureVector;

/// Sparse feature projection of a (state, action) pair.
///
/// The linear value strategy is exactly as good as the features it is
/// given; designing them is the collaborator's concern, not this crate's.
/// Extractors must be deterministic and side-effect-free for a given input
/// pair: the updater calls [`features`](FeatureExtractor::features) on the
/// same pair it computed the TD error for and relies on getting the same
/// vector back.
///
/// The [`name`](FeatureExtractor::name) identifies the extractor in an
/// [`ExtractorRegistry`](crate::app::ExtractorRegistry) and in saved
/// agents, so a persisted linear agent can be rehydrated with the same
/// projection it was trained with.
pub trait FeatureExtractor<S, A>: Send {
    /// Compute the sparse feature vector for a (state, action) pair.
    fn features(&self, state: &S, action: &A) -> FeatureVector;

    /// Registry name of this extractor.
    fn name(&self) -> &str;
}
