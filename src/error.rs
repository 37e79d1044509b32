//! Error types for the tdlearn crate

use thiserror::Error;

/// Main error type for the tdlearn crate
///
/// Value estimation itself has no failure modes: every lookup on an unseen
/// key resolves to 0.0 and an empty legal-action set yields `None` / 0.0.
/// These variants cover the surrounding surface only: configuration
/// validation, extractor registry lookups, persistence, and export.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid {name} {value}: expected a value in {expected}")]
    InvalidHyperparameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("unknown feature extractor '{name}' (registered: {registered})")]
    UnknownExtractor { name: String, registered: String },

    #[error("unsupported save format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("saved agent holds a {found} strategy, not a {requested} one")]
    StrategyMismatch {
        found: &'static str,
        requested: &'static str,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
