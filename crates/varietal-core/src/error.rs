use thiserror::Error;

/// Error type shared across the varietal crates.
///
/// Every variant is fail-fast: the engine never retries, and a single failing
/// attribute aborts the whole generation call.
#[derive(Debug, Error)]
pub enum Error {
    /// A validating coercion received a value of the wrong shape.
    #[error("invalid type: expected {expected}, found {found}")]
    InvalidType {
        expected: &'static str,
        found: String,
    },
    /// A random pick or list was requested from an empty collection.
    #[error("empty input: {0}")]
    EmptyInput(String),
    /// Nesting depth or result-set size went past the configured limits.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),
    /// A helper received an argument it cannot interpret.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Options could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub fn invalid_type(expected: &'static str, found: impl Into<String>) -> Self {
        Error::InvalidType {
            expected,
            found: found.into(),
        }
    }
}

/// Convenience alias for results returned by varietal crates.
pub type Result<T> = std::result::Result<T, Error>;
