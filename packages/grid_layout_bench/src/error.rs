use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing a benchmark run.
///
/// The benchmark phases themselves cannot fail; every error originates from the
/// configuration boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A configuration value was outside the range the benchmark can work with.
    #[error("invalid configuration: '{field}' {problem}")]
    InvalidConfig {
        /// Name of the offending configuration field.
        field: String,

        /// A human-readable description of the problem.
        problem: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read configuration file '{}': {source}", .path.display())]
    ConfigRead {
        /// The path we attempted to read.
        path: PathBuf,

        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file was not valid TOML.
    #[error("failed to parse configuration from {origin}: {source}")]
    ConfigParse {
        /// Where the configuration text came from (a path or a description).
        origin: String,

        /// The underlying parse failure.
        #[source]
        source: toml::de::Error,
    },

    /// A grid variant name did not match any known representation.
    #[error("unknown grid variant '{0}', expected one of: nested, view, manual, dense")]
    UnknownVariant(String),
}

impl Error {
    pub(crate) fn invalid_config(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

/// A specialized `Result` type for benchmark preparation, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
