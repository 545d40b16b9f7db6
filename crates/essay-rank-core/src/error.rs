//! Error types for essay-rank-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading essay text from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The path does not reference an existing file.
    #[error("file not found: {path}")]
    NotFound {
        /// The path that was requested.
        path: Utf8PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        /// The path that was being read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid UTF-8 text.
    #[error("{path} is not valid UTF-8 text")]
    Decode {
        /// The path whose content failed to decode.
        path: Utf8PathBuf,
    },

    /// The file exceeds the configured input size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The path that was rejected.
        path: Utf8PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },
}

/// Result type alias using [`LoadError`].
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur when validating a ranking request.
#[derive(Error, Debug)]
pub enum RankError {
    /// The requested word count is negative.
    #[error("word count must be a non-negative integer, got {value}")]
    InvalidCount {
        /// The rejected value.
        value: i64,
    },
}

/// Result type alias using [`RankError`].
pub type RankResult<T> = Result<T, RankError>;
