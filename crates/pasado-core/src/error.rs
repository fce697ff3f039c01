//! Pool loading error types.
//!
//! These are the only real errors the core produces: everything at
//! drill time degrades silently (missing stats load as defaults, empty
//! pools select nothing), but a pool file the host handed us that
//! doesn't parse is a contract violation worth reporting precisely.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an exercise pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The pool file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A TOML pool file failed to parse.
    #[error("failed to parse TOML pool {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    /// A JSON pool file failed to parse.
    #[error("failed to parse JSON pool {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A directory was expected but not found.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
