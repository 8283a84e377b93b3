// src/errors.rs

//! Crate-wide error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftrunError {
    /// Caller violated a precondition that the type system still lets
    /// through (empty storage path, bad registration, ...).
    #[error("usage error: {0}")]
    Usage(String),

    /// A referenced configuration, pipeline or input file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// A document parsed, but not into the expected shape.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An invoked job signalled failure. Aborts the remaining pipeline.
    #[error("job '{job}' failed: {source}")]
    JobFailed {
        job: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DriftrunError>;
