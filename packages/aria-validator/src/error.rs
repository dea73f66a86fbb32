//! Errors
//!
//! Failures while building an allow-list or loading validator configuration.
//! Unknown attributes are never errors; they are reported as diagnostics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing or loading an [`AllowList`](crate::schema::AllowList).
#[derive(Debug, Error)]
pub enum AllowListError {
    #[error("allow-list prefix must not be empty")]
    EmptyPrefix,

    #[error("allow-list prefix '{0}' must be lower-case")]
    InvalidPrefix(String),

    #[error("allow-list entry '{name}' does not start with prefix '{prefix}'")]
    MissingPrefix { name: String, prefix: String },

    #[error("allow-list entry '{0}' must be lower-case")]
    NotLowercase(String),

    #[error("allow-list entry '{0}' appears more than once")]
    Duplicate(String),

    #[error("allow-list data must be a JSON object mapping names to metadata")]
    NotAnObject,

    #[error("failed to read allow-list file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse allow-list data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading a [`ValidatorConfig`](crate::config::ValidatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    AllowList(#[from] AllowListError),
}

pub type Result<T, E = AllowListError> = std::result::Result<T, E>;
