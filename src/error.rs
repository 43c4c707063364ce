//! Construction-time errors.
//!
//! Everything that can go wrong while reading level data or engine tuning
//! ends up as a [`ConfigError`]. Nothing in the per-tick path returns these:
//! a misconfigured entity is simply never spawned.

use std::path::PathBuf;

use thiserror::Error;

use crate::resources::path::PathError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid direction '{0}' (expected left, right or auto)")]
    InvalidDirection(String),

    #[error("missing required field '{field}' in {context}")]
    MissingField {
        context: String,
        field: &'static str,
    },

    #[error("invalid path '{name}': {source}")]
    InvalidPath {
        name: String,
        #[source]
        source: PathError,
    },

    #[error("badguy references unknown path '{0}'")]
    UnknownPath(String),

    #[error("unknown badguy kind '{0}'")]
    UnknownKind(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed level data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed config file: {0}")]
    Ini(String),

    #[error("config value [{section}] {key} = {value} must be {expected}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: f32,
        expected: &'static str,
    },
}
