//! Error type shared by storage, configuration and API validation.
//!
//! The grid model and the timeline compressor never produce these: their
//! failures are plain `bool` / `Option` results.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// A persisted record that parses but breaks a model invariant
    #[error("Invalid record under key '{key}': {reason}")]
    InvalidRecord { key: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    #[error("{kind} '{id}' already exists")]
    Duplicate { kind: &'static str, id: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl PlannerError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_record(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            kind,
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
