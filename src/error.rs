// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a dictionary build or a strict dictionary load.
///
/// Empty or malformed text is never an error anywhere in this crate; it
/// degrades to zero counts and a "Nothing to read" rating instead.
#[derive(Error, Debug)]
pub enum ReadabilityError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dictionary document '{}': {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not move dictionary into place: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ReadabilityError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ReadabilityError>;
