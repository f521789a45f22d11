use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    /// The backing file could not be read or written.
    #[error("Storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file exists but does not hold a valid note collection.
    #[error("Corrupt store at {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: Corruption,
    },

    #[error("Generated id is already in use: {0}")]
    DuplicateId(String),

    #[error("Generated id is empty")]
    InvalidId,

    #[error("Config error: {0}")]
    Config(String),
}

impl NotesError {
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NotesError::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, source: impl Into<Corruption>) -> Self {
        NotesError::CorruptStore {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Why stored content was rejected.
#[derive(Error, Debug)]
pub enum Corruption {
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("note at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("id {0} is used by more than one note")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, NotesError>;
