//! Error types for reading, writing and configuring data folders

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// A data file could not be opened or read
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data file (or its destination folder) could not be written
    #[error("Could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File identifier outside 1..=12
    #[error("Unhandled data file ID: {0}")]
    InvalidFileId(u8),

    /// A document needs exactly one file per identifier, in order
    #[error("Expected 12 data files in file order, got {0}")]
    IncompleteDocument(usize),

    /// Section layout does not partition the twelve data files
    #[error("Invalid section layout: {0}")]
    Layout(String),

    /// Operation needs an open data folder
    #[error("No data folder is open")]
    NoFolderOpen,
}

impl DataError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Underlying system error, if this error came from the file system
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, DataError>;
