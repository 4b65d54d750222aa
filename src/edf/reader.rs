use std::fs;
use std::path::PathBuf;

use super::codec::{decode_line, split_lines};
use super::{Edf, FileId};
use crate::error::{DataError, Result};

/// Reads data files out of one folder
#[derive(Debug, Clone)]
pub struct EdfReader {
    data_directory: PathBuf,
}

impl EdfReader {
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
        }
    }

    /// Read and decode one data file
    pub fn read(&self, id: FileId) -> Result<Edf> {
        let path = self.data_directory.join(id.file_name());
        let content = fs::read(&path).map_err(|e| DataError::read(&path, e))?;

        let encoding = id.role().encoding();
        let lines: Vec<String> = split_lines(&content)
            .into_iter()
            .map(|raw| decode_line(raw, encoding))
            .collect();

        tracing::debug!(
            "Read {} ({} bytes, {} lines)",
            path.display(),
            content.len(),
            lines.len()
        );

        Ok(Edf::new(id, lines))
    }
}
