use std::fs;
use std::path::PathBuf;

use super::codec::encode_line;
use super::Edf;
use crate::error::{DataError, Result};

/// Terminator written between lines, independent of the host platform
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Writes data files into one folder
#[derive(Debug, Clone)]
pub struct EdfWriter {
    data_directory: PathBuf,
}

impl EdfWriter {
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
        }
    }

    /// Encode and write one data file, returning the path written
    pub fn write(&self, edf: &Edf) -> Result<PathBuf> {
        let path = self.data_directory.join(edf.id().file_name());
        let content = encode(edf);

        fs::write(&path, &content).map_err(|e| DataError::write(&path, e))?;

        tracing::debug!(
            "Wrote {} ({} bytes, {} lines)",
            path.display(),
            content.len(),
            edf.lines().len()
        );

        Ok(path)
    }
}

/// On-disk bytes for `edf`
pub(crate) fn encode(edf: &Edf) -> Vec<u8> {
    let encoding = edf.role().encoding();
    let mut content = Vec::new();

    for (i, line) in edf.lines().iter().enumerate() {
        if i > 0 {
            content.extend_from_slice(LINE_TERMINATOR);
        }
        content.extend_from_slice(&encode_line(line, encoding));
    }

    content
}
