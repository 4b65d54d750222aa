//! Checksum of the credits file
//!
//! The game client refuses to start unless `dat002.edf` holds exactly one
//! line of the form `DAT001.ID{A:145:B:C}`, computed from the bytes of
//! `dat001.edf` as stored on disk:
//!
//! - `A = size * 3013 - 11`
//! - `B = number of a, A, e, E, o, O characters`
//! - `C = size * 21`
//!
//! `size` counts line terminators, so the checksum must be derived from the
//! file after it has been written, never from the lines held in memory.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::edf::{Edf, EdfReader, FileId, CHECKSUM_TAG};
use crate::error::{DataError, Result};

/// Fixed middle field of the checksum line
const MAGIC: i64 = 145;

const COUNTED_CHARACTERS: &[u8] = b"aAeEoO";

/// Inputs of the checksum formula, taken from the credits file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    /// Byte length of the file
    pub size: u64,
    /// Occurrences of `a A e E o O` in the whole file
    pub vowel_count: u64,
}

impl Checksum {
    /// Compute the checksum inputs from raw file content
    pub fn from_bytes(content: &[u8]) -> Self {
        let vowel_count = content
            .iter()
            .filter(|&b| COUNTED_CHARACTERS.contains(b))
            .count() as u64;

        Self {
            size: content.len() as u64,
            vowel_count,
        }
    }

    /// Compute the checksum of a file as it currently exists on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read(path).map_err(|e| DataError::read(path, e))?;
        let size = fs::metadata(path)
            .map_err(|e| DataError::read(path, e))?
            .len();

        Ok(Self {
            size,
            ..Self::from_bytes(&content)
        })
    }

    /// First numeric field, `size * 3013 - 11`
    pub fn size_field(&self) -> i64 {
        self.size as i64 * 3013 - 11
    }

    /// Last numeric field, `size * 21`
    pub fn length_field(&self) -> i64 {
        self.size as i64 * 21
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.ID{{{}:{}:{}:{}}}",
            CHECKSUM_TAG,
            self.size_field(),
            MAGIC,
            self.vowel_count,
            self.length_field()
        )
    }
}

/// Replace the content of `target` with the checksum of the credits file
/// that was just written to `written`.
pub fn recompute(written: &Path, target: &mut Edf) -> Result<Checksum> {
    debug_assert!(target.id().is_checksum());

    let checksum = Checksum::from_file(written)?;
    target.replace_lines(vec![checksum.to_string()]);

    tracing::info!(
        "Updated checksum from {}: {}",
        written.display(),
        checksum
    );

    Ok(checksum)
}

/// Result of comparing a folder's stored checksum with its credits file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub expected: String,
    pub stored: Vec<String>,
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        self.stored.len() == 1 && self.stored[0] == self.expected
    }
}

/// Check `dat002.edf` in `folder` against the `dat001.edf` next to it
pub fn verify(folder: &Path) -> Result<Verification> {
    let credits = folder.join(FileId::CREDITS.file_name());
    let expected = Checksum::from_file(&credits)?.to_string();
    let stored = EdfReader::new(folder).read(FileId::CHECKSUM)?;

    Ok(Verification {
        expected,
        stored: stored.lines().to_vec(),
    })
}
