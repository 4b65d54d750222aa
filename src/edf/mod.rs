//! EDF data files
//!
//! An [`Edf`] is the decoded, line-oriented content of one of the twelve
//! `datNNN.edf` files in a data folder. Lines are kept verbatim: no
//! interpretation beyond the per-role byte codec happens at this layer.
//!
//! ```text
//! datNNN.edf bytes ──split_lines──► raw lines ──decode_line──► Edf.lines
//! Edf.lines ──encode_line──► raw lines ──join("\r\n")──► datNNN.edf bytes
//! ```

pub mod codec;
mod reader;
mod slot;
mod writer;

pub use reader::EdfReader;
pub use slot::{FileId, Language, LineEncoding, Role, Section, CHECKSUM_TAG};
pub use writer::{EdfWriter, LINE_TERMINATOR};

/// In-memory content of one data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edf {
    id: FileId,
    lines: Vec<String>,
}

impl Edf {
    pub fn new(id: FileId, lines: Vec<String>) -> Self {
        Self { id, lines }
    }

    /// An empty file: a single empty line
    pub fn empty(id: FileId) -> Self {
        Self::new(id, vec![String::new()])
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.id.role()
    }

    pub fn language(&self) -> Language {
        self.id.language()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    /// Discard all content and replace it with `lines`
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
    }
}
