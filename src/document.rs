//! The twelve data files of one folder
//!
//! A [`Document`] is only ever built whole: [`Document::read`] either
//! returns all twelve files or fails without producing anything.

use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::edf::{Edf, EdfReader, EdfWriter, FileId};
use crate::error::{DataError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Indexed by `FileId::index()`
    edfs: Vec<Edf>,
}

impl Document {
    /// Build a document from twelve files given in file order
    pub fn from_edfs(edfs: Vec<Edf>) -> Result<Self> {
        if edfs.len() != FileId::COUNT {
            return Err(DataError::IncompleteDocument(edfs.len()));
        }
        if !edfs.iter().zip(FileId::all()).all(|(edf, id)| edf.id() == id) {
            return Err(DataError::IncompleteDocument(edfs.len()));
        }
        Ok(Self { edfs })
    }

    /// Twelve empty files
    pub fn empty() -> Self {
        Self {
            edfs: FileId::all().map(Edf::empty).collect(),
        }
    }

    /// Read all twelve files of `folder`.
    ///
    /// The first file that cannot be read aborts the whole load.
    pub fn read(folder: &Path) -> Result<Self> {
        let reader = EdfReader::new(folder);
        let edfs = FileId::all()
            .map(|id| reader.read(id))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { edfs })
    }

    pub fn get(&self, id: FileId) -> &Edf {
        &self.edfs[id.index()]
    }

    pub fn get_mut(&mut self, id: FileId) -> &mut Edf {
        &mut self.edfs[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edf> {
        self.edfs.iter()
    }

    /// Write all twelve files into `destination`, returning the paths written.
    ///
    /// The checksum file is regenerated from the credits file right after the
    /// credits file is written, and before the checksum file itself is
    /// written. Files written before a failure stay on disk.
    pub fn save(&mut self, destination: &Path) -> Result<Vec<PathBuf>> {
        let writer = EdfWriter::new(destination);
        let mut written = Vec::with_capacity(FileId::COUNT);

        for id in FileId::all() {
            let path = writer.write(self.get(id))?;
            if id == FileId::CREDITS {
                checksum::recompute(&path, self.get_mut(FileId::CHECKSUM))?;
            }
            written.push(path);
        }

        Ok(written)
    }

    /// Like [`Document::save`], creating `destination` first if needed
    pub fn save_into(&mut self, destination: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(destination).map_err(|e| DataError::write(destination, e))?;
        self.save(destination)
    }
}
