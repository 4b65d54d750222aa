//! Editing session: the open data folder and the grid showing it
//!
//! A session is either closed or has exactly one folder open with one
//! section shown. Opening, saving and closing replace the whole open state
//! at once; a failed open or save leaves the previous state untouched.

use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::edf::Section;
use crate::error::{DataError, Result};
use crate::layout::SectionLayout;
use crate::table::{CellRange, EdfTable};

#[derive(Debug, Clone)]
struct OpenFolder {
    folder: PathBuf,
    document: Document,
    table: EdfTable,
}

#[derive(Debug, Clone)]
pub struct Session {
    layout: SectionLayout,
    default_section: Section,
    open: Option<OpenFolder>,
}

impl Session {
    /// Create a closed session
    pub fn new(layout: SectionLayout, default_section: Section) -> Self {
        Self {
            layout,
            default_section,
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn folder(&self) -> Option<&Path> {
        self.open.as_ref().map(|open| open.folder.as_path())
    }

    pub fn document(&self) -> Option<&Document> {
        self.open.as_ref().map(|open| &open.document)
    }

    pub fn table(&self) -> Option<&EdfTable> {
        self.open.as_ref().map(|open| &open.table)
    }

    /// Section currently shown
    pub fn section(&self) -> Option<Section> {
        self.table().map(EdfTable::section)
    }

    /// Load every data file of `folder` and show the default section.
    ///
    /// On failure the previously open folder (if any) stays open.
    pub fn open_folder(&mut self, folder: &Path) -> Result<()> {
        let document = Document::read(folder)?;
        let table = EdfTable::new(&self.layout, self.default_section);

        self.open = Some(OpenFolder {
            folder: folder.to_path_buf(),
            document,
            table,
        });

        tracing::info!("Opened data folder {}", folder.display());
        Ok(())
    }

    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            tracing::info!("Closed data folder {}", open.folder.display());
        }
    }

    /// Save back into the open folder
    pub fn save(&mut self) -> Result<Vec<PathBuf>> {
        let folder = self.folder().ok_or(DataError::NoFolderOpen)?.to_path_buf();
        self.save_as(&folder)
    }

    /// Save into `destination`, creating it if it is not the open folder.
    ///
    /// The session keeps pointing at the folder it was opened from. The
    /// checksum update is staged on a copy of the document, which replaces
    /// the live one only once every file has been written.
    pub fn save_as(&mut self, destination: &Path) -> Result<Vec<PathBuf>> {
        let open = self.open.as_mut().ok_or(DataError::NoFolderOpen)?;
        let mut staged = open.document.clone();

        let written = if destination == open.folder.as_path() {
            staged.save(destination)?
        } else {
            staged.save_into(destination)?
        };

        open.document = staged;
        tracing::info!(
            "Saved {} data files to {}",
            written.len(),
            destination.display()
        );
        Ok(written)
    }

    // === Grid operations ===
    //
    // All of these are no-ops while no folder is open.

    /// Show another section, dropping the selection
    pub fn set_section(&mut self, section: Section) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        open.table.set_section(&self.layout, section);
        true
    }

    pub fn select(&mut self, range: CellRange) -> bool {
        self.open
            .as_mut()
            .is_some_and(|open| open.table.select(&open.document, range))
    }

    pub fn extend_selection(&mut self, range: CellRange) -> bool {
        self.open
            .as_mut()
            .is_some_and(|open| open.table.extend_selection(&open.document, range))
    }

    pub fn select_rows(&mut self, top: usize, bottom: usize) -> bool {
        self.open
            .as_mut()
            .is_some_and(|open| open.table.select_rows(&open.document, top, bottom))
    }

    pub fn clear_selection(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.table.clear_selection();
        }
    }

    pub fn selected_rows(&self) -> Vec<usize> {
        self.table()
            .map(EdfTable::selected_rows)
            .unwrap_or_default()
    }

    /// Rows an insert would add; zero while closed
    pub fn insert_row_count(&self) -> usize {
        self.table().map_or(0, EdfTable::insert_row_count)
    }

    /// Rows a remove would delete; zero while closed
    pub fn remove_row_count(&self) -> usize {
        self.table().map_or(0, EdfTable::remove_row_count)
    }

    pub fn row_count(&self) -> usize {
        self.open
            .as_ref()
            .map_or(0, |open| open.table.row_count(&open.document))
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        let open = self.open.as_ref()?;
        open.table.cell(&open.document, row, col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) -> bool {
        self.open
            .as_mut()
            .is_some_and(|open| open.table.set_cell(&mut open.document, row, col, value))
    }

    pub fn copy(&self) -> Option<String> {
        let open = self.open.as_ref()?;
        open.table.copy(&open.document)
    }

    pub fn cut(&mut self) -> Option<String> {
        let open = self.open.as_mut()?;
        open.table.cut(&mut open.document)
    }

    pub fn paste(&mut self, payload: &str) -> usize {
        self.open
            .as_mut()
            .map_or(0, |open| open.table.paste(&mut open.document, payload))
    }

    pub fn clear(&mut self) -> usize {
        self.open
            .as_mut()
            .map_or(0, |open| open.table.clear(&mut open.document))
    }

    pub fn insert_rows(&mut self) -> usize {
        self.open
            .as_mut()
            .map_or(0, |open| open.table.insert_rows(&mut open.document))
    }

    pub fn remove_rows(&mut self) -> usize {
        self.open
            .as_mut()
            .map_or(0, |open| open.table.remove_rows(&mut open.document))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SectionLayout::default(), Section::default())
    }
}
