//! Section layout: which data files each section shows, and as which columns
//!
//! The layout is configuration, not code. The default reproduces the game
//! client's own grouping; a user config may relabel columns or regroup
//! files as long as every file still belongs to exactly one section.

use serde::{Deserialize, Serialize};

use crate::edf::{FileId, Section};
use crate::error::{DataError, Result};

/// Files owned by one section, in column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSchema {
    pub files: Vec<FileId>,
    /// Column headers; columns without a label use the file's language
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl SectionSchema {
    fn new(files: &[u8]) -> Self {
        Self {
            files: files
                .iter()
                .filter_map(|&id| FileId::new(id).ok())
                .collect(),
            labels: Vec::new(),
        }
    }
}

/// One grid column: the file it edits and its header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub file: FileId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub credits: SectionSchema,
    pub curse_filter: SectionSchema,
    pub jukebox: SectionSchema,
    pub game1: SectionSchema,
    pub game2: SectionSchema,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self {
            credits: SectionSchema::new(&[1, 2]),
            curse_filter: SectionSchema::new(&[3]),
            jukebox: SectionSchema::new(&[4]),
            game1: SectionSchema::new(&[5, 7, 9, 11]),
            game2: SectionSchema::new(&[6, 8, 10, 12]),
        }
    }
}

impl SectionLayout {
    pub fn schema(&self, section: Section) -> &SectionSchema {
        match section {
            Section::Credits => &self.credits,
            Section::CurseFilter => &self.curse_filter,
            Section::Jukebox => &self.jukebox,
            Section::Game1 => &self.game1,
            Section::Game2 => &self.game2,
        }
    }

    /// Editable grid columns of `section`.
    ///
    /// The checksum file is owned by a section but never shown: its content
    /// is regenerated on every save.
    pub fn columns(&self, section: Section) -> Vec<Column> {
        let schema = self.schema(section);
        schema
            .files
            .iter()
            .filter(|id| !id.is_checksum())
            .enumerate()
            .map(|(i, &file)| Column {
                file,
                label: schema
                    .labels
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| file.language().label().to_string()),
            })
            .collect()
    }

    /// Every data file must belong to exactly one section
    pub fn validate(&self) -> Result<()> {
        let mut owner: [Option<Section>; FileId::COUNT] = [None; FileId::COUNT];

        for section in Section::ALL {
            for &id in &self.schema(section).files {
                if let Some(previous) = owner[id.index()].replace(section) {
                    if previous == section {
                        return Err(DataError::Layout(format!(
                            "{} lists {} more than once",
                            section,
                            id.file_name()
                        )));
                    }
                    return Err(DataError::Layout(format!(
                        "{} belongs to both {} and {}",
                        id.file_name(),
                        previous,
                        section
                    )));
                }
            }
        }

        let missing: Vec<String> = FileId::all()
            .filter(|id| owner[id.index()].is_none())
            .map(FileId::file_name)
            .collect();

        if !missing.is_empty() {
            return Err(DataError::Layout(format!(
                "no section owns {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}
