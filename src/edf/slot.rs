//! Fixed registry of the twelve data file slots
//!
//! Every slot has a position-derived file name, a role (what kind of data
//! the game client stores there) and a language. None of this is
//! configurable: the client looks files up by these exact names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Tag the game client expects in front of the checksum of `dat001.edf`
pub const CHECKSUM_TAG: &str = "DAT001";

/// Identifier of one of the twelve data files (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FileId(u8);

impl FileId {
    /// Number of data files in a folder
    pub const COUNT: usize = 12;

    /// `dat001.edf`, the file the checksum is computed over
    pub const CREDITS: FileId = FileId(1);

    /// `dat002.edf`, holds the checksum of [`FileId::CREDITS`]
    pub const CHECKSUM: FileId = FileId(2);

    pub fn new(id: u8) -> Result<Self> {
        if (1..=Self::COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(DataError::InvalidFileId(id))
        }
    }

    /// All identifiers in file order
    pub fn all() -> impl Iterator<Item = FileId> {
        (1..=Self::COUNT as u8).map(FileId)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Position in a [`Document`](crate::document::Document)
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// On-disk name, e.g. `dat007.edf`
    pub fn file_name(self) -> String {
        format!("dat{:03}.edf", self.0)
    }

    pub fn role(self) -> Role {
        match self.0 {
            1 => Role::Credits,
            2 => Role::Checksum,
            3 => Role::CurseFilter,
            4 => Role::Jukebox,
            5 | 7 | 9 | 11 => Role::Game1,
            _ => Role::Game2,
        }
    }

    pub fn language(self) -> Language {
        match self.0 {
            1..=6 => Language::English,
            7 | 8 => Language::Dutch,
            9 | 10 => Language::Swedish,
            _ => Language::Portuguese,
        }
    }

    pub fn is_checksum(self) -> bool {
        self == Self::CHECKSUM
    }
}

impl TryFrom<u8> for FileId {
    type Error = DataError;

    fn try_from(id: u8) -> Result<Self> {
        Self::new(id)
    }
}

impl From<FileId> for u8 {
    fn from(id: FileId) -> u8 {
        id.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the game client stores in a file slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Credits,
    Checksum,
    CurseFilter,
    Jukebox,
    Game1,
    Game2,
}

impl Role {
    /// How lines of this role are scrambled on disk
    pub fn encoding(self) -> LineEncoding {
        match self {
            Role::Credits | Role::Checksum => LineEncoding::Plain,
            Role::CurseFilter => LineEncoding::Interleaved,
            Role::Jukebox | Role::Game1 | Role::Game2 => LineEncoding::InterleavedSwapped,
        }
    }
}

/// On-disk line scrambling scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEncoding {
    /// Stored as-is
    Plain,
    /// Byte order interleaved
    Interleaved,
    /// Runs of multiples of 7 reversed, then interleaved
    InterleavedSwapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Dutch,
    Swedish,
    Portuguese,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Dutch => "Dutch",
            Language::Swedish => "Swedish",
            Language::Portuguese => "Portuguese",
        }
    }
}

/// Logical grouping of data files shown as one grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Credits,
    CurseFilter,
    Jukebox,
    Game1,
    Game2,
}

impl Section {
    /// Sections in tab order
    pub const ALL: [Section; 5] = [
        Section::Credits,
        Section::CurseFilter,
        Section::Jukebox,
        Section::Game1,
        Section::Game2,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Credits => "Credits",
            Section::CurseFilter => "Curse Filter",
            Section::Jukebox => "Jukebox",
            Section::Game1 => "Game 1",
            Section::Game2 => "Game 2",
        }
    }

    /// Identifier used in config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Section::Credits => "credits",
            Section::CurseFilter => "curse_filter",
            Section::Jukebox => "jukebox",
            Section::Game1 => "game1",
            Section::Game2 => "game2",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Section::ALL
            .into_iter()
            .find(|section| section.key().replace('_', "") == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown section '{}' (expected one of: credits, curse_filter, jukebox, game1, game2)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_bounds() {
        assert!(FileId::new(0).is_err());
        assert!(FileId::new(13).is_err());
        assert_eq!(FileId::new(1).unwrap(), FileId::CREDITS);
        assert_eq!(FileId::new(12).unwrap().index(), 11);
        assert_eq!(FileId::all().count(), FileId::COUNT);
    }

    #[test]
    fn test_file_names_are_zero_padded() {
        assert_eq!(FileId::CREDITS.file_name(), "dat001.edf");
        assert_eq!(FileId::new(12).unwrap().file_name(), "dat012.edf");
    }

    #[test]
    fn test_roles_and_encodings() {
        let roles: Vec<Role> = FileId::all().map(FileId::role).collect();
        assert_eq!(
            roles,
            vec![
                Role::Credits,
                Role::Checksum,
                Role::CurseFilter,
                Role::Jukebox,
                Role::Game1,
                Role::Game2,
                Role::Game1,
                Role::Game2,
                Role::Game1,
                Role::Game2,
                Role::Game1,
                Role::Game2,
            ]
        );
        assert_eq!(Role::Credits.encoding(), LineEncoding::Plain);
        assert_eq!(Role::Checksum.encoding(), LineEncoding::Plain);
        assert_eq!(Role::CurseFilter.encoding(), LineEncoding::Interleaved);
        assert_eq!(Role::Game2.encoding(), LineEncoding::InterleavedSwapped);
    }

    #[test]
    fn test_languages() {
        assert_eq!(FileId::new(6).unwrap().language(), Language::English);
        assert_eq!(FileId::new(7).unwrap().language(), Language::Dutch);
        assert_eq!(FileId::new(10).unwrap().language(), Language::Swedish);
        assert_eq!(FileId::new(11).unwrap().language(), Language::Portuguese);
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("game1".parse::<Section>().unwrap(), Section::Game1);
        assert_eq!("Game 2".parse::<Section>().unwrap(), Section::Game2);
        assert_eq!(
            "curse-filter".parse::<Section>().unwrap(),
            Section::CurseFilter
        );
        assert!("checksum".parse::<Section>().is_err());
    }

    #[test]
    fn test_file_id_serde_rejects_out_of_range() {
        let ok: FileId = serde_json::from_str("5").unwrap();
        assert_eq!(ok.get(), 5);
        assert!(serde_json::from_str::<FileId>("13").is_err());
    }
}
