//! Persistent recent data folders list
//!
//! Tracks data folders opened in the studio and persists them to disk.
//! Folders are stored in MRU (most recently used) order with a capacity limit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// A single entry in the recent folders list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentEntry {
    /// Absolute path to the data folder
    pub path: PathBuf,
    /// Timestamp when last opened (Unix epoch seconds)
    pub opened_at: u64,
}

impl RecentEntry {
    /// Create a new entry for the current time
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            opened_at: now_epoch_secs(),
        }
    }

    /// Folder name, as shown in a window title
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }
}

fn now_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistent recent folders list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentFolders {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Recent folder entries, most recent first
    pub entries: Vec<RecentEntry>,
}

impl RecentFolders {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load recent folders from disk
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::StoredFile::RecentFolders.path() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable recent list {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save recent folders to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::StoredFile::RecentFolders.path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }

    /// Add a folder to the front of the list (moving it if already present)
    pub fn add(&mut self, path: PathBuf) {
        // Canonicalize path for consistent matching
        let canonical = path.canonicalize().unwrap_or(path);

        if let Some(idx) = self.find_index(&canonical) {
            self.entries.remove(idx);
        }
        self.entries.insert(0, RecentEntry::new(canonical));

        // Enforce capacity limit
        self.entries.truncate(MAX_ENTRIES);
        self.version = Self::CURRENT_VERSION;
    }

    /// Remove a folder from the list
    pub fn remove(&mut self, path: &Path) {
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        self.entries
            .retain(|e| e.path != canonical && e.path != path);
    }

    /// Clear all recent folders
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Find index of entry by path
    fn find_index(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }
}
