//! Studio configuration persistence
//!
//! Stores user preferences in `~/.config/eodata/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::edf::Section;
use crate::layout::SectionLayout;

/// Configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Section shown right after a folder is opened
    #[serde(default)]
    pub default_section: Section,

    /// Which data files each section shows, and their column headers
    #[serde(default)]
    pub section_layout: SectionLayout,
}

impl StudioConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::StoredFile::Config.path() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        let mut config: Self = match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    return Self::default();
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        if let Err(e) = config.section_layout.validate() {
            tracing::warn!(
                "Ignoring section layout in {}: {}",
                path.display(),
                e
            );
            config.section_layout = SectionLayout::default();
        }

        config
    }

    /// Save config to `path`, creating its directory if it doesn't exist
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
