//! Where eodata keeps its own state
//!
//! One per-user directory holds the studio config, the recent folder list
//! and the logs. `EODATA_CONFIG_DIR` replaces it outright; otherwise it is
//! `$XDG_CONFIG_HOME/eodata`, `~/.config/eodata` or `%APPDATA%\eodata`.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = "eodata";

/// Environment variable that replaces the whole config directory
pub const CONFIG_DIR_ENV: &str = "EODATA_CONFIG_DIR";

/// Base name of the log file; the daily appender adds the date
pub const LOG_FILE_NAME: &str = "eodata.log";

/// Files persisted between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredFile {
    Config,
    RecentFolders,
}

impl StoredFile {
    pub fn file_name(self) -> &'static str {
        match self {
            StoredFile::Config => "config.yaml",
            StoredFile::RecentFolders => "recent.json",
        }
    }

    /// Location inside the config directory, if there is one
    pub fn path(self) -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(self.file_name()))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(std::env::var_os(CONFIG_DIR_ENV), platform_config_dir())
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let dir = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "No config directory available")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// A non-empty override wins over the platform directory
fn resolve_config_dir(
    override_dir: Option<OsString>,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    match override_dir {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => platform_dir.map(|base| base.join(APP_DIR)),
    }
}

#[cfg(target_os = "windows")]
fn platform_config_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn platform_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}
