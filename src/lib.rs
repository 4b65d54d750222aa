//! Endless Online data file editing core
//!
//! This crate reads the twelve `datNNN.edf` files of a game data folder,
//! projects them into editable grids per [`Section`], and writes them back
//! with the checksum file regenerated from the freshly written credits file.

pub mod checksum;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod edf;
pub mod error;
pub mod layout;
pub mod recent_folders;
pub mod session;
pub mod table;
pub mod tracing;

// Re-export commonly used types
pub use config::StudioConfig;
pub use document::Document;
pub use edf::{Edf, FileId, Section};
pub use error::{DataError, Result};
pub use layout::SectionLayout;
pub use session::Session;
pub use table::EdfTable;
