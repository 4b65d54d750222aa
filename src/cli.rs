//! Command-line argument parsing for the data file tool
//!
//! Supports:
//! - Verifying the checksum file of a data folder
//! - Re-saving a folder (regenerating the checksum)
//! - Exporting a section as tab-separated text
//! - Importing tab-separated text into a section
//! - Listing recently opened folders

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::edf::Section;

/// Endless Online data file tool
#[derive(Parser, Debug)]
#[command(name = "eodata", version, about = "Edit Endless Online data files")]
pub struct CliArgs {
    /// More console logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Verify that dat002.edf matches dat001.edf
    Check {
        /// Data folder containing dat001.edf .. dat012.edf
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,
    },

    /// Load every data file and write it back
    Resave {
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Write into this folder instead (created if missing)
        #[arg(long, value_name = "DEST")]
        to: Option<PathBuf>,
    },

    /// Print a section as tab-separated text
    Export {
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// credits, curse-filter, jukebox, game1 or game2
        #[arg(short, long, value_name = "SECTION")]
        section: Section,
    },

    /// Paste tab-separated text into a section and save
    Import {
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        #[arg(short, long, value_name = "SECTION")]
        section: Section,

        /// Tab-separated file to paste
        #[arg(value_name = "TSV")]
        input: PathBuf,

        /// Row of the top-left pasted cell (1-indexed)
        #[arg(long, value_name = "N", default_value_t = 1)]
        row: usize,

        /// Column of the top-left pasted cell (1-indexed)
        #[arg(long, value_name = "N", default_value_t = 1)]
        column: usize,

        /// Write into this folder instead (created if missing)
        #[arg(long, value_name = "DEST")]
        to: Option<PathBuf>,
    },

    /// List recently opened data folders
    Recent {
        /// Forget every recent folder
        #[arg(long)]
        clear: bool,
    },
}

impl Command {
    /// Top-left paste cell, converted from 1-indexed (user input) to 0-indexed
    pub fn paste_anchor(&self) -> Option<(usize, usize)> {
        match self {
            Command::Import { row, column, .. } => {
                Some((row.saturating_sub(1), column.saturating_sub(1)))
            }
            _ => None,
        }
    }
}
