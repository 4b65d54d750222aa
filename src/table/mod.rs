//! Section grid editing
//!
//! Presents the data files of one [`Section`](crate::edf::Section) as a
//! spreadsheet-like grid and implements the bulk edit operations of the
//! editor on top of it.
//!
//! ```text
//! Document ──(section layout)──► EdfTable
//!                                  ├── columns: one data file each
//!                                  ├── rows: line numbers
//!                                  └── Selection (ranges + current cell)
//! ```
//!
//! The grid is a view. Every edit lands in the owning file's lines within
//! the same call.

mod clipboard;
mod model;
mod selection;

pub use clipboard::{parse_payload, sanitize, to_payload};
pub use model::EdfTable;
pub use selection::{is_contiguous, CellPosition, CellRange, Selection};
