//! Grid projection of one section's data files
//!
//! Columns are data files, rows are line numbers. The grid never stores
//! cell text: every read goes to the [`Document`] and every edit is applied
//! to the owning file's lines immediately.

use crate::document::Document;
use crate::edf::{Edf, Section};
use crate::layout::{Column, SectionLayout};

use super::clipboard::{parse_payload, sanitize, to_payload};
use super::selection::{is_contiguous, CellPosition, CellRange, Selection};

#[derive(Debug, Clone)]
pub struct EdfTable {
    section: Section,
    columns: Vec<Column>,
    selection: Selection,
}

impl EdfTable {
    pub fn new(layout: &SectionLayout, section: Section) -> Self {
        Self {
            section,
            columns: layout.columns(section),
            selection: Selection::default(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Show another section. Row and column indices from before the switch
    /// are meaningless afterwards, so the selection is dropped.
    pub fn set_section(&mut self, layout: &SectionLayout, section: Section) {
        tracing::debug!("Switching grid from {} to {}", self.section, section);
        *self = Self::new(layout, section);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Header for column `col`
    pub fn column_label(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(|c| c.label.as_str())
    }

    /// Longest file in the section
    pub fn row_count(&self, document: &Document) -> usize {
        self.columns
            .iter()
            .map(|c| document.get(c.file).lines().len())
            .max()
            .unwrap_or(0)
    }

    /// Text of one cell; rows past the end of a shorter file read as empty
    pub fn cell<'d>(&self, document: &'d Document, row: usize, col: usize) -> Option<&'d str> {
        if row >= self.row_count(document) {
            return None;
        }
        let column = self.columns.get(col)?;
        let text = document
            .get(column.file)
            .lines()
            .get(row)
            .map(String::as_str)
            .unwrap_or("");
        Some(text)
    }

    /// Write one cell. Returns false if the cell is outside the grid.
    pub fn set_cell(&self, document: &mut Document, row: usize, col: usize, value: &str) -> bool {
        if row >= self.row_count(document) {
            return false;
        }
        let Some(column) = self.columns.get(col) else {
            return false;
        };

        let value = sanitize(value);
        let lines = document.get_mut(column.file).lines_mut();

        if row >= lines.len() {
            if value.is_empty() {
                // Already reads as empty
                return true;
            }
            lines.resize(row + 1, String::new());
        }
        lines[row] = value;
        true
    }

    // === Selection ===

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the selection. Ranges are clipped to the grid; a range that
    /// lies entirely outside it is rejected.
    pub fn select(&mut self, document: &Document, range: CellRange) -> bool {
        match range.clamp_to(self.row_count(document), self.column_count()) {
            Some(range) => {
                self.selection.set(range);
                true
            }
            None => false,
        }
    }

    /// Add a range to the selection, clipped like [`EdfTable::select`]
    pub fn extend_selection(&mut self, document: &Document, range: CellRange) -> bool {
        match range.clamp_to(self.row_count(document), self.column_count()) {
            Some(range) => {
                self.selection.add(range);
                true
            }
            None => false,
        }
    }

    /// Select whole rows `top..=bottom`
    pub fn select_rows(&mut self, document: &Document, top: usize, bottom: usize) -> bool {
        let range = CellRange::rows(top, bottom, self.column_count());
        self.select(document, range)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_rows(&self) -> Vec<usize> {
        self.selection.rows()
    }

    /// Rows [`EdfTable::insert_rows`] would insert: the selection size when
    /// it is one contiguous run of rows, nothing for a split selection, one
    /// row when nothing is selected.
    pub fn insert_row_count(&self) -> usize {
        let rows = self.selected_rows();
        if rows.is_empty() {
            1
        } else if is_contiguous(&rows) {
            rows.len()
        } else {
            0
        }
    }

    /// Rows [`EdfTable::remove_rows`] would delete
    pub fn remove_row_count(&self) -> usize {
        self.selected_rows().len()
    }

    // === Edit operations ===

    /// Clipboard payload of the first selected range
    pub fn copy(&self, document: &Document) -> Option<String> {
        let range = self.selection.first()?;
        let rows: Vec<Vec<String>> = (range.top..=range.bottom)
            .map(|row| {
                (range.left..=range.right)
                    .filter_map(|col| self.cell(document, row, col))
                    .map(str::to_string)
                    .collect()
            })
            .collect();
        Some(to_payload(&rows))
    }

    /// Copy the first selected range, then empty it
    pub fn cut(&mut self, document: &mut Document) -> Option<String> {
        let payload = self.copy(document)?;
        if let Some(&range) = self.selection.first() {
            self.clear_range(document, range);
        }
        Some(payload)
    }

    /// Write a clipboard payload starting at the selection anchor.
    ///
    /// Cells that would land outside the grid are dropped; the grid never
    /// grows. Returns the number of cells written.
    pub fn paste(&mut self, document: &mut Document, payload: &str) -> usize {
        let Some(anchor) = self.selection.anchor() else {
            return 0;
        };

        let row_count = self.row_count(document);
        let mut written = 0;

        for (i, cells) in parse_payload(payload).iter().enumerate() {
            let row = anchor.row + i;
            if row >= row_count {
                break;
            }
            for (j, value) in cells.iter().enumerate() {
                if self.set_cell(document, row, anchor.col + j, value) {
                    written += 1;
                }
            }
        }

        tracing::debug!("Pasted {} cells at {:?}", written, anchor);
        written
    }

    /// Empty every selected cell. Returns the number of cells visited.
    pub fn clear(&mut self, document: &mut Document) -> usize {
        let ranges = self.selection.ranges().to_vec();
        ranges
            .into_iter()
            .map(|range| self.clear_range(document, range))
            .sum()
    }

    fn clear_range(&self, document: &mut Document, range: CellRange) -> usize {
        range
            .cells()
            .filter(|&CellPosition { row, col }| self.set_cell(document, row, col, ""))
            .count()
    }

    /// Insert blank rows before the first selected row, or one row at the
    /// end when nothing is selected. Returns the number of rows inserted.
    pub fn insert_rows(&mut self, document: &mut Document) -> usize {
        let count = self.insert_row_count();
        if count == 0 {
            return 0;
        }

        let row = self
            .selected_rows()
            .first()
            .copied()
            .unwrap_or_else(|| self.row_count(document));

        for column in &self.columns {
            insert_blank_lines(document.get_mut(column.file), row, count);
        }
        self.selection.shift_down(count);

        tracing::debug!("Inserted {} rows at {} in {}", count, row, self.section);
        count
    }

    /// Delete every selected row. Returns the number of rows deleted.
    ///
    /// A file left without lines keeps a single blank one, which is what an
    /// empty file reads back as.
    pub fn remove_rows(&mut self, document: &mut Document) -> usize {
        let rows = self.selected_rows();
        if rows.is_empty() {
            return 0;
        }

        for column in &self.columns {
            let lines = document.get_mut(column.file).lines_mut();
            for &row in rows.iter().rev() {
                if row < lines.len() {
                    lines.remove(row);
                }
            }
            // An empty file reads back as one blank line
            if lines.is_empty() {
                lines.push(String::new());
            }
        }

        match self.row_count(document).checked_sub(1) {
            Some(last_row) => self.selection.clamp_rows(last_row),
            None => self.selection.clear(),
        }

        tracing::debug!("Removed {} rows from {}", rows.len(), self.section);
        rows.len()
    }
}

fn insert_blank_lines(edf: &mut Edf, row: usize, count: usize) {
    let lines = edf.lines_mut();
    if lines.len() < row {
        lines.resize(row, String::new());
    }
    let tail = lines.split_off(row);
    lines.extend(std::iter::repeat(String::new()).take(count));
    lines.extend(tail);
}
