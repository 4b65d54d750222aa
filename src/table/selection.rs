//! Cell selection for the data grid

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Inclusive rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl CellRange {
    /// Range spanning two corners, in any order
    pub fn new(a: CellPosition, b: CellPosition) -> Self {
        Self {
            top: a.row.min(b.row),
            left: a.col.min(b.col),
            bottom: a.row.max(b.row),
            right: a.col.max(b.col),
        }
    }

    pub fn cell(row: usize, col: usize) -> Self {
        let position = CellPosition::new(row, col);
        Self::new(position, position)
    }

    /// Whole rows `top..=bottom` of a grid with `column_count` columns
    pub fn rows(top: usize, bottom: usize, column_count: usize) -> Self {
        Self::new(
            CellPosition::new(top, 0),
            CellPosition::new(bottom, column_count.saturating_sub(1)),
        )
    }

    pub fn top_left(&self) -> CellPosition {
        CellPosition::new(self.top, self.left)
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellPosition> + '_ {
        (self.top..=self.bottom).flat_map(move |row| {
            (self.left..=self.right).map(move |col| CellPosition::new(row, col))
        })
    }

    /// Intersection with a `row_count` x `column_count` grid
    pub fn clamp_to(&self, row_count: usize, column_count: usize) -> Option<Self> {
        if self.top >= row_count || self.left >= column_count {
            return None;
        }
        Some(Self {
            bottom: self.bottom.min(row_count - 1),
            right: self.right.min(column_count - 1),
            ..*self
        })
    }
}

/// Selected ranges plus the current (focused) cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<CellRange>,
    current: Option<CellPosition>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[CellRange] {
        &self.ranges
    }

    pub fn current(&self) -> Option<CellPosition> {
        self.current
    }

    /// Replace the selection with `range`
    pub fn set(&mut self, range: CellRange) {
        self.ranges = vec![range];
        self.current = Some(range.top_left());
    }

    /// Add `range` to the selection and make it current
    pub fn add(&mut self, range: CellRange) {
        self.ranges.push(range);
        self.current = Some(range.top_left());
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
        self.current = None;
    }

    /// Top-left cell of the first range, where pastes land
    pub fn anchor(&self) -> Option<CellPosition> {
        self.ranges.first().map(CellRange::top_left)
    }

    pub fn first(&self) -> Option<&CellRange> {
        self.ranges.first()
    }

    /// Selected row indices, ascending and de-duplicated
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .ranges
            .iter()
            .flat_map(|range| range.top..=range.bottom)
            .collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// Move everything down by `count` rows
    pub fn shift_down(&mut self, count: usize) {
        for range in &mut self.ranges {
            range.top += count;
            range.bottom += count;
        }
        if let Some(current) = &mut self.current {
            current.row += count;
        }
    }

    /// Pull rows past `last_row` back onto it
    pub fn clamp_rows(&mut self, last_row: usize) {
        for range in &mut self.ranges {
            range.top = range.top.min(last_row);
            range.bottom = range.bottom.min(last_row);
        }
        self.ranges.dedup();
        if let Some(current) = &mut self.current {
            current.row = current.row.min(last_row);
        }
    }
}

/// True when `rows` (sorted, de-duplicated) has no gaps
pub fn is_contiguous(rows: &[usize]) -> bool {
    match (rows.first(), rows.last()) {
        (Some(&first), Some(&last)) => last - first + 1 == rows.len(),
        _ => true,
    }
}
