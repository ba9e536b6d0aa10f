//! Sparse grid storage and the mutation operations that grow it.
//!
//! Rows live in an ordered map keyed by row index, cells in an ordered map
//! keyed by column index. Nothing is validated against an earlier shape:
//! rows and columns come into existence when something is written to them,
//! and gaps are filled with empty cells only when a layout is computed.
//!
//! After every mutation the grid re-derives its bounds:
//!
//! - `max_cols` never shrinks and covers the highest column written;
//! - `max_rows` is one past the highest row index present.

use std::collections::BTreeMap;

use crate::types::{Align, Cells, Row, RowData};

/// Headers and rows of a table before layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    headers: Vec<Cells>,
    rows: BTreeMap<usize, Row>,
    max_cols: usize,
    max_rows: usize,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header lines in display order.
    pub fn headers(&self) -> &[Cells] {
        &self.headers
    }

    /// Rows keyed by row index.
    pub fn rows(&self) -> &BTreeMap<usize, Row> {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// One past the highest column index seen in headers or rows.
    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    /// One past the highest row index present.
    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// True when there are no header lines and no rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Replace the header block with a single line starting at column 0.
    pub fn set_headers(&mut self, cells: Vec<String>) {
        self.max_cols = self.max_cols.max(cells.len());
        self.headers = vec![cells.into_iter().enumerate().collect()];
        self.refresh_bounds();
    }

    /// Append a row after the last row index, or prepend it at index 0.
    pub fn add_row(&mut self, cells: Vec<String>, append: bool) {
        if append {
            let index = self.next_index();
            self.max_cols = self.max_cols.max(cells.len());
            self.rows.insert(index, Row::from_cells(cells));
            self.refresh_bounds();
        } else {
            self.insert_row(cells, 0);
        }
    }

    /// Insert a row at `at`, shifting rows at or after it up by one.
    pub fn insert_row(&mut self, cells: Vec<String>, at: usize) {
        self.max_cols = self.max_cols.max(cells.len());
        self.shift_from(at);
        self.rows.insert(at, Row::from_cells(cells));
        self.refresh_bounds();
    }

    /// Write `cells` down column `col`, one per row starting at `start_row`.
    ///
    /// Missing rows are created. A rule in the way is replaced by a data row.
    pub fn add_col(&mut self, cells: Vec<String>, col: usize, start_row: usize) {
        for (offset, cell) in cells.into_iter().enumerate() {
            self.overlay(start_row + offset, col, cell);
        }
        self.max_cols = self.max_cols.max(col + 1);
        self.refresh_bounds();
    }

    /// Bulk overlay starting at (`start_row`, `start_col`).
    ///
    /// Each entry consumes one row index; rules are stored as rules.
    pub fn add_data(&mut self, data: Vec<RowData>, start_col: usize, start_row: usize) {
        for (offset, entry) in data.into_iter().enumerate() {
            let row = start_row + offset;
            match entry {
                RowData::Rule => {
                    self.rows.insert(row, Row::Rule);
                }
                RowData::Cells(cells) => {
                    let width = cells.len();
                    for (i, cell) in cells.into_iter().enumerate() {
                        self.overlay(row, start_col + i, cell);
                    }
                    self.max_cols = self.max_cols.max(start_col + width);
                }
            }
        }
        self.refresh_bounds();
    }

    /// Append a horizontal rule after the last row index.
    pub fn add_separator(&mut self) {
        let index = self.next_index();
        self.rows.insert(index, Row::Rule);
        self.refresh_bounds();
    }

    /// Append an already-built row after the last row index.
    pub(crate) fn push_row(&mut self, row: Row) {
        let index = self.next_index();
        self.rows.insert(index, row);
        self.refresh_bounds();
    }

    pub(crate) fn rows_mut(&mut self) -> &mut BTreeMap<usize, Row> {
        &mut self.rows
    }

    fn next_index(&self) -> usize {
        self.rows.keys().next_back().map_or(0, |last| last + 1)
    }

    fn shift_from(&mut self, at: usize) {
        let tail = self.rows.split_off(&at);
        self.rows
            .extend(tail.into_iter().map(|(index, row)| (index + 1, row)));
    }

    fn overlay(&mut self, row: usize, col: usize, cell: String) {
        match self.rows.get_mut(&row) {
            Some(Row::Data(cells)) => {
                cells.insert(col, cell);
            }
            _ => {
                self.rows.insert(row, Row::Data(Cells::from([(col, cell)])));
            }
        }
    }

    /// Re-derive `max_rows` from the stored keys and widen `max_cols` to
    /// cover every stored column index.
    pub(crate) fn refresh_bounds(&mut self) {
        self.max_rows = self.next_index();
        let highest = self
            .headers
            .iter()
            .chain(self.rows.values().filter_map(Row::cells))
            .filter_map(|cells| cells.keys().next_back())
            .max()
            .map_or(0, |col| col + 1);
        self.max_cols = self.max_cols.max(highest);
    }
}

/// Per-column alignment, grown with the default as columns appear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ColumnAligns {
    default: Align,
    columns: Vec<Align>,
}

impl ColumnAligns {
    pub(crate) fn new(default: Align) -> Self {
        ColumnAligns {
            default,
            columns: Vec::new(),
        }
    }

    /// Fill in the default for every column below `cols` not yet recorded.
    pub(crate) fn extend_to(&mut self, cols: usize) {
        if self.columns.len() < cols {
            self.columns.resize(cols, self.default);
        }
    }

    pub(crate) fn set(&mut self, col: usize, align: Align) {
        self.extend_to(col + 1);
        self.columns[col] = align;
    }

    pub(crate) fn get(&self, col: usize) -> Align {
        self.columns.get(col).copied().unwrap_or(self.default)
    }
}
