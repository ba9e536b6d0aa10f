//! Layout pipeline: filters, totals, normalization, multiline splitting and
//! column sizing.
//!
//! Every pass runs on a snapshot of the stored grid, so computing a layout
//! never changes the table it came from:
//!
//! 1. filters rewrite cells of every data row, in registration order;
//! 2. totals append a rule and a row of per-column sums;
//! 3. every (row, column) slot inside the bounds gets a cell, and row
//!    heights are measured from the raw content;
//! 4. rows and header lines taller than one line are split into that many
//!    single-line rows;
//! 5. column widths are measured from the split rows and header lines.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::grid::Grid;
use crate::types::{Cells, Row};
use crate::width::WidthProvider;

/// A per-cell transform registered for one column.
#[derive(Clone)]
pub struct Filter {
    column: usize,
    apply: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl Filter {
    pub fn new<F>(column: usize, apply: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Filter {
            column,
            apply: Arc::new(apply),
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("column", &self.column)
            .finish_non_exhaustive()
    }
}

/// One output line of the data section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Exactly one cell per column.
    Cells(Vec<String>),
    Rule,
}

impl Line {
    pub fn cells(&self) -> Option<&[String]> {
        match self {
            Line::Cells(cells) => Some(cells),
            Line::Rule => None,
        }
    }
}

/// A fully normalized table, ready to render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Header lines after splitting, each with one cell per column.
    pub headers: Vec<Vec<String>>,
    /// Data lines after splitting.
    pub lines: Vec<Line>,
    /// Display width of each column.
    pub widths: Vec<usize>,
    /// Height of each header line before splitting.
    pub header_heights: Vec<usize>,
    /// Height of each row before splitting, keyed by row index. Rules are 1.
    pub row_heights: BTreeMap<usize, usize>,
}

impl Layout {
    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.lines.is_empty()
    }
}

/// Run the whole pipeline over a snapshot of `grid`.
pub(crate) fn compute(
    grid: &Grid,
    filters: &[Filter],
    totals: &BTreeSet<usize>,
    measure: &dyn WidthProvider,
) -> Layout {
    let mut snapshot = grid.clone();
    apply_filters(&mut snapshot, filters);
    append_totals(&mut snapshot, totals);
    normalize(&snapshot, measure)
}

fn apply_filters(grid: &mut Grid, filters: &[Filter]) {
    if filters.is_empty() {
        return;
    }
    for filter in filters {
        for row in grid.rows_mut().values_mut() {
            if let Row::Data(cells) = row {
                let current = cells.get(&filter.column).map_or("", String::as_str);
                let value = (filter.apply)(current);
                cells.insert(filter.column, value);
            }
        }
    }
    grid.refresh_bounds();
    tracing::trace!(count = filters.len(), "applied filters");
}

fn append_totals(grid: &mut Grid, totals: &BTreeSet<usize>) {
    if totals.is_empty() {
        return;
    }
    grid.add_separator();

    let mut sums: BTreeMap<usize, f64> = totals.iter().map(|col| (*col, 0.0)).collect();
    for cells in grid.rows().values().filter_map(Row::cells) {
        for (col, sum) in sums.iter_mut() {
            *sum += leading_number(cells.get(col).map_or("", String::as_str));
        }
    }

    let row: Cells = sums
        .into_iter()
        .map(|(col, sum)| (col, format_total(sum)))
        .collect();
    tracing::trace!(columns = ?totals, "appended totals row");
    grid.push_row(Row::Data(row));
}

/// Parse the longest numeric prefix of `text`; anything else counts as zero.
pub(crate) fn leading_number(text: &str) -> f64 {
    let s = text.trim();
    let bytes = s.as_bytes();
    let digits_from = |mut at: usize| {
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Whole sums print without a fractional part.
pub(crate) fn format_total(sum: f64) -> String {
    if sum.fract() == 0.0 && sum.abs() < 1e15 {
        format!("{}", sum as i64)
    } else {
        format!("{}", sum)
    }
}

/// Number of newline-separated segments in the tallest cell; at least 1.
fn height<S: AsRef<str>>(cells: &[S]) -> usize {
    cells
        .iter()
        .map(|cell| cell.as_ref().split('\n').count())
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Dense cells `0..cols`, empty where unset.
fn fill(cells: &Cells, cols: usize) -> Vec<String> {
    (0..cols)
        .map(|col| cells.get(&col).cloned().unwrap_or_default())
        .collect()
}

/// Split a line of height `h` into `h` lines, segment `k` of each cell on line `k`.
fn split(cells: Vec<String>, h: usize) -> Vec<Vec<String>> {
    if h <= 1 {
        return vec![cells];
    }
    let segments: Vec<Vec<&str>> = cells.iter().map(|c| c.split('\n').collect()).collect();
    (0..h)
        .map(|k| {
            segments
                .iter()
                .map(|segs| segs.get(k).copied().unwrap_or("").to_string())
                .collect()
        })
        .collect()
}

fn normalize(grid: &Grid, measure: &dyn WidthProvider) -> Layout {
    let cols = grid.max_cols();
    let mut layout = Layout::default();

    for line in grid.headers() {
        let cells = fill(line, cols);
        let h = height(&cells);
        layout.header_heights.push(h);
        layout.headers.extend(split(cells, h));
    }

    let mut split_rows = 0;
    for index in 0..grid.max_rows() {
        match grid.row(index) {
            Some(Row::Rule) => {
                layout.row_heights.insert(index, 1);
                layout.lines.push(Line::Rule);
            }
            stored => {
                let cells = match stored {
                    Some(Row::Data(cells)) => fill(cells, cols),
                    _ => vec![String::new(); cols],
                };
                let h = height(&cells);
                if h > 1 {
                    split_rows += 1;
                }
                layout.row_heights.insert(index, h);
                layout
                    .lines
                    .extend(split(cells, h).into_iter().map(Line::Cells));
            }
        }
    }
    if split_rows > 0 {
        tracing::trace!(
            split_rows,
            lines = layout.lines.len(),
            "split multiline rows"
        );
    }

    layout.widths = column_widths(&layout, cols, measure);
    tracing::trace!(widths = ?layout.widths, "computed column widths");
    layout
}

fn column_widths(layout: &Layout, cols: usize, measure: &dyn WidthProvider) -> Vec<usize> {
    let mut widths = vec![0; cols];
    let data = layout.lines.iter().filter_map(Line::cells);
    for cells in layout.headers.iter().map(Vec::as_slice).chain(data) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(measure.width(cell));
        }
    }
    widths
}
