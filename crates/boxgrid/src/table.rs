//! The public table type.
//!
//! A [`Table`] accumulates headers, rows, rules, filters and totals, and
//! lays everything out again on each call to [`Table::render`]. Rendering
//! works on a snapshot, so it can be repeated freely and always reflects
//! the current contents.
//!
//! # Example
//!
//! ```rust
//! use boxgrid::{Align, Table};
//!
//! let mut table = Table::new();
//! table.set_headers(["Item", "Qty"]);
//! table.add_row(["apples", "3"]);
//! table.add_row(["pears", "12"]);
//! table.set_align(1, Align::Right);
//! table.calculate_totals_for([1]);
//!
//! assert_eq!(
//!     table.render(),
//!     "+--------+-----+\n\
//!      | Item   | Qty |\n\
//!      +--------+-----+\n\
//!      | apples |   3 |\n\
//!      | pears  |  12 |\n\
//!      +--------+-----+\n\
//!      |        |  15 |\n\
//!      +--------+-----+\n"
//! );
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::TableConfig;
use crate::error::{GridError, Result};
use crate::grid::{ColumnAligns, Grid};
use crate::layout::{self, Filter, Layout};
use crate::render::Renderer;
use crate::types::{Align, BorderVisibility, RowData};
use crate::width::WidthProvider;

/// A border-drawn text table built up incrementally.
#[derive(Clone, Debug)]
pub struct Table {
    config: TableConfig,
    grid: Grid,
    aligns: ColumnAligns,
    filters: Vec<Filter>,
    totals: BTreeSet<usize>,
    measure: Arc<dyn WidthProvider>,
}

impl Default for Table {
    fn default() -> Self {
        Self::with_config(TableConfig::default())
    }
}

impl Table {
    /// An empty table with ASCII borders, left alignment and padding 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty table; the width provider is picked from `config.encoding`.
    pub fn with_config(config: TableConfig) -> Self {
        let measure = config.encoding.provider();
        Table {
            aligns: ColumnAligns::new(config.align),
            config,
            grid: Grid::new(),
            filters: Vec::new(),
            totals: BTreeSet::new(),
            measure,
        }
    }

    /// Replace the width provider chosen from the configured encoding.
    pub fn width_provider(mut self, provider: Arc<dyn WidthProvider>) -> Self {
        self.measure = provider;
        self
    }

    /// Build a table from a header row and data rows.
    ///
    /// Empty `headers` leaves the table without a header block.
    pub fn from_rows<H, R, S>(headers: H, rows: R) -> Self
    where
        H: IntoIterator<Item = S>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::new();
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if !headers.is_empty() {
            table.set_headers(headers);
        }
        for row in rows {
            table.add_row(row);
        }
        table
    }

    /// Build a table from JSON. See [`Table::load_json`].
    pub fn from_json(headers: &Value, data: &Value) -> Result<Self> {
        let mut table = Table::new();
        table.load_json(headers, data)?;
        Ok(table)
    }

    /// Load JSON headers and rows into this table.
    ///
    /// `headers` must be an array of scalars and `data` an array whose
    /// entries are arrays (rows) or `null` (rules). Rows are appended after
    /// any existing rows; an empty `headers` array keeps the current header
    /// block. Nothing is changed when the input is rejected.
    pub fn load_json(&mut self, headers: &Value, data: &Value) -> Result<&mut Self> {
        let headers = headers.as_array().ok_or_else(|| {
            GridError::UnusableInput(format!("headers must be an array, got {}", kind(headers)))
        })?;
        let data = data.as_array().ok_or_else(|| {
            GridError::UnusableInput(format!("data must be an array, got {}", kind(data)))
        })?;

        let rows = data
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Null => Ok(RowData::Rule),
                Value::Array(cells) => Ok(RowData::Cells(cells.iter().map(json_cell).collect())),
                other => Err(GridError::UnusableInput(format!(
                    "row {} must be an array or null, got {}",
                    index,
                    kind(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        if !headers.is_empty() {
            self.set_headers(headers.iter().map(json_cell));
        }
        let start_row = self.grid.max_rows();
        Ok(self.add_data(rows, 0, start_row))
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The stored grid, before filters, totals or normalization.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn max_cols(&self) -> usize {
        self.grid.max_cols()
    }

    pub fn max_rows(&self) -> usize {
        self.grid.max_rows()
    }

    /// Alignment applied to column `col`.
    pub fn align_of(&self, col: usize) -> Align {
        self.aligns.get(col)
    }

    /// Replace the header block with one line starting at column 0.
    pub fn set_headers<S: Into<String>, I: IntoIterator<Item = S>>(
        &mut self,
        cells: I,
    ) -> &mut Self {
        self.grid.set_headers(collect(cells));
        self.sync_aligns()
    }

    /// Append a row after the last row.
    pub fn add_row<S: Into<String>, I: IntoIterator<Item = S>>(
        &mut self,
        cells: I,
    ) -> &mut Self {
        self.grid.add_row(collect(cells), true);
        self.sync_aligns()
    }

    /// Insert a row before every existing row.
    pub fn prepend_row<S: Into<String>, I: IntoIterator<Item = S>>(
        &mut self,
        cells: I,
    ) -> &mut Self {
        self.grid.add_row(collect(cells), false);
        self.sync_aligns()
    }

    /// Insert a row at index `at`, shifting later rows down.
    pub fn insert_row<S: Into<String>, I: IntoIterator<Item = S>>(
        &mut self,
        cells: I,
        at: usize,
    ) -> &mut Self {
        self.grid.insert_row(collect(cells), at);
        self.sync_aligns()
    }

    /// Write `cells` down column `col`, starting at row `start_row`.
    pub fn add_col<S: Into<String>, I: IntoIterator<Item = S>>(
        &mut self,
        cells: I,
        col: usize,
        start_row: usize,
    ) -> &mut Self {
        self.grid.add_col(collect(cells), col, start_row);
        self.sync_aligns()
    }

    /// Overlay a block of rows starting at (`start_row`, `start_col`).
    pub fn add_data<R: Into<RowData>, I: IntoIterator<Item = R>>(
        &mut self,
        rows: I,
        start_col: usize,
        start_row: usize,
    ) -> &mut Self {
        let rows = rows.into_iter().map(Into::into).collect();
        self.grid.add_data(rows, start_col, start_row);
        self.sync_aligns()
    }

    /// Append a horizontal rule.
    pub fn add_separator(&mut self) -> &mut Self {
        self.grid.add_separator();
        self
    }

    /// Set the alignment of one column.
    pub fn set_align(&mut self, col: usize, align: Align) -> &mut Self {
        self.aligns.set(col, align);
        self
    }

    pub fn set_border_visibility(&mut self, visibility: BorderVisibility) -> &mut Self {
        self.config.visibility = visibility;
        self
    }

    /// Register a transform for every data cell of column `col`.
    ///
    /// Filters run at render time, in registration order, so they also
    /// apply to rows added later.
    pub fn add_filter<F>(&mut self, col: usize, filter: F) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.filters.push(Filter::new(col, filter));
        self
    }

    /// Append a rule and a row of sums for these columns when rendering.
    ///
    /// Cells are read as their leading number; anything else counts as 0.
    pub fn calculate_totals_for<I: IntoIterator<Item = usize>>(&mut self, cols: I) -> &mut Self {
        self.totals = cols.into_iter().collect();
        self
    }

    /// Compute the layout the next render would draw.
    pub fn layout(&self) -> Layout {
        layout::compute(&self.grid, &self.filters, &self.totals, self.measure.as_ref())
    }

    /// Render the table as text.
    pub fn render(&self) -> String {
        tracing::debug!(
            rows = self.grid.max_rows(),
            cols = self.grid.max_cols(),
            filters = self.filters.len(),
            totals = self.totals.len(),
            "rendering table"
        );
        let layout = self.layout();

        let text = Renderer {
            border: self.config.border,
            visibility: self.config.visibility,
            padding: self.config.padding,
            line_ending: &self.config.line_ending,
            aligns: &self.aligns,
            measure: self.measure.as_ref(),
        }
        .render(&layout);
        tracing::debug!(lines = layout.lines.len(), bytes = text.len(), "rendered table");
        text
    }

    fn sync_aligns(&mut self) -> &mut Self {
        self.aligns.extend_to(self.grid.max_cols());
        self
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render a header row and data rows with the default configuration.
pub fn render_rows<H, R, S>(headers: H, rows: R) -> String
where
    H: IntoIterator<Item = S>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    Table::from_rows(headers, rows).render()
}

fn collect<S: Into<String>, I: IntoIterator<Item = S>>(cells: I) -> Vec<String> {
    cells.into_iter().map(Into::into).collect()
}

fn json_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
