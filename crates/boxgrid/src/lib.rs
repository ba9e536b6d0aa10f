//! # boxgrid - border-drawn text tables
//!
//! `boxgrid` renders headers and rows into a fixed-width block of text for
//! terminals and other monospaced output. Tables are built incrementally and
//! may be sparse: rows and columns can be written out of order, overlaid or
//! spliced, and every gap is filled with an empty cell when the table is
//! laid out.
//!
//! ## Core Concepts
//!
//! - [`Table`]: the grid plus alignment, filters, totals and configuration
//! - [`TableConfig`]: default alignment, [`Border`], padding, [`Encoding`]
//! - [`WidthProvider`]: measures and pads text by display width
//! - [`Layout`]: the normalized, split and sized grid a render draws
//!
//! ## Quick Start
//!
//! ```rust
//! use boxgrid::Table;
//!
//! let table = Table::from_rows(["Name", "Score"], [["Alice", "10"], ["Bob", "7"]]);
//!
//! assert_eq!(
//!     table.to_string(),
//!     "+-------+-------+\n\
//!      | Name  | Score |\n\
//!      +-------+-------+\n\
//!      | Alice | 10    |\n\
//!      | Bob   | 7     |\n\
//!      +-------+-------+\n"
//! );
//! ```
//!
//! ## Multiline Cells
//!
//! A cell containing newlines makes its whole row that many lines tall;
//! the other cells of the row show on the first line only.
//!
//! ```rust
//! use boxgrid::{Border, Table, TableConfig};
//!
//! let mut table = Table::with_config(TableConfig::new().border(Border::Char('*')));
//! table.add_row(["id", "first line\nsecond line"]);
//!
//! assert_eq!(
//!     table.render(),
//!     "********************\n\
//!      * id * first line  *\n\
//!      *    * second line *\n\
//!      ********************\n"
//! );
//! ```
//!
//! ## Rendering Pipeline
//!
//! Each render works on a copy of the stored grid:
//!
//! 1. filters registered with [`Table::add_filter`] rewrite data cells;
//! 2. [`Table::calculate_totals_for`] appends a rule and a row of sums;
//! 3. missing cells are filled and row heights measured;
//! 4. multiline rows and header lines are split;
//! 5. column widths are measured and every line is padded and bordered.

pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
mod render;
pub mod table;
pub mod types;
pub mod width;

pub use config::TableConfig;
pub use error::{GridError, Result};
pub use grid::Grid;
pub use layout::{Filter, Layout, Line};
pub use table::{render_rows, Table};
pub use types::{Align, Border, BorderVisibility, Cells, Row, RowData};
pub use width::{ByteWidth, Encoding, UnicodeWidth, WidthProvider};
