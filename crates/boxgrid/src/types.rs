//! Core value types shared by the grid, layout and renderer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides, extra space on the right).
    Center,
}

impl Align {
    /// Lowercase name used by config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Right => "right",
            Align::Center => "center",
        }
    }
}

impl FromStr for Align {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "right" => Ok(Align::Right),
            "center" | "centre" => Ok(Align::Center),
            _ => Err(GridError::InvalidAlignment(s.to_string())),
        }
    }
}

impl TryFrom<String> for Align {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Align> for String {
    fn from(align: Align) -> Self {
        align.as_str().to_string()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Border drawn around and between cells.
///
/// `Ascii` uses `|` between cells, `-` for rules and `+` at the corners.
/// A custom character is used for all three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Border {
    /// No borders and no separator lines.
    None,
    /// ASCII borders: `+`, `-`, `|`.
    #[default]
    Ascii,
    /// One character for rules, corners and vertical borders.
    Char(char),
}

impl Border {
    /// Character between cells on data lines.
    pub fn vertical(&self) -> Option<char> {
        match self {
            Border::None => None,
            Border::Ascii => Some('|'),
            Border::Char(c) => Some(*c),
        }
    }

    /// Character filling separator lines.
    pub fn rule(&self) -> Option<char> {
        match self {
            Border::None => None,
            Border::Ascii => Some('-'),
            Border::Char(c) => Some(*c),
        }
    }

    /// Character where separator lines cross a vertical border.
    pub fn corner(&self) -> Option<char> {
        match self {
            Border::None => None,
            Border::Ascii => Some('+'),
            Border::Char(c) => Some(*c),
        }
    }

    /// Whether separator lines are drawn at all.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Border::None)
    }
}

impl FromStr for Border {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Border::None);
        }
        if s.eq_ignore_ascii_case("ascii") {
            return Ok(Border::Ascii);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Border::Char(c)),
            _ => Err(GridError::InvalidBorder(s.to_string())),
        }
    }
}

impl TryFrom<String> for Border {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Border> for String {
    fn from(border: Border) -> Self {
        match border {
            Border::None => "none".to_string(),
            Border::Ascii => "ascii".to_string(),
            Border::Char(c) => c.to_string(),
        }
    }
}

/// Which parts of the border are drawn.
///
/// The separator below the header block and separators for rule rows are
/// always drawn when the table has a border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderVisibility {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub inner: bool,
}

impl Default for BorderVisibility {
    fn default() -> Self {
        BorderVisibility {
            top: true,
            bottom: true,
            left: true,
            right: true,
            inner: true,
        }
    }
}

impl BorderVisibility {
    /// Every border hidden. Combine with field updates to show a subset.
    pub fn hidden() -> Self {
        BorderVisibility {
            top: false,
            bottom: false,
            left: false,
            right: false,
            inner: false,
        }
    }
}

/// Sparse cells of one row or header line, keyed by column index.
pub type Cells = BTreeMap<usize, String>;

/// One stored row: data cells or a horizontal rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    Data(Cells),
    Rule,
}

impl Row {
    /// Build a data row from cells starting at column 0.
    pub fn from_cells<S: Into<String>, I: IntoIterator<Item = S>>(cells: I) -> Self {
        Row::Data(cells.into_iter().map(Into::into).enumerate().collect())
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, Row::Rule)
    }

    /// The cell map, or `None` for a rule.
    pub fn cells(&self) -> Option<&Cells> {
        match self {
            Row::Data(cells) => Some(cells),
            Row::Rule => None,
        }
    }

    /// The cell at `col`, if this is a data row and the cell is set.
    pub fn cell(&self, col: usize) -> Option<&str> {
        self.cells()?.get(&col).map(String::as_str)
    }
}

/// One entry of bulk input for [`Table::add_data`](crate::Table::add_data).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowData {
    /// Cells written at successive columns.
    Cells(Vec<String>),
    /// A horizontal rule occupying one row index.
    Rule,
}

impl<S: Into<String>> From<Vec<S>> for RowData {
    fn from(cells: Vec<S>) -> Self {
        RowData::Cells(cells.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for RowData {
    fn from(cells: [S; N]) -> Self {
        RowData::Cells(cells.into_iter().map(Into::into).collect())
    }
}
