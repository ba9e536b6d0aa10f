//! Table configuration.
//!
//! Every field has a default, so a config file only names what it changes:
//!
//! ```rust
//! use boxgrid::{Align, Border, TableConfig};
//!
//! let config = TableConfig::from_yaml(r#"
//! align: right
//! border: "*"
//! padding: 2
//! visibility:
//!   top: false
//! "#).unwrap();
//!
//! assert_eq!(config.align, Align::Right);
//! assert_eq!(config.border, Border::Char('*'));
//! assert_eq!(config.padding, 2);
//! assert!(!config.visibility.top);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Align, Border, BorderVisibility};
use crate::width::Encoding;

/// Construction parameters for a [`Table`](crate::Table).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Alignment for every column without an explicit one.
    pub align: Align,
    /// `ascii`, `none`, or a single character.
    pub border: Border,
    /// Spaces on each side of every cell.
    pub padding: usize,
    /// Selects how display width is measured.
    pub encoding: Encoding,
    /// Terminator after every output line.
    pub line_ending: String,
    pub visibility: BorderVisibility,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            align: Align::Left,
            border: Border::Ascii,
            padding: 1,
            encoding: Encoding::Utf8,
            line_ending: "\n".to_string(),
            visibility: BorderVisibility::default(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }

    pub fn visibility(mut self, visibility: BorderVisibility) -> Self {
        self.visibility = visibility;
        self
    }
}
