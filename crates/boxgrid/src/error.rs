//! Error types for table configuration and construction.
//!
//! Grid mutation never fails: out-of-shape input is widened into a
//! rectangle during layout. Errors only come from the edges of the crate,
//! where text is parsed into typed values.

use thiserror::Error;

/// Errors raised while parsing configuration or building a table from data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Alignment name that is not `left`, `right` or `center`.
    #[error("invalid alignment '{0}': expected 'left', 'right' or 'center'")]
    InvalidAlignment(String),

    /// Border specifier that is not `ascii`, `none` or a single character.
    #[error("invalid border '{0}': expected 'ascii', 'none' or a single character")]
    InvalidBorder(String),

    /// Headers or data handed to a build-from-data entry point were not sequences.
    #[error("unusable input: {0}")]
    UnusableInput(String),

    /// Configuration document failed to parse.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for GridError {
    fn from(err: serde_yaml::Error) -> Self {
        GridError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Config(err.to_string())
    }
}

/// Result type for boxgrid operations.
pub type Result<T> = std::result::Result<T, GridError>;
