//! Display-width measurement and padding.
//!
//! The layout engine never measures text itself; it asks a [`WidthProvider`]
//! chosen once when the table is configured. Both providers here exclude
//! ANSI escape sequences from measurement and keep them in the output.
//!
//! ```rust
//! use boxgrid::width::{display_width, pad_center, pad_left};
//!
//! assert_eq!(display_width("日本"), 4);
//! assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
//! assert_eq!(pad_left("5", 5), "    5");
//! assert_eq!(pad_center("ab", 5), " ab  ");
//! ```

use std::fmt;
use std::sync::Arc;

use console::{measure_text_width, pad_str_with, strip_ansi_codes, Alignment};
use serde::{Deserialize, Serialize};

use crate::types::Align;

/// Measures and pads text segments for the layout engine.
pub trait WidthProvider: fmt::Debug + Send + Sync {
    /// Number of terminal cells `text` occupies.
    fn width(&self, text: &str) -> usize;

    /// Pad `text` with `fill` until it is at least `width` cells wide.
    ///
    /// Text already at or beyond `width` is returned unchanged.
    fn pad(&self, text: &str, width: usize, fill: char, align: Align) -> String;
}

/// Unicode-aware measurement: CJK counts as two cells, combining marks as zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWidth;

impl WidthProvider for UnicodeWidth {
    fn width(&self, text: &str) -> usize {
        measure_text_width(text)
    }

    fn pad(&self, text: &str, width: usize, fill: char, align: Align) -> String {
        pad_str_with(text, width, alignment(align), None, fill).into_owned()
    }
}

/// Byte-length measurement for encodings without width tables.
///
/// Multi-byte characters overcount, so columns come out wider than needed.
/// Used as the degraded path for any encoding other than UTF-8.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByteWidth;

impl WidthProvider for ByteWidth {
    fn width(&self, text: &str) -> usize {
        strip_ansi_codes(text).len()
    }

    fn pad(&self, text: &str, width: usize, fill: char, align: Align) -> String {
        let current = self.width(text);
        if current >= width {
            return text.to_string();
        }
        let diff = width - current;
        let (left, right) = split_padding(diff, align);
        let fill = fill.to_string();
        format!("{}{}{}", fill.repeat(left), text, fill.repeat(right))
    }
}

/// Left and right padding amounts for a deficit of `diff` cells.
fn split_padding(diff: usize, align: Align) -> (usize, usize) {
    match align {
        Align::Left => (0, diff),
        Align::Right => (diff, 0),
        Align::Center => {
            let left = diff / 2;
            (left, diff - left)
        }
    }
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
        Align::Center => Alignment::Center,
    }
}

/// Text encoding label; selects the width provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Encoding {
    #[default]
    Utf8,
    /// Any other label. Measured by byte length.
    Other(String),
}

impl Encoding {
    /// Parse an encoding label such as `utf-8`, `UTF8` or `iso-8859-1`.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        if normalized == "utf8" {
            Encoding::Utf8
        } else {
            Encoding::Other(label.to_string())
        }
    }

    /// The width provider for this encoding.
    pub fn provider(&self) -> Arc<dyn WidthProvider> {
        match self {
            Encoding::Utf8 => Arc::new(UnicodeWidth),
            Encoding::Other(label) => {
                tracing::debug!(encoding = %label, "no width table for encoding, measuring bytes");
                Arc::new(ByteWidth)
            }
        }
    }
}

impl From<String> for Encoding {
    fn from(label: String) -> Self {
        Encoding::from_label(&label)
    }
}

impl From<Encoding> for String {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Utf8 => "utf-8".to_string(),
            Encoding::Other(label) => label,
        }
    }
}

/// Returns the display width of a string, ignoring ANSI escape codes.
pub fn display_width(s: &str) -> usize {
    UnicodeWidth.width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
pub fn pad_left(s: &str, width: usize) -> String {
    UnicodeWidth.pad(s, width, ' ', Align::Right)
}

/// Pads a string on the right (left-aligns) to reach the target width.
pub fn pad_right(s: &str, width: usize) -> String {
    UnicodeWidth.pad(s, width, ' ', Align::Left)
}

/// Pads a string on both sides; an odd remainder goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    UnicodeWidth.pad(s, width, ' ', Align::Center)
}
