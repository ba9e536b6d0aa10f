//! Turns a [`Layout`] into bordered text.
//!
//! A data line is
//!
//! ```text
//! | cell | cell | cell |
//! ```
//!
//! with `padding` spaces on each side of every cell, and a separator line
//! has the same shape with rule characters in place of cells and padding
//! and corners in place of vertical borders:
//!
//! ```text
//! +------+------+------+
//! ```

use crate::grid::ColumnAligns;
use crate::layout::{Layout, Line};
use crate::types::{Border, BorderVisibility};
use crate::width::WidthProvider;

/// Border, padding and alignment settings for one render.
pub(crate) struct Renderer<'a> {
    pub(crate) border: Border,
    pub(crate) visibility: BorderVisibility,
    pub(crate) padding: usize,
    pub(crate) line_ending: &'a str,
    pub(crate) aligns: &'a ColumnAligns,
    pub(crate) measure: &'a dyn WidthProvider,
}

impl Renderer<'_> {
    /// Render every line, each followed by the line ending.
    ///
    /// An empty layout renders as the empty string whatever the border.
    pub(crate) fn render(&self, layout: &Layout) -> String {
        if layout.is_empty() {
            return String::new();
        }

        let separator = self.separator(&layout.widths);
        let mut output = Vec::with_capacity(layout.headers.len() + layout.lines.len() + 3);

        if self.visibility.top {
            output.extend(separator.clone());
        }
        if !layout.headers.is_empty() {
            for header in &layout.headers {
                output.push(self.data_line(header, &layout.widths));
            }
            output.extend(separator.clone());
        }
        for line in &layout.lines {
            match line {
                Line::Cells(cells) => output.push(self.data_line(cells, &layout.widths)),
                Line::Rule => output.extend(separator.clone()),
            }
        }
        if self.visibility.bottom {
            output.extend(separator);
        }

        let mut text = output.join(self.line_ending);
        text.push_str(self.line_ending);
        text
    }

    fn data_line(&self, cells: &[String], widths: &[usize]) -> String {
        let pad = " ".repeat(self.padding);
        let vertical = self.border.vertical().map(String::from).unwrap_or_default();
        let joint = match self.border {
            Border::None => String::new(),
            _ if !self.visibility.inner => " ".to_string(),
            _ => vertical.clone(),
        };

        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(col, (cell, width))| {
                self.measure.pad(cell, *width, ' ', self.aligns.get(col))
            })
            .collect();

        let mut line = String::new();
        if self.visibility.left {
            line.push_str(&vertical);
        }
        line.push_str(&pad);
        line.push_str(&padded.join(&format!("{pad}{joint}{pad}")));
        line.push_str(&pad);
        if self.visibility.right {
            line.push_str(&vertical);
        }
        line
    }

    /// The separator line, or `None` when the table has no border.
    fn separator(&self, widths: &[usize]) -> Option<String> {
        let (rule, corner) = (self.border.rule()?, self.border.corner()?);
        let pad = rule.to_string().repeat(self.padding);
        let joint = if self.visibility.inner { corner } else { rule };

        let runs: Vec<String> = widths
            .iter()
            .map(|width| rule.to_string().repeat(*width))
            .collect();

        let mut line = String::new();
        if self.visibility.left {
            line.push(corner);
        }
        line.push_str(&pad);
        line.push_str(&runs.join(&format!("{pad}{joint}{pad}")));
        line.push_str(&pad);
        if self.visibility.right {
            line.push(corner);
        }
        Some(line)
    }
}
