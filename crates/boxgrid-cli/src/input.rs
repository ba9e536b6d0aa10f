//! Loading CSV and JSON input into a table.

use std::path::Path;

use anyhow::{bail, Context, Result};
use boxgrid::{RowData, Table};
use clap::ValueEnum;
use serde_json::Value;

/// Input syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Guess from a file extension; anything but `.json` is read as CSV.
    pub fn detect(path: Option<&Path>) -> Self {
        match path.and_then(Path::extension).and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Csv,
        }
    }
}

/// Parse `source` and append its headers and rows to `table`.
pub fn load(table: &mut Table, source: &str, format: Format, has_header: bool) -> Result<()> {
    match format {
        Format::Csv => load_csv(table, source, has_header),
        Format::Json => load_json(table, source),
    }
}

fn load_csv(table: &mut Table, source: &str, has_header: bool) -> Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(source.as_bytes());

    if has_header {
        let headers = reader.headers().context("failed to read CSV header")?;
        if !headers.is_empty() {
            table.set_headers(headers.iter());
        }
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to read CSV record {}", index + 1))?;
        rows.push(RowData::Cells(record.iter().map(String::from).collect()));
    }
    tracing::debug!(rows = rows.len(), "read CSV input");

    let start_row = table.max_rows();
    table.add_data(rows, 0, start_row);
    Ok(())
}

/// Accepts `{"headers": [...], "rows": [...]}` or a bare array of rows.
fn load_json(table: &mut Table, source: &str) -> Result<()> {
    let value: Value = serde_json::from_str(source).context("input is not valid JSON")?;
    let empty = Value::Array(Vec::new());

    let (headers, rows) = match &value {
        Value::Array(_) => (&empty, &value),
        Value::Object(map) => {
            let rows = map
                .get("rows")
                .context("JSON object input needs a \"rows\" array")?;
            (map.get("headers").unwrap_or(&empty), rows)
        }
        _ => bail!("JSON input must be an object or an array of rows"),
    };
    tracing::debug!(
        rows = rows.as_array().map_or(0, Vec::len),
        "read JSON input"
    );

    table.load_json(headers, rows)?;
    Ok(())
}
