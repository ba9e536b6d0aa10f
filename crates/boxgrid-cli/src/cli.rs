//! Command-line arguments and the render pipeline behind them.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boxgrid::{Align, Border, Encoding, Table, TableConfig};
use clap::{ArgAction, Parser};

use crate::input::{self, Format};

/// Render CSV or JSON data as a border-drawn text table.
///
/// Reads FILE, or standard input when FILE is omitted or `-`.
#[derive(Debug, Parser)]
#[command(name = "boxgrid", version)]
pub struct Cli {
    /// Input file
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Input format (defaults to the file extension, then csv)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Treat the first CSV record as data
    #[arg(long)]
    pub no_header: bool,

    /// Default column alignment (left, right, center)
    #[arg(short, long)]
    pub align: Option<Align>,

    /// Alignment for one column, as COL=ALIGN
    #[arg(long = "col-align", value_name = "COL=ALIGN", value_parser = parse_col_align)]
    pub col_align: Vec<(usize, Align)>,

    /// Border style: ascii, none, or a single character
    #[arg(short, long)]
    pub border: Option<Border>,

    /// Spaces on each side of every cell
    #[arg(short, long)]
    pub padding: Option<usize>,

    /// Append a totals row summing this column (repeatable)
    #[arg(short, long = "total", value_name = "COL")]
    pub totals: Vec<usize>,

    /// Output encoding; anything but utf-8 measures width in bytes
    #[arg(short, long)]
    pub encoding: Option<String>,

    /// YAML file with table settings; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Settings from the config file, overridden by any flags given.
    pub fn table_config(&self) -> Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                TableConfig::from_yaml(&source)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => TableConfig::default(),
        };

        if let Some(align) = self.align {
            config.align = align;
        }
        if let Some(border) = self.border {
            config.border = border;
        }
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(label) = &self.encoding {
            config.encoding = Encoding::from_label(label);
        }
        Ok(config)
    }

    pub fn format(&self) -> Format {
        self.format
            .unwrap_or_else(|| Format::detect(self.file.as_deref()))
    }

    /// True when input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file
            .as_deref()
            .map_or(true, |path| path.as_os_str() == "-")
    }
}

/// Build and render the table described by `cli` over `source`.
pub fn run(cli: &Cli, source: &str) -> Result<String> {
    let config = cli.table_config()?;
    tracing::debug!(?config, "resolved table config");

    let mut table = Table::with_config(config);
    input::load(&mut table, source, cli.format(), !cli.no_header)?;

    for &(col, align) in &cli.col_align {
        table.set_align(col, align);
    }
    if !cli.totals.is_empty() {
        table.calculate_totals_for(cli.totals.iter().copied());
    }
    Ok(table.render())
}

fn parse_col_align(arg: &str) -> std::result::Result<(usize, Align), String> {
    let (col, align) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected COL=ALIGN, got '{arg}'"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column index '{col}'"))?;
    let align = align.trim().parse().map_err(|e: boxgrid::GridError| e.to_string())?;
    Ok((col, align))
}
