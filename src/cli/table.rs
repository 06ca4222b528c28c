//! Table formatting utilities for CLI list commands
//!
//! One formatter renders rows as an aligned terminal table, CSV or a
//! Markdown table, so every list command shares the same output code.

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{truncate_str, wrap_text};
use crate::cli::OutputFormat;
use crate::core::entity::BadgeTone;
use crate::entities::{DocumentKind, Impact, Probability};

/// Configuration for table output
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Maximum width for text columns before wrapping (None = truncate instead)
    pub wrap_width: Option<usize>,
    /// Show summary line after table (e.g., "7 stage(s) found")
    pub show_summary: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            wrap_width: None,
            show_summary: true,
        }
    }
}

impl TableConfig {
    /// Create config with text wrapping enabled at the specified width
    pub fn with_wrap(width: usize) -> Self {
        Self {
            wrap_width: Some(width),
            show_summary: true,
        }
    }

    /// Create config optimized for piping (no wrapping, no summary)
    pub fn for_pipe() -> Self {
        Self {
            wrap_width: None,
            show_summary: false,
        }
    }
}

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone)]
pub enum CellValue {
    /// Plain text, truncated or wrapped to the column width
    Text(String),
    /// Numeric value, right-aligned
    Number(i64),
    /// Risk probability badge
    Probability(Probability),
    /// Risk impact badge
    Impact(Impact),
    /// Document classification
    Kind(DocumentKind),
    /// Comma-separated list
    List(Vec<String>),
}

fn tone_style(text: String, tone: BadgeTone) -> String {
    match tone {
        BadgeTone::Danger => style(text).red().bold().to_string(),
        BadgeTone::Warning => style(text).yellow().to_string(),
        BadgeTone::Success => style(text).green().to_string(),
    }
}

impl CellValue {
    /// Get raw string value (no formatting)
    pub fn raw(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Probability(p) => p.label().to_string(),
            CellValue::Impact(i) => i.label().to_string(),
            CellValue::Kind(k) => k.label().to_string(),
            CellValue::List(items) => items.join(", "),
        }
    }

    /// Display width in characters
    pub fn display_width(&self) -> usize {
        self.raw().chars().count()
    }

    /// Pad to `width` characters and apply terminal styling
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Number(n) => format!("{:>width$}", n, width = width),
            CellValue::Probability(p) => tone_style(format!("{:<width$}", p.label()), p.tone()),
            CellValue::Impact(i) => tone_style(format!("{:<width$}", i.label()), i.tone()),
            CellValue::Kind(k) => {
                let padded = format!("{:<width$}", k.label());
                match k {
                    DocumentKind::Gost => style(padded).blue().to_string(),
                    DocumentKind::Tr => style(padded).magenta().to_string(),
                    DocumentKind::Iso => style(padded).cyan().to_string(),
                    DocumentKind::Law => style(padded).yellow().to_string(),
                    DocumentKind::Other => style(padded).dim().to_string(),
                }
            }
            CellValue::Text(_) | CellValue::List(_) => {
                let truncated = truncate_str(&self.raw(), width);
                format!("{:<width$}", truncated, width = width)
            }
        }
    }

    /// Format for Markdown output (escaped pipes)
    pub fn format_md(&self) -> String {
        self.raw().replace('|', "\\|")
    }
}

/// Column definition with header label and maximum width
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// A row of cell values for table output
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    pub cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Table formatter that outputs rows in various formats
pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    entity_name: &'static str,
    config: TableConfig,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef], entity_name: &'static str) -> Self {
        Self {
            columns,
            entity_name,
            config: TableConfig::default(),
        }
    }

    /// Configure the formatter with custom settings
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Render rows in the specified format
    pub fn render(&self, rows: &[TableRow], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Csv => self.render_csv(rows),
            OutputFormat::Md => Ok(self.render_md(rows)),
            _ => Ok(self.render_tsv(rows)),
        }
    }

    /// Print rows in the specified format
    pub fn output(&self, rows: &[TableRow], format: OutputFormat) -> Result<()> {
        print!("{}", self.render(rows, format)?);
        Ok(())
    }

    /// Column widths sized to content, capped at each column's width
    fn calculate_widths(&self, rows: &[TableRow]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| {
                let max_content = rows
                    .iter()
                    .filter_map(|r| r.get(col.key))
                    .map(|v| v.display_width())
                    .max()
                    .unwrap_or(0);
                col.header.chars().count().max(max_content).min(col.width)
            })
            .collect()
    }

    fn render_tsv(&self, rows: &[TableRow]) -> String {
        let widths = self.calculate_widths(rows);
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| style(format!("{:<w$}", col.header, w = *w)).bold().to_string())
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        for row in rows {
            match self.config.wrap_width {
                Some(wrap) => self.render_row_wrapped(&mut out, row, &widths, wrap),
                None => {
                    let parts: Vec<String> = self
                        .columns
                        .iter()
                        .zip(&widths)
                        .map(|(col, w)| match row.get(col.key) {
                            Some(value) => value.format_tsv(*w),
                            None => format!("{:<w$}", "-", w = *w),
                        })
                        .collect();
                    out.push_str(parts.join(" ").trim_end());
                    out.push('\n');
                }
            }
        }

        if self.config.show_summary {
            out.push('\n');
            out.push_str(&format!(
                "{} {}(s) found.\n",
                style(rows.len()).cyan(),
                self.entity_name
            ));
        }

        out
    }

    /// Text cells wrap onto continuation lines; other cells print on the first line only
    fn render_row_wrapped(&self, out: &mut String, row: &TableRow, widths: &[usize], wrap: usize) {
        let cells: Vec<Vec<String>> = self
            .columns
            .iter()
            .zip(widths)
            .map(|(col, w)| match row.get(col.key) {
                Some(value @ (CellValue::Text(_) | CellValue::List(_))) => {
                    wrap_text(&value.raw(), (*w).min(wrap).max(1))
                        .into_iter()
                        .map(|line| format!("{:<w$}", line, w = *w))
                        .collect()
                }
                Some(value) => vec![value.format_tsv(*w)],
                None => vec![format!("{:<w$}", "-", w = *w)],
            })
            .collect();

        let height = cells.iter().map(Vec::len).max().unwrap_or(1);
        for line in 0..height {
            let parts: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(lines, w)| {
                    lines
                        .get(line)
                        .cloned()
                        .unwrap_or_else(|| " ".repeat(*w))
                })
                .collect();
            out.push_str(parts.join(" ").trim_end());
            out.push('\n');
        }
    }

    fn render_csv(&self, rows: &[TableRow]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.columns.iter().map(|c| c.key))
            .into_diagnostic()?;
        for row in rows {
            writer
                .write_record(
                    self.columns
                        .iter()
                        .map(|c| row.get(c.key).map(|v| v.raw()).unwrap_or_default()),
                )
                .into_diagnostic()?;
        }
        let bytes = writer.into_inner().into_diagnostic()?;
        String::from_utf8(bytes).into_diagnostic()
    }

    fn render_md(&self, rows: &[TableRow]) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().map(|c| c.header.to_string()));
        for row in rows {
            builder.push_record(self.columns.iter().map(|c| {
                row.get(c.key)
                    .map(|v| v.format_md())
                    .unwrap_or_else(|| "-".to_string())
            }));
        }
        let mut table = builder.build();
        table.with(Style::markdown());
        format!("{}\n", table)
    }
}
