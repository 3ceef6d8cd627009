//! Table formatting utilities for CLI list commands
//!
//! Every list command builds [`TableRow`]s of typed [`CellValue`]s and hands
//! them to a [`TableFormatter`], which renders them as an aligned table,
//! CSV, Markdown or bare ids.

use chrono::{NaiveDate, NaiveDateTime};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{format_money, truncate_str};
use crate::cli::OutputFormat;
use crate::entities::{Priority, Severity};

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Record id (cyan)
    Id(String),
    /// Plain text, truncated to the column width
    Text(String),
    /// Lifecycle or availability status, colored by meaning
    Status(String),
    Priority(Priority),
    Severity(Severity),
    /// Rand amount
    Money(f64),
    Number(i64),
    /// Float value with precision
    Float(f64, usize),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Yes/no flag; `true` is shown as a warning
    Flag(bool),
    Empty,
}

impl CellValue {
    /// Value without styling, as written to CSV and Markdown
    pub fn raw(&self) -> String {
        match self {
            CellValue::Id(s) | CellValue::Text(s) | CellValue::Status(s) => s.clone(),
            CellValue::Priority(p) => p.to_string(),
            CellValue::Severity(s) => s.to_string(),
            CellValue::Money(m) => format_money(*m),
            CellValue::Number(n) => n.to_string(),
            CellValue::Float(f, precision) => format!("{:.prec$}", f, prec = precision),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            CellValue::Flag(b) => (if *b { "yes" } else { "no" }).to_string(),
            CellValue::Empty => "-".to_string(),
        }
    }

    /// Width the value needs, in characters
    pub fn display_width(&self) -> usize {
        self.raw().chars().count()
    }

    /// Styled and padded for the aligned table
    pub fn format_tsv(&self, width: usize) -> String {
        let raw = truncate_str(&self.raw(), width);
        let styled = match self {
            CellValue::Id(_) => style(raw).cyan(),
            CellValue::Status(s) => match s.as_str() {
                "ACTIVE" | "AVAILABLE" | "COMPLETED" | "RESOLVED" | "assigned" => style(raw).green(),
                "MAINTENANCE" | "IN_PROGRESS" | "ON_ROUTE" => style(raw).yellow(),
                "INACTIVE" | "OFF_DUTY" | "unassigned" => style(raw).dim(),
                _ => style(raw).cyan(),
            },
            CellValue::Priority(p) => match p {
                Priority::Low => style(raw).dim(),
                Priority::Medium => style(raw).white(),
                Priority::High => style(raw).yellow(),
                Priority::Critical => style(raw).red().bold(),
            },
            CellValue::Severity(s) => match s {
                Severity::Low => style(raw).dim(),
                Severity::Medium => style(raw).yellow(),
                Severity::High => style(raw).red().bold(),
            },
            CellValue::Money(_) => style(raw).green(),
            CellValue::Flag(true) => style(raw).red().bold(),
            CellValue::Flag(false) | CellValue::Empty => style(raw).dim(),
            _ => style(raw),
        };
        format!("{:<width$}", styled, width = width)
    }

    /// Format for Markdown output (no colors, escaped pipes)
    pub fn format_md(&self) -> String {
        self.raw().replace('|', "\\|")
    }
}

/// Column definition for table output
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    /// Upper bound on the rendered width
    pub width: usize,
}

impl ColumnDef {
    pub const fn new(key: &'static str, header: &'static str, width: usize) -> Self {
        Self { key, header, width }
    }
}

/// A row of table data
#[derive(Debug, Clone)]
pub struct TableRow {
    pub id: String,
    cells: Vec<(&'static str, CellValue)>,
}

impl TableRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: Vec::new(),
        }
    }

    /// Add a cell value, builder style
    pub fn cell(mut self, key: &'static str, value: CellValue) -> Self {
        self.cells.push((key, value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

/// Table formatter for consistent output across commands
pub struct TableFormatter<'a> {
    columns: &'a [ColumnDef],
    entity_name: &'static str,
    show_summary: bool,
}

impl<'a> TableFormatter<'a> {
    pub fn new(columns: &'a [ColumnDef], entity_name: &'static str) -> Self {
        Self {
            columns,
            entity_name,
            show_summary: true,
        }
    }

    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    /// Drop the "N found" line under the table
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.show_summary = !quiet;
        self
    }

    /// Render rows in the specified format
    pub fn render(&self, rows: &[TableRow], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Csv => self.render_csv(rows),
            OutputFormat::Md => Ok(self.render_md(rows)),
            OutputFormat::Id => Ok(rows.iter().map(|r| format!("{}\n", r.id)).collect()),
            _ => Ok(self.render_tsv(rows)),
        }
    }

    /// Print rows in the specified format
    pub fn output(&self, rows: &[TableRow], format: OutputFormat) -> Result<()> {
        print!("{}", self.render(rows, format)?);
        Ok(())
    }

    /// Column widths sized to content, capped at each column's width
    fn widths(&self, rows: &[TableRow]) -> Vec<usize> {
        self.columns
            .iter()
            .map(|col| {
                let content = rows
                    .iter()
                    .filter_map(|r| r.get(col.key))
                    .map(|v| v.display_width())
                    .max()
                    .unwrap_or(0);
                col.header.len().max(content).min(col.width)
            })
            .collect()
    }

    fn render_tsv(&self, rows: &[TableRow]) -> String {
        let widths = self.widths(rows);
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, &w)| format!("{:<w$}", style(col.header).bold(), w = w))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(col, &w)| match row.get(col.key) {
                    Some(value) => value.format_tsv(w),
                    None => format!("{:<w$}", "-", w = w),
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        if self.show_summary {
            out.push('\n');
            out.push_str(&format!(
                "{} {}(s) found.\n",
                style(rows.len()).cyan(),
                self.entity_name
            ));
        }
        out
    }

    fn render_csv(&self, rows: &[TableRow]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.columns.iter().map(|c| c.key))
            .into_diagnostic()?;
        for row in rows {
            writer
                .write_record(self.columns.iter().map(|col| match row.get(col.key) {
                    Some(CellValue::Empty) | None => String::new(),
                    Some(CellValue::Money(m)) => format!("{:.2}", m),
                    Some(value) => value.raw(),
                }))
                .into_diagnostic()?;
        }
        let bytes = writer.into_inner().into_diagnostic()?;
        String::from_utf8(bytes).into_diagnostic()
    }

    fn render_md(&self, rows: &[TableRow]) -> String {
        let mut out = String::new();
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header).collect();
        out.push_str(&format!("| {} |\n", headers.join(" | ")));
        let separators: Vec<&str> = headers.iter().map(|_| "---").collect();
        out.push_str(&format!("|{}|\n", separators.join("|")));
        for row in rows {
            let values: Vec<String> = self
                .columns
                .iter()
                .map(|col| row.get(col.key).map_or("-".to_string(), |v| v.format_md()))
                .collect();
            out.push_str(&format!("| {} |\n", values.join(" | ")));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[ColumnDef] = &[
        ColumnDef::new("id", "ID", 8),
        ColumnDef::new("source", "SOURCE", 30),
        ColumnDef::new("amount", "AMOUNT", 12),
    ];

    fn rows() -> Vec<TableRow> {
        vec![
            TableRow::new("REV-001")
                .cell("id", CellValue::Id("REV-001".to_string()))
                .cell("source", CellValue::Text("Transnet, Durban".to_string()))
                .cell("amount", CellValue::Money(85500.0)),
            TableRow::new("REV-002")
                .cell("id", CellValue::Id("REV-002".to_string()))
                .cell("source", CellValue::Text("Imperial | Logistics".to_string())),
        ]
    }

    #[test]
    fn test_cell_raw_values() {
        assert_eq!(CellValue::Money(12400.0).raw(), "R12,400");
        assert_eq!(CellValue::Float(24.0, 2).raw(), "24.00");
        assert_eq!(CellValue::Flag(true).raw(), "yes");
        assert_eq!(CellValue::Priority(Priority::High).raw(), "HIGH");
        assert_eq!(CellValue::Empty.raw(), "-");
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        assert_eq!(CellValue::Date(date).raw(), "2024-05-20");
    }

    #[test]
    fn test_csv_quotes_and_blanks() {
        let out = TableFormatter::new(COLUMNS, "record")
            .render(&rows(), OutputFormat::Csv)
            .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id,source,amount");
        assert_eq!(lines[1], "REV-001,\"Transnet, Durban\",85500.00");
        assert_eq!(lines[2], "REV-002,Imperial | Logistics,");
    }

    #[test]
    fn test_md_escapes_pipes() {
        let out = TableFormatter::new(COLUMNS, "record")
            .render(&rows(), OutputFormat::Md)
            .unwrap();
        assert!(out.starts_with("| ID | SOURCE | AMOUNT |\n|---|---|---|\n"));
        assert!(out.contains("Imperial \\| Logistics"));
        assert!(out.contains("| REV-002 | Imperial \\| Logistics | - |"));
    }

    #[test]
    fn test_ids_only() {
        let out = TableFormatter::new(COLUMNS, "record")
            .render(&rows(), OutputFormat::Id)
            .unwrap();
        assert_eq!(out, "REV-001\nREV-002\n");
    }

    #[test]
    fn test_tsv_summary_can_be_hidden() {
        let loud = TableFormatter::new(COLUMNS, "record")
            .render(&rows(), OutputFormat::Tsv)
            .unwrap();
        assert!(loud.contains("record(s) found."));
        assert!(loud.contains("R85,500"));

        let quiet = TableFormatter::new(COLUMNS, "record")
            .quiet(true)
            .render(&rows(), OutputFormat::Auto)
            .unwrap();
        assert!(!quiet.contains("found."));
    }
}
