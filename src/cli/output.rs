//! Structured output for show, summary and list commands

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::table::{TableFormatter, TableRow};
use crate::cli::OutputFormat;

/// Serialize `value` as JSON or YAML; `None` for the table formats
pub fn serialized<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value).into_diagnostic()?;
            json.push('\n');
            Ok(Some(json))
        }
        OutputFormat::Yaml => Ok(Some(serde_yml::to_string(value).into_diagnostic()?)),
        _ => Ok(None),
    }
}

/// Print a list either serialized or as a table
///
/// `Auto` means the table. Rows are only built when a table is wanted.
pub fn print_list<T, F>(
    records: &[T],
    format: OutputFormat,
    table: TableFormatter<'_>,
    to_row: F,
) -> Result<()>
where
    T: Serialize,
    F: Fn(&T) -> TableRow,
{
    if let Some(text) = serialized(records, format)? {
        print!("{}", text);
        return Ok(());
    }
    if records.is_empty() && matches!(format, OutputFormat::Auto | OutputFormat::Tsv) {
        println!("No {} records found.", table.entity_name());
        return Ok(());
    }
    let rows: Vec<TableRow> = records.iter().map(to_row).collect();
    table.output(&rows, format.or(OutputFormat::Tsv))
}

/// Print one record: YAML unless another format was asked for
pub fn print_record<T: Serialize>(record: &T, format: OutputFormat) -> Result<()> {
    let format = match format {
        OutputFormat::Json => OutputFormat::Json,
        _ => OutputFormat::Yaml,
    };
    if let Some(text) = serialized(record, format)? {
        print!("{}", text);
    }
    Ok(())
}
