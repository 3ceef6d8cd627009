//! `fleet alert` command - system alert feed

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::Context;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::{Alert, Severity};
use crate::views::alerts;

#[derive(Subcommand, Debug)]
pub enum AlertCommands {
    /// List alerts
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search message and type
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by severity (low, medium, high or all)
    #[arg(long, default_value = "all")]
    pub severity: Filter<Severity>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("event", "EVENT", 8),
    ColumnDef::new("date", "DATE", 10),
    ColumnDef::new("type", "TYPE", 11),
    ColumnDef::new("severity", "SEVERITY", 8),
    ColumnDef::new("message", "MESSAGE", 48),
];

pub fn run(cmd: AlertCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        AlertCommands::List(args) => run_list(args, app, ctx),
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let feed = alerts::list(&app.store, args.search.as_deref().unwrap_or(""), &args.severity);

    if args.count {
        println!("{}", feed.len());
        return Ok(());
    }

    let table = TableFormatter::new(COLUMNS, "alert").quiet(ctx.quiet());
    output::print_list(&feed, ctx.format(), table, |a| row(a))
}

fn row(a: &Alert) -> TableRow {
    TableRow::new(&a.id)
        .cell("event", CellValue::Id(a.event_id()))
        .cell("date", CellValue::Date(a.date))
        .cell("type", CellValue::Text(a.alert_type.to_string()))
        .cell("severity", CellValue::Severity(a.severity))
        .cell("message", CellValue::Text(a.message.clone()))
}
