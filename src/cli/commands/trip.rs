//! `fleet trip` command - Journey Log

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::crud::{self, ShowArgs};
use crate::cli::commands::Context;
use crate::cli::helpers::format_money;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::OutputFormat;
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::{Trip, TripStatus};
use crate::views::crud as view;
use crate::views::trips::{complete_trip, summary};
use crate::views::{Transition, TripsView};

#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// List trips
    List(ListArgs),

    /// Show a trip
    Show(ShowArgs),

    /// Dispatch a new trip (starts now, PENDING)
    New(NewArgs),

    /// Edit a trip
    Edit(EditArgs),

    /// Mark a trip COMPLETED and stamp its end time
    Complete(ShowArgs),

    /// Revenue and trip counts by status
    Summary,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search origin and destination
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (PENDING, IN_PROGRESS, COMPLETED or all)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Filter<TripStatus>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Trip form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct TripFields {
    /// Vehicle id
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Driver id
    #[arg(long)]
    pub driver: Option<String>,

    /// Origin
    #[arg(long)]
    pub origin: Option<String>,

    /// Destination
    #[arg(long)]
    pub destination: Option<String>,

    /// Revenue in rand
    #[arg(long)]
    pub revenue: Option<String>,
}

impl TripFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("vehicle", self.vehicle);
        form.set_opt("driver", self.driver);
        form.set_opt("origin", self.origin);
        form.set_opt("destination", self.destination);
        form.set_opt("revenue", self.revenue);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: TripFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Trip id
    pub id: String,

    #[command(flatten)]
    pub fields: TripFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 6),
    ColumnDef::new("vehicle", "VEHICLE", 8),
    ColumnDef::new("driver", "DRIVER", 8),
    ColumnDef::new("origin", "ORIGIN", 14),
    ColumnDef::new("destination", "DESTINATION", 14),
    ColumnDef::new("start", "START", 16),
    ColumnDef::new("end", "END", 16),
    ColumnDef::new("revenue", "REVENUE", 10),
    ColumnDef::new("status", "STATUS", 12),
];

pub fn run(cmd: TripCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        TripCommands::List(args) => run_list(args, app, ctx),
        TripCommands::Show(args) => crud::show::<TripsView>(app, &args.id, ctx),
        TripCommands::New(args) => {
            crud::create::<TripsView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        TripCommands::Edit(args) => {
            crud::edit::<TripsView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        TripCommands::Complete(args) => run_complete(&args.id, app, ctx),
        TripCommands::Summary => run_summary(app, ctx),
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let trips = view::list::<TripsView>(&app.store, args.search.as_deref().unwrap_or(""), &args.status);

    if args.count {
        println!("{}", trips.len());
        return Ok(());
    }

    let table = TableFormatter::new(COLUMNS, "trip").quiet(ctx.quiet());
    output::print_list(&trips, ctx.format(), table, |t| row(t))
}

fn row(t: &Trip) -> TableRow {
    TableRow::new(&t.id)
        .cell("id", CellValue::Id(t.id.clone()))
        .cell("vehicle", CellValue::Text(t.vehicle_id.clone()))
        .cell("driver", CellValue::Text(t.driver_id.clone()))
        .cell("origin", CellValue::Text(t.origin.clone()))
        .cell("destination", CellValue::Text(t.destination.clone()))
        .cell("start", CellValue::DateTime(t.start_time))
        .cell("end", t.end_time.map_or(CellValue::Empty, CellValue::DateTime))
        .cell("revenue", CellValue::Money(t.revenue))
        .cell("status", CellValue::Status(t.status.to_string()))
}

fn run_complete(id: &str, app: &mut AppState, ctx: &Context) -> Result<()> {
    let result = complete_trip(&mut app.store, id, crud::now())?;
    report_transition(&result, "completed", ctx)
}

/// Report a state change, or say nothing changed
pub(crate) fn report_transition<T>(result: &Transition<T>, verb: &str, ctx: &Context) -> Result<()>
where
    T: crate::core::entity::Entity,
{
    let record = result.record();
    match ctx.format() {
        f @ (OutputFormat::Json | OutputFormat::Yaml) => return output::print_record(record, f),
        OutputFormat::Id => {
            println!("{}", record.id());
            return Ok(());
        }
        _ => {}
    }
    if ctx.quiet() {
        return Ok(());
    }
    let label = T::KIND.label();
    if result.applied() {
        println!(
            "{} {} {} {} ({})",
            style("✓").green(),
            capitalize(label),
            style(record.id()).cyan(),
            verb,
            record.status()
        );
    } else {
        println!(
            "{} {} {} is already {}; nothing to do",
            style("•").dim(),
            capitalize(label),
            style(record.id()).cyan(),
            record.status()
        );
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn run_summary(app: &AppState, ctx: &Context) -> Result<()> {
    let s = summary(&app.store);
    if let Some(text) = output::serialized(&s, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    println!("{}", app.theme.accent().apply_to("Journey Log"));
    println!("  Trip revenue   {}", format_money(s.total_revenue));
    println!("  Pending        {}", s.pending);
    println!("  In progress    {}", s.in_progress);
    println!("  Completed      {}", s.completed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("work order"), "Work order");
        assert_eq!(capitalize(""), "");
    }
}
