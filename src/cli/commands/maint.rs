//! `fleet maint` command - Maintenance timeline

use chrono::Local;
use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::crud::{self, ShowArgs};
use crate::cli::commands::Context;
use crate::cli::helpers::{format_money, or_dash};
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::views::crud as view;
use crate::views::maintenance::{in_shop, timeline, total_spend, TimelineEntry};
use crate::views::MaintenanceView;

#[derive(Subcommand, Debug)]
pub enum MaintCommands {
    /// Service timeline
    List(ListArgs),

    /// Show a service record
    Show(ShowArgs),

    /// Log a service
    New(NewArgs),

    /// Edit a service record
    Edit(EditArgs),

    /// Vehicles in the shop and total maintenance spend
    Shop,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search service type and notes
    #[arg(long)]
    pub search: Option<String>,

    /// Only services on this vehicle id (or all)
    #[arg(long, default_value = "all")]
    pub vehicle: Filter<String>,

    /// Show only services whose next service is due
    #[arg(long)]
    pub due: bool,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Service form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct MaintFields {
    /// Vehicle id
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Service type (e.g. "Major Service")
    #[arg(long = "type")]
    pub service_type: Option<String>,

    /// Service date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Cost in rand
    #[arg(long)]
    pub cost: Option<String>,

    /// Next service date (YYYY-MM-DD)
    #[arg(long)]
    pub next_service: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl MaintFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("vehicle", self.vehicle);
        form.set_opt("type", self.service_type);
        form.set_opt("date", self.date);
        form.set_opt("cost", self.cost);
        form.set_opt("next_service", self.next_service);
        form.set_opt("notes", self.notes);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: MaintFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Service record id
    pub id: String,

    #[command(flatten)]
    pub fields: MaintFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 6),
    ColumnDef::new("date", "DATE", 10),
    ColumnDef::new("vehicle", "VEHICLE", 14),
    ColumnDef::new("type", "SERVICE", 20),
    ColumnDef::new("cost", "COST", 10),
    ColumnDef::new("next", "NEXT", 10),
    ColumnDef::new("notes", "NOTES", 30),
];

pub fn run(cmd: MaintCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        MaintCommands::List(args) => run_list(args, app, ctx),
        MaintCommands::Show(args) => crud::show::<MaintenanceView>(app, &args.id, ctx),
        MaintCommands::New(args) => {
            crud::create::<MaintenanceView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        MaintCommands::Edit(args) => {
            crud::edit::<MaintenanceView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        MaintCommands::Shop => run_shop(app, ctx),
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let today = Local::now().date_naive();
    let logs: Vec<_> =
        view::list::<MaintenanceView>(&app.store, args.search.as_deref().unwrap_or(""), &args.vehicle)
            .into_iter()
            .filter(|m| !args.due || m.service_due(today))
            .collect();

    if args.count {
        println!("{}", logs.len());
        return Ok(());
    }

    let entries = timeline(&app.store, &logs);
    let table = TableFormatter::new(COLUMNS, "maintenance log").quiet(ctx.quiet());
    output::print_list(&entries, ctx.format(), table, row)
}

fn row(entry: &TimelineEntry) -> TableRow {
    let m = entry.log;
    TableRow::new(&m.id)
        .cell("id", CellValue::Id(m.id.clone()))
        .cell("date", CellValue::Date(m.date))
        .cell(
            "vehicle",
            CellValue::Text(entry.registration.unwrap_or(&m.vehicle_id).to_string()),
        )
        .cell("type", CellValue::Text(m.service_type.clone()))
        .cell("cost", CellValue::Money(m.cost))
        .cell("next", CellValue::Date(m.next_service_date))
        .cell("notes", CellValue::Text(m.notes.clone()))
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ShopReport<'a> {
    in_shop: Vec<&'a crate::entities::Vehicle>,
    total_spend: f64,
}

fn run_shop(app: &AppState, ctx: &Context) -> Result<()> {
    let report = ShopReport {
        in_shop: in_shop(&app.store),
        total_spend: total_spend(&app.store),
    };
    if let Some(text) = output::serialized(&report, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    println!("{}", app.theme.accent().apply_to("Maintenance"));
    println!("  Total spend   {}", format_money(report.total_spend));
    println!();
    if report.in_shop.is_empty() {
        println!("  {}", style("No vehicles in the shop.").dim());
        return Ok(());
    }
    println!("{}", style("In the shop").bold());
    for v in &report.in_shop {
        let last = v.last_service_date.map(|d| d.to_string());
        println!(
            "  {:<6} {:<16} last service {}",
            style(&v.id).cyan(),
            v.registration_number,
            or_dash(last.as_deref())
        );
    }
    Ok(())
}
