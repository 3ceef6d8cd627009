//! `fleet driver` command - Operator Deck

use chrono::Local;
use clap::Subcommand;
use miette::Result;

use crate::cli::commands::crud::{self, ShowArgs};
use crate::cli::commands::Context;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::DriverStatus;
use crate::views::crud as view;
use crate::views::drivers::{roster, DriverRow};
use crate::views::DriversView;

#[derive(Subcommand, Debug)]
pub enum DriverCommands {
    /// List drivers with licence state and assigned vehicle
    List(ListArgs),

    /// Show a driver's details
    Show(ShowArgs),

    /// Add a driver
    New(NewArgs),

    /// Edit a driver
    Edit(EditArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search name and licence number
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (AVAILABLE, ON_ROUTE, OFF_DUTY or all)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Filter<DriverStatus>,

    /// Show only drivers whose licence has expired
    #[arg(long)]
    pub expired: bool,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Driver form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct DriverFields {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Licence number
    #[arg(long)]
    pub license_number: Option<String>,

    /// Licence expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub license_expiry: Option<String>,

    /// Assigned vehicle id, or "none"
    #[arg(long)]
    pub vehicle: Option<String>,

    /// AVAILABLE, ON_ROUTE or OFF_DUTY
    #[arg(long)]
    pub status: Option<String>,
}

impl DriverFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("name", self.name);
        form.set_opt("license_number", self.license_number);
        form.set_opt("license_expiry", self.license_expiry);
        form.set_opt("vehicle", self.vehicle);
        form.set_opt("status", self.status);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: DriverFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Driver id
    pub id: String,

    #[command(flatten)]
    pub fields: DriverFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 6),
    ColumnDef::new("name", "NAME", 22),
    ColumnDef::new("license", "LICENCE", 12),
    ColumnDef::new("expiry", "EXPIRY", 10),
    ColumnDef::new("expired", "EXPIRED", 7),
    ColumnDef::new("vehicle", "VEHICLE", 16),
    ColumnDef::new("status", "STATUS", 10),
];

pub fn run(cmd: DriverCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        DriverCommands::List(args) => run_list(args, app, ctx),
        DriverCommands::Show(args) => crud::show::<DriversView>(app, &args.id, ctx),
        DriverCommands::New(args) => {
            crud::create::<DriversView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        DriverCommands::Edit(args) => {
            crud::edit::<DriversView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let today = Local::now().date_naive();
    let drivers = view::list::<DriversView>(&app.store, args.search.as_deref().unwrap_or(""), &args.status);
    let rows: Vec<DriverRow> = roster(&app.store, &drivers, today)
        .into_iter()
        .filter(|r| !args.expired || r.license_expired)
        .collect();

    if args.count {
        println!("{}", rows.len());
        return Ok(());
    }

    let table = TableFormatter::new(COLUMNS, "driver").quiet(ctx.quiet());
    output::print_list(&rows, ctx.format(), table, row)
}

fn row(r: &DriverRow) -> TableRow {
    let d = r.driver;
    TableRow::new(&d.id)
        .cell("id", CellValue::Id(d.id.clone()))
        .cell("name", CellValue::Text(d.name.clone()))
        .cell("license", CellValue::Text(d.license_number.clone()))
        .cell("expiry", CellValue::Date(d.license_expiry))
        .cell("expired", CellValue::Flag(r.license_expired))
        .cell("vehicle", CellValue::Text(r.vehicle.clone()))
        .cell("status", CellValue::Status(d.status.to_string()))
}
