//! `fleet vehicle` command - Asset Matrix

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::crud::{self, DeleteArgs, ShowArgs};
use crate::cli::commands::Context;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::{Vehicle, VehicleStatus};
use crate::views::crud as view;
use crate::views::VehiclesView;

#[derive(Subcommand, Debug)]
pub enum VehicleCommands {
    /// List vehicles with search and status filter
    List(ListArgs),

    /// Show a vehicle's details
    Show(ShowArgs),

    /// Register a new vehicle
    New(NewArgs),

    /// Edit a vehicle
    Edit(EditArgs),

    /// Delete a vehicle
    Delete(DeleteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search registration number and id
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (ACTIVE, MAINTENANCE, INACTIVE or all)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Filter<VehicleStatus>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Vehicle form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct VehicleFields {
    /// Registration number
    #[arg(long)]
    pub registration: Option<String>,

    /// Truck, Van or Car
    #[arg(long = "type")]
    pub vehicle_type: Option<String>,

    /// Province of registration
    #[arg(long)]
    pub province: Option<String>,

    /// Diesel, Petrol or Electric
    #[arg(long)]
    pub fuel_type: Option<String>,

    /// Odometer reading in km
    #[arg(long)]
    pub mileage: Option<String>,

    /// ACTIVE, MAINTENANCE or INACTIVE
    #[arg(long)]
    pub status: Option<String>,

    /// Last service date (YYYY-MM-DD, or "none")
    #[arg(long)]
    pub last_service: Option<String>,
}

impl VehicleFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("registration", self.registration);
        form.set_opt("type", self.vehicle_type);
        form.set_opt("province", self.province);
        form.set_opt("fuel_type", self.fuel_type);
        form.set_opt("mileage", self.mileage);
        form.set_opt("status", self.status);
        form.set_opt("last_service", self.last_service);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: VehicleFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Vehicle id
    pub id: String,

    #[command(flatten)]
    pub fields: VehicleFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 6),
    ColumnDef::new("registration", "REGISTRATION", 16),
    ColumnDef::new("type", "TYPE", 6),
    ColumnDef::new("province", "PROVINCE", 14),
    ColumnDef::new("fuel_type", "FUEL", 9),
    ColumnDef::new("mileage", "MILEAGE", 9),
    ColumnDef::new("status", "STATUS", 12),
    ColumnDef::new("last_service", "LAST SERVICE", 12),
];

pub fn run(cmd: VehicleCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        VehicleCommands::List(args) => run_list(args, app, ctx),
        VehicleCommands::Show(args) => crud::show::<VehiclesView>(app, &args.id, ctx),
        VehicleCommands::New(args) => {
            crud::create::<VehiclesView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        VehicleCommands::Edit(args) => {
            crud::edit::<VehiclesView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        VehicleCommands::Delete(args) => crud::delete::<VehiclesView>(app, args, ctx),
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let vehicles = view::list::<VehiclesView>(&app.store, args.search.as_deref().unwrap_or(""), &args.status);

    if args.count {
        println!("{}", vehicles.len());
        return Ok(());
    }

    let table = TableFormatter::new(COLUMNS, "vehicle").quiet(ctx.quiet());
    output::print_list(&vehicles, ctx.format(), table, |v| row(v))
}

fn row(v: &Vehicle) -> TableRow {
    TableRow::new(&v.id)
        .cell("id", CellValue::Id(v.id.clone()))
        .cell("registration", CellValue::Text(v.registration_number.clone()))
        .cell("type", CellValue::Text(v.vehicle_type.to_string()))
        .cell("province", CellValue::Text(v.province.to_string()))
        .cell("fuel_type", CellValue::Text(v.fuel_type.to_string()))
        .cell("mileage", CellValue::Number(i64::from(v.mileage)))
        .cell("status", CellValue::Status(v.status.to_string()))
        .cell(
            "last_service",
            v.last_service_date.map_or(CellValue::Empty, CellValue::Date),
        )
}
