//! `fleet route` command - Route Planner

use clap::Subcommand;
use miette::Result;

use crate::cli::commands::crud::{self, ShowArgs};
use crate::cli::commands::Context;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::Province;
use crate::views::crud as view;
use crate::views::routes::{assignments, RouteRow};
use crate::views::RoutesView;

#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// List routes with their assignments
    List(ListArgs),

    /// Show a route's details
    Show(ShowArgs),

    /// Plan a new route
    New(NewArgs),

    /// Edit a route
    Edit(EditArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search name, start location and destination
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by province (e.g. Gauteng, "Western Cape", or all)
    #[arg(long, short = 'p', default_value = "all")]
    pub province: Filter<Province>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Route form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct RouteFields {
    /// Route name
    #[arg(long)]
    pub name: Option<String>,

    /// Start location
    #[arg(long)]
    pub from: Option<String>,

    /// Destination
    #[arg(long)]
    pub to: Option<String>,

    /// Distance in km
    #[arg(long)]
    pub distance: Option<String>,

    /// Province
    #[arg(long)]
    pub province: Option<String>,

    /// Assigned driver id, or "none"
    #[arg(long)]
    pub driver: Option<String>,

    /// Assigned vehicle id, or "none"
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Scheduled date (YYYY-MM-DD)
    #[arg(long)]
    pub scheduled: Option<String>,
}

impl RouteFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("name", self.name);
        form.set_opt("from", self.from);
        form.set_opt("to", self.to);
        form.set_opt("distance", self.distance);
        form.set_opt("province", self.province);
        form.set_opt("driver", self.driver);
        form.set_opt("vehicle", self.vehicle);
        form.set_opt("scheduled", self.scheduled);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: RouteFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Route id
    pub id: String,

    #[command(flatten)]
    pub fields: RouteFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 6),
    ColumnDef::new("name", "NAME", 22),
    ColumnDef::new("from", "FROM", 16),
    ColumnDef::new("to", "TO", 16),
    ColumnDef::new("distance", "KM", 6),
    ColumnDef::new("province", "PROVINCE", 14),
    ColumnDef::new("driver", "DRIVER", 18),
    ColumnDef::new("vehicle", "VEHICLE", 16),
    ColumnDef::new("scheduled", "SCHEDULED", 10),
];

pub fn run(cmd: RouteCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        RouteCommands::List(args) => run_list(args, app, ctx),
        RouteCommands::Show(args) => crud::show::<RoutesView>(app, &args.id, ctx),
        RouteCommands::New(args) => {
            crud::create::<RoutesView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        RouteCommands::Edit(args) => {
            crud::edit::<RoutesView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let routes = view::list::<RoutesView>(&app.store, args.search.as_deref().unwrap_or(""), &args.province);

    if args.count {
        println!("{}", routes.len());
        return Ok(());
    }

    let rows = assignments(&app.store, &routes);
    let table = TableFormatter::new(COLUMNS, "route").quiet(ctx.quiet());
    output::print_list(&rows, ctx.format(), table, row)
}

fn row(r: &RouteRow) -> TableRow {
    let route = r.route;
    TableRow::new(&route.id)
        .cell("id", CellValue::Id(route.id.clone()))
        .cell("name", CellValue::Text(route.name.clone()))
        .cell("from", CellValue::Text(route.start_location.clone()))
        .cell("to", CellValue::Text(route.destination.clone()))
        .cell("distance", CellValue::Number(i64::from(route.distance)))
        .cell("province", CellValue::Text(route.province.to_string()))
        .cell("driver", CellValue::Text(r.driver.clone()))
        .cell("vehicle", CellValue::Text(r.vehicle.clone()))
        .cell("scheduled", CellValue::Date(route.scheduled_date))
}
