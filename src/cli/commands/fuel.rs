//! `fleet fuel` command - Telemetry (fuel log)

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::crud::{self, ShowArgs};
use crate::cli::commands::Context;
use crate::cli::helpers::format_money;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::FuelEntry;
use crate::views::crud as view;
use crate::views::fuel::summary;
use crate::views::FuelView;

#[derive(Subcommand, Debug)]
pub enum FuelCommands {
    /// List fuel entries
    List(ListArgs),

    /// Show a fuel entry
    Show(ShowArgs),

    /// Log a refuel
    New(NewArgs),

    /// Edit a fuel entry
    Edit(EditArgs),

    /// Totals, average price and spend per vehicle
    Summary,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search by vehicle id
    #[arg(long)]
    pub search: Option<String>,

    /// Only entries for this vehicle id (or all)
    #[arg(long, default_value = "all")]
    pub vehicle: Filter<String>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Fuel form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct FuelFields {
    /// Vehicle id
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Refuel date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Liters pumped
    #[arg(long)]
    pub liters: Option<String>,

    /// Total cost in rand
    #[arg(long)]
    pub cost: Option<String>,
}

impl FuelFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("vehicle", self.vehicle);
        form.set_opt("date", self.date);
        form.set_opt("liters", self.liters);
        form.set_opt("cost", self.cost);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: FuelFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Fuel entry id
    pub id: String,

    #[command(flatten)]
    pub fields: FuelFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 6),
    ColumnDef::new("vehicle", "VEHICLE", 8),
    ColumnDef::new("date", "DATE", 10),
    ColumnDef::new("liters", "LITERS", 8),
    ColumnDef::new("cost", "COST", 10),
    ColumnDef::new("price", "R/L", 7),
];

pub fn run(cmd: FuelCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        FuelCommands::List(args) => run_list(args, app, ctx),
        FuelCommands::Show(args) => crud::show::<FuelView>(app, &args.id, ctx),
        FuelCommands::New(args) => {
            crud::create::<FuelView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        FuelCommands::Edit(args) => {
            crud::edit::<FuelView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        FuelCommands::Summary => run_summary(app, ctx),
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let entries = view::list::<FuelView>(&app.store, args.search.as_deref().unwrap_or(""), &args.vehicle);

    if args.count {
        println!("{}", entries.len());
        return Ok(());
    }

    let table = TableFormatter::new(COLUMNS, "fuel entry").quiet(ctx.quiet());
    output::print_list(&entries, ctx.format(), table, |e| row(e))
}

fn row(e: &FuelEntry) -> TableRow {
    TableRow::new(&e.id)
        .cell("id", CellValue::Id(e.id.clone()))
        .cell("vehicle", CellValue::Text(e.vehicle_id.clone()))
        .cell("date", CellValue::Date(e.date))
        .cell("liters", CellValue::Float(e.liters, 1))
        .cell("cost", CellValue::Money(e.cost))
        .cell(
            "price",
            e.price_per_liter().map_or(CellValue::Empty, |p| CellValue::Float(p, 2)),
        )
}

fn run_summary(app: &AppState, ctx: &Context) -> Result<()> {
    let s = summary(&app.store);
    if let Some(text) = output::serialized(&s, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    let accent = app.theme.accent();
    println!("{}", accent.apply_to("Fuel Telemetry"));
    println!("  Total liters      {:.1} L", s.total_liters);
    println!("  Total cost        {}", format_money(s.total_cost));
    match s.avg_price_per_liter {
        Some(avg) => println!("  Avg price/liter   R{:.2}", avg),
        None => println!("  Avg price/liter   {}", style("n/a").dim()),
    }
    if !s.by_vehicle.is_empty() {
        println!();
        println!("{}", style("Spend by vehicle").bold());
        for spend in &s.by_vehicle {
            println!("  {:<14} {}", spend.registration, format_money(spend.cost));
        }
    }
    Ok(())
}
