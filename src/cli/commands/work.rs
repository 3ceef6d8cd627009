//! `fleet work` command - Ops Center work orders

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::crud::{self, ShowArgs};
use crate::cli::commands::trip::report_transition;
use crate::cli::commands::Context;
use crate::cli::helpers::truncate_str;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::{WorkOrder, WorkOrderStatus};
use crate::views::crud as view;
use crate::views::work_orders::{advance, board, resolve, start};
use crate::views::WorkOrdersView;

#[derive(Subcommand, Debug)]
pub enum WorkCommands {
    /// List work orders
    List(ListArgs),

    /// Show a work order
    Show(ShowArgs),

    /// Raise a new work order (OPEN)
    New(NewArgs),

    /// Edit a work order
    Edit(EditArgs),

    /// OPEN → IN_PROGRESS
    Start(ShowArgs),

    /// IN_PROGRESS → RESOLVED
    Resolve(ShowArgs),

    /// Move a work order one step forward
    Advance(ShowArgs),

    /// Board of OPEN, IN_PROGRESS and RESOLVED columns
    Board(BoardArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search description and vehicle id
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (OPEN, IN_PROGRESS, RESOLVED or all)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Filter<WorkOrderStatus>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct BoardArgs {
    /// Search description and vehicle id
    #[arg(long)]
    pub search: Option<String>,
}

/// Work order form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct WorkFields {
    /// Vehicle id
    #[arg(long)]
    pub vehicle: Option<String>,

    /// LOW, MEDIUM, HIGH or CRITICAL
    #[arg(long)]
    pub priority: Option<String>,

    /// What needs doing
    #[arg(long)]
    pub description: Option<String>,
}

impl WorkFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("vehicle", self.vehicle);
        form.set_opt("priority", self.priority);
        form.set_opt("description", self.description);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: WorkFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Work order id
    pub id: String,

    #[command(flatten)]
    pub fields: WorkFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 7),
    ColumnDef::new("vehicle", "VEHICLE", 8),
    ColumnDef::new("priority", "PRIORITY", 8),
    ColumnDef::new("description", "DESCRIPTION", 34),
    ColumnDef::new("status", "STATUS", 12),
    ColumnDef::new("created", "CREATED", 10),
];

pub fn run(cmd: WorkCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        WorkCommands::List(args) => run_list(args, app, ctx),
        WorkCommands::Show(args) => crud::show::<WorkOrdersView>(app, &args.id, ctx),
        WorkCommands::New(args) => {
            crud::create::<WorkOrdersView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        WorkCommands::Edit(args) => {
            crud::edit::<WorkOrdersView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        WorkCommands::Start(args) => {
            let result = start(&mut app.store, &args.id)?;
            report_transition(&result, "started", ctx)
        }
        WorkCommands::Resolve(args) => {
            let result = resolve(&mut app.store, &args.id)?;
            report_transition(&result, "resolved", ctx)
        }
        WorkCommands::Advance(args) => {
            let result = advance(&mut app.store, &args.id)?;
            report_transition(&result, "moved", ctx)
        }
        WorkCommands::Board(args) => run_board(args, app, ctx),
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let orders = view::list::<WorkOrdersView>(&app.store, args.search.as_deref().unwrap_or(""), &args.status);

    if args.count {
        println!("{}", orders.len());
        return Ok(());
    }

    let table = TableFormatter::new(COLUMNS, "work order").quiet(ctx.quiet());
    output::print_list(&orders, ctx.format(), table, |o| row(o))
}

fn row(o: &WorkOrder) -> TableRow {
    TableRow::new(&o.id)
        .cell("id", CellValue::Id(o.id.clone()))
        .cell("vehicle", CellValue::Text(o.vehicle_id.clone()))
        .cell("priority", CellValue::Priority(o.priority))
        .cell("description", CellValue::Text(o.description.clone()))
        .cell("status", CellValue::Status(o.status.to_string()))
        .cell("created", CellValue::Date(o.created_at))
}

fn run_board(args: BoardArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let orders = view::list::<WorkOrdersView>(&app.store, args.search.as_deref().unwrap_or(""), &Filter::All);
    let columns = board(&orders);
    if let Some(text) = output::serialized(&columns, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    let accent = app.theme.accent();
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {}",
            accent.apply_to(column.status.as_str()),
            style(format!("({})", column.count)).dim()
        );
        if column.orders.is_empty() {
            println!("  {}", style("(empty)").dim());
        }
        for o in &column.orders {
            let next = match o.status.next() {
                Some(WorkOrderStatus::InProgress) => "start",
                Some(WorkOrderStatus::Resolved) => "resolve",
                _ => "",
            };
            println!(
                "  {:<7} {:<8} {:<8} {:<36} {}",
                style(&o.id).cyan(),
                CellValue::Priority(o.priority).format_tsv(8),
                o.vehicle_id,
                truncate_str(&o.description, 36),
                style(next).dim()
            );
        }
    }
    Ok(())
}
