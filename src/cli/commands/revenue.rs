//! `fleet revenue` command - Revenue ledger

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::commands::crud::{self, DeleteArgs, ShowArgs};
use crate::cli::commands::Context;
use crate::cli::helpers::format_money;
use crate::cli::output;
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::core::form::FormValues;
use crate::core::search::Filter;
use crate::core::state::AppState;
use crate::entities::{RevenueCategory, RevenueRecord};
use crate::views::crud as view;
use crate::views::revenue::summary;
use crate::views::RevenueView;

#[derive(Subcommand, Debug)]
pub enum RevenueCommands {
    /// List revenue records
    List(ListArgs),

    /// Show a revenue record
    Show(ShowArgs),

    /// Book revenue
    New(NewArgs),

    /// Edit a revenue record
    Edit(EditArgs),

    /// Delete a revenue record
    Delete(DeleteArgs),

    /// Ledger total and split per category
    Summary,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search source
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by category (FREIGHT, LOGISTICS, CONSULTING or all)
    #[arg(long, short = 'c', default_value = "all")]
    pub category: Filter<RevenueCategory>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Revenue form fields as flags
#[derive(clap::Args, Debug, Default)]
pub struct RevenueFields {
    /// Booking date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Amount in rand
    #[arg(long)]
    pub amount: Option<String>,

    /// Client or contract
    #[arg(long)]
    pub source: Option<String>,

    /// FREIGHT, LOGISTICS or CONSULTING
    #[arg(long)]
    pub category: Option<String>,
}

impl RevenueFields {
    fn into_form(self) -> FormValues {
        let mut form = FormValues::new();
        form.set_opt("date", self.date);
        form.set_opt("amount", self.amount);
        form.set_opt("source", self.source);
        form.set_opt("category", self.category);
        form
    }
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: RevenueFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Revenue record id
    pub id: String,

    #[command(flatten)]
    pub fields: RevenueFields,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 8),
    ColumnDef::new("date", "DATE", 10),
    ColumnDef::new("source", "SOURCE", 26),
    ColumnDef::new("category", "CATEGORY", 10),
    ColumnDef::new("amount", "AMOUNT", 12),
];

pub fn run(cmd: RevenueCommands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match cmd {
        RevenueCommands::List(args) => run_list(args, app, ctx),
        RevenueCommands::Show(args) => crud::show::<RevenueView>(app, &args.id, ctx),
        RevenueCommands::New(args) => {
            crud::create::<RevenueView>(app, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        RevenueCommands::Edit(args) => {
            crud::edit::<RevenueView>(app, &args.id, args.fields.into_form(), args.interactive, ctx)?;
            Ok(())
        }
        RevenueCommands::Delete(args) => crud::delete::<RevenueView>(app, args, ctx),
        RevenueCommands::Summary => run_summary(app, ctx),
    }
}

fn run_list(args: ListArgs, app: &AppState, ctx: &Context) -> Result<()> {
    let records = view::list::<RevenueView>(&app.store, args.search.as_deref().unwrap_or(""), &args.category);

    if args.count {
        println!("{}", records.len());
        return Ok(());
    }

    let table = TableFormatter::new(COLUMNS, "revenue record").quiet(ctx.quiet());
    output::print_list(&records, ctx.format(), table, |r| row(r))
}

fn row(r: &RevenueRecord) -> TableRow {
    TableRow::new(&r.id)
        .cell("id", CellValue::Id(r.id.clone()))
        .cell("date", CellValue::Date(r.date))
        .cell("source", CellValue::Text(r.source.clone()))
        .cell("category", CellValue::Status(r.category.to_string()))
        .cell("amount", CellValue::Money(r.amount))
}

fn run_summary(app: &AppState, ctx: &Context) -> Result<()> {
    let s = summary(&app.store);
    if let Some(text) = output::serialized(&s, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    println!("{}", app.theme.accent().apply_to("Revenue"));
    println!("  Total        {}", style(format_money(s.total)).bold());
    for c in &s.by_category {
        println!("  {:<12} {}", c.category.as_str(), format_money(c.amount));
    }
    Ok(())
}
