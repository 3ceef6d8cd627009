//! Shared `show`, `new`, `edit` and `delete` handling for the record commands

use chrono::{Local, NaiveDateTime};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use miette::Result;

use crate::cli::commands::Context;
use crate::cli::output;
use crate::cli::wizard::FormWizard;
use crate::cli::OutputFormat;
use crate::core::entity::Entity;
use crate::core::form::FormValues;
use crate::core::state::AppState;
use crate::views::crud::{self, CrudView, Deletable};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Record id (e.g. V001, T-001, WO-101)
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Record id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Local wall-clock time, used for form defaults and timestamps
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn show<V: CrudView>(app: &AppState, id: &str, ctx: &Context) -> Result<()> {
    let record = V::collection(&app.store).get(id)?;
    output::print_record(record, ctx.format())
}

/// Create a record from flags, or from the interactive form with `-i`
pub fn create<V: CrudView>(
    app: &mut AppState,
    input: FormValues,
    interactive: bool,
    ctx: &Context,
) -> Result<V::Record> {
    let now = now();
    let input = if interactive {
        let title = format!("New {}", V::Record::KIND.label());
        FormWizard::new().run(&title, &V::fields(), V::defaults(now).merge(input), &app.store)?
    } else {
        input
    };
    let record = crud::create::<V>(&mut app.store, input, now)?;
    report_saved(&record, "Created", ctx)?;
    Ok(record)
}

/// Apply flag (or interactive) changes on top of an existing record
pub fn edit<V: CrudView>(
    app: &mut AppState,
    id: &str,
    input: FormValues,
    interactive: bool,
    ctx: &Context,
) -> Result<V::Record> {
    let input = if interactive {
        let existing = V::collection(&app.store).get(id)?;
        let title = format!("Edit {} {}", V::Record::KIND.label(), id);
        FormWizard::new().run(&title, &V::fields(), V::to_form(existing).merge(input), &app.store)?
    } else {
        input
    };
    let record = crud::edit::<V>(&mut app.store, id, input)?;
    report_saved(&record, "Updated", ctx)?;
    Ok(record)
}

/// Delete after confirmation; `--yes` skips the prompt.
///
/// Without a terminal to ask on, deletion needs `--yes`.
pub fn delete<V: Deletable>(app: &mut AppState, args: DeleteArgs, ctx: &Context) -> Result<()> {
    let label = V::Record::KIND.label();
    V::collection(&app.store).get(&args.id)?;

    if !args.yes && !console::user_attended() {
        return Err(miette::miette!(
            code = "fleet::delete::unconfirmed",
            help = "pass --yes to delete without a prompt",
            "refusing to delete {} {} without confirmation",
            label,
            args.id
        ));
    }

    let removed = crud::delete::<V>(&mut app.store, &args.id, |record| {
        args.yes
            || Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Delete {} {} ({})?", label, record.id(), record.title()))
                .default(false)
                .interact()
                .unwrap_or(false)
    })?;

    if let Some(message) = deletion_message(removed.as_ref(), ctx) {
        println!("{}", message);
    }
    Ok(())
}

/// What a finished delete prints; nothing under `--quiet`
fn deletion_message<T: Entity>(removed: Option<&T>, ctx: &Context) -> Option<String> {
    if ctx.quiet() {
        return None;
    }
    Some(match removed {
        Some(record) => format!(
            "{} Deleted {} {}",
            style("✓").green(),
            T::KIND.label(),
            style(record.id()).cyan()
        ),
        None => "Deletion cancelled.".to_string(),
    })
}

/// Echo a saved record: serialized when asked for, else one line
fn report_saved<T: Entity>(record: &T, verb: &str, ctx: &Context) -> Result<()> {
    match ctx.format() {
        f @ (OutputFormat::Json | OutputFormat::Yaml) => output::print_record(record, f),
        OutputFormat::Id => {
            println!("{}", record.id());
            Ok(())
        }
        _ => {
            if !ctx.quiet() {
                println!(
                    "{} {} {} {} {}",
                    style("✓").green(),
                    verb,
                    T::KIND.label(),
                    style(record.id()).cyan(),
                    style(record.title()).dim()
                );
            }
            Ok(())
        }
    }
}
