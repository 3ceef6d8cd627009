//! `fleet open` command - navigate by path and show the view

use clap::Parser;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{dispatch, Context};
use crate::cli::Cli;
use crate::core::router::View;
use crate::core::state::AppState;

#[derive(clap::Args, Debug)]
pub struct OpenArgs {
    /// Path such as /vehicles or #/work-orders; unknown paths open /
    #[arg(default_value = "/")]
    pub path: String,
}

/// The command each view renders as
pub fn command_for(view: View) -> &'static [&'static str] {
    match view {
        View::Dashboard => &["dashboard"],
        View::Vehicles => &["vehicle", "list"],
        View::Drivers => &["driver", "list"],
        View::Routes => &["route", "list"],
        View::Tracking => &["track", "--ticks", "0"],
        View::Trips => &["trip", "list"],
        View::Revenue => &["revenue", "list"],
        View::WorkOrders => &["work", "board"],
        View::Fuel => &["fuel", "summary"],
        View::Maintenance => &["maint", "list"],
        View::Reports => &["reports"],
    }
}

pub fn run(args: OpenArgs, app: &mut AppState, ctx: &Context) -> Result<()> {
    let resolved = app.navigate(&args.path);
    if resolved.redirected {
        eprintln!(
            "{} No view at {}, showing {}",
            style("!").yellow(),
            style(&args.path).cyan(),
            resolved.view.path()
        );
    }

    let argv = std::iter::once("fleet").chain(command_for(resolved.view).iter().copied());
    let cli = Cli::try_parse_from(argv).into_diagnostic()?;
    dispatch(cli.command, app, ctx)
}
