//! `fleet nav` command - shell chrome and navigation menu

use chrono::Local;
use console::style;
use miette::Result;

use crate::cli::chrome::{sidebar, status_bar, top_bar};
use crate::cli::commands::Context;
use crate::cli::output;
use crate::core::router::View;
use crate::core::state::AppState;

#[derive(serde::Serialize)]
struct MenuEntry {
    path: &'static str,
    label: &'static str,
    current: bool,
}

pub fn run(app: &mut AppState, ctx: &Context) -> Result<()> {
    let menu: Vec<MenuEntry> = View::sidebar()
        .iter()
        .map(|v| MenuEntry {
            path: v.path(),
            label: v.menu_label(),
            current: *v == app.view,
        })
        .collect();
    if let Some(text) = output::serialized(&menu, ctx.format())? {
        print!("{}", text);
        return Ok(());
    }

    println!("{}", top_bar(app));
    println!();
    for line in sidebar(app) {
        println!("{}", line);
    }
    println!();
    println!("{}", style(status_bar(Local::now().time())).dim());
    Ok(())
}
