//! `fleet login` command - the sign-in screen
//!
//! Any credentials are accepted. The only effect is the simulated
//! authentication delay before the session opens on the dashboard.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use miette::{IntoDiagnostic, Result};

use crate::cli::chrome::PRODUCT;
use crate::cli::commands::Context;
use crate::core::state::AppState;

pub fn run(app: &mut AppState, ctx: &Context) -> Result<()> {
    if app.session.is_authenticated() {
        if !ctx.quiet() {
            println!("Already signed in.");
        }
        return Ok(());
    }

    if console::user_attended() {
        let theme = ColorfulTheme::default();
        println!("{} {}", app.theme.accent().apply_to(PRODUCT), style("secure sign-in").dim());
        let _operator: String = Input::with_theme(&theme)
            .with_prompt("Operator ID")
            .allow_empty(true)
            .interact_text()
            .into_diagnostic()?;
        let _passcode = Password::with_theme(&theme)
            .with_prompt("Passcode")
            .allow_empty_password(true)
            .interact()
            .into_diagnostic()?;
    }

    if !ctx.quiet() {
        eprintln!("{}", style("Authenticating...").dim());
    }
    app.login(ctx.config.login_delay());
    app.navigate("/");

    if !ctx.quiet() {
        println!("{} Signed in", style("✓").green());
    }
    Ok(())
}
