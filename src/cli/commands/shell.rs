//! `fleet shell` - a persistent dashboard session
//!
//! Starts on the login screen, then reads one command per line against a
//! single [`AppState`], so records created in the session stay visible
//! until it ends. Every one-shot command works here without the `fleet`
//! prefix, plus `go`, `theme`, `logout` and `exit`.

use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};
use miette::{IntoDiagnostic, Result};
use std::io::BufRead;

use crate::cli::chrome::PRODUCT;
use crate::cli::commands::open::OpenArgs;
use crate::cli::commands::{dispatch, login, nav, Context};
use crate::cli::{Commands, GlobalOpts};
use crate::core::state::{AppState, Theme};

/// One line typed at the shell prompt
#[derive(Parser, Debug)]
#[command(name = "fleet>", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,

    #[command(flatten)]
    global: GlobalOpts,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Navigate to a path and show the view
    #[command(alias = "cd")]
    Go {
        /// Path such as /fuel or #/work-orders
        path: String,
    },

    /// Switch the color scheme (toggles when no mode is given)
    Theme {
        /// dark or light
        mode: Option<Theme>,
    },

    /// Sign out and return to the login screen
    Logout,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,

    #[command(flatten)]
    App(Commands),
}

enum Step {
    Continue,
    Exit,
}

pub fn run(mut app: AppState, ctx: Context) -> Result<()> {
    login::run(&mut app, &ctx)?;
    if !ctx.quiet() {
        nav::run(&mut app, &ctx)?;
        println!("\nType {} for commands, {} to leave.", style("help").cyan(), style("exit").cyan());
    }

    if console::user_attended() {
        let theme = ColorfulTheme::default();
        loop {
            let line: String = Input::with_theme(&theme)
                .with_prompt(format!("{} {}", PRODUCT, app.view.path()))
                .allow_empty(true)
                .interact_text()
                .into_diagnostic()?;
            if let Step::Exit = execute(&line, &mut app, &ctx) {
                break;
            }
        }
    } else {
        for line in std::io::stdin().lock().lines() {
            let line = line.into_diagnostic()?;
            if let Step::Exit = execute(&line, &mut app, &ctx) {
                break;
            }
        }
    }
    tracing::debug!("shell closed");
    Ok(())
}

/// Run one shell line; errors are reported and the session goes on
fn execute(line: &str, app: &mut AppState, ctx: &Context) -> Step {
    let words = match split_words(line) {
        Ok(words) if words.is_empty() => return Step::Continue,
        Ok(words) => words,
        Err(message) => {
            eprintln!("{} {}", style("error:").red(), message);
            return Step::Continue;
        }
    };

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e) => {
            // help and usage errors alike
            let _ = e.print();
            return Step::Continue;
        }
    };
    let line_ctx = ctx.with_overrides(&parsed.global);

    let result = match parsed.command {
        ShellCommand::Exit => return Step::Exit,
        ShellCommand::Go { path } => dispatch(Commands::Open(OpenArgs { path }), app, &line_ctx),
        ShellCommand::Theme { mode } => {
            let theme = mode.unwrap_or_else(|| app.theme.toggled());
            app.set_theme(theme);
            println!("{} {} mode", style("✓").green(), theme);
            Ok(())
        }
        ShellCommand::Logout => {
            app.logout();
            println!("Signed out. Type {} to sign in again.", style("login").cyan());
            Ok(())
        }
        ShellCommand::App(command) => dispatch(command, app, &line_ctx),
    };

    if let Err(report) = result {
        eprintln!("{:?}", report);
    }
    Step::Continue
}

/// Split a line into words, honoring single and double quotes and
/// backslash escapes outside single quotes
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::seed;
    use std::time::Duration;

    fn session() -> (AppState, Context) {
        let store = seed::load_embedded().unwrap();
        let mut app = AppState::new(store, Theme::Dark);
        app.login(Duration::ZERO);
        let global = crate::cli::Cli::try_parse_from(["fleet", "-q", "nav"]).unwrap().global;
        (app, Context::new(global, Config::default()))
    }

    #[test]
    fn test_shell_line_definition_is_valid() {
        use clap::CommandFactory;
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("vehicle list").unwrap(), vec!["vehicle", "list"]);
        assert_eq!(
            split_words(r#"vehicle new --registration "KFT 102 GP"  --mileage 0"#).unwrap(),
            vec!["vehicle", "new", "--registration", "KFT 102 GP", "--mileage", "0"]
        );
        assert_eq!(split_words("go '#/fuel'").unwrap(), vec!["go", "#/fuel"]);
        assert_eq!(split_words(r"a\ b ''").unwrap(), vec!["a b", ""]);
        assert!(split_words("   ").unwrap().is_empty());
        assert!(split_words("\"open").is_err());
    }

    #[test]
    fn test_records_persist_across_lines() {
        let (mut app, ctx) = session();
        execute("vehicle new --registration 'TEST 1' --mileage 0", &mut app, &ctx);
        execute("trip complete T-001", &mut app, &ctx);
        assert_eq!(app.store.vehicles.len(), 6);
        assert_eq!(app.store.vehicles.items()[5].id, "V006");
        assert_eq!(
            app.store.trips.find("T-001").unwrap().status,
            crate::entities::TripStatus::Completed
        );
    }

    #[test]
    fn test_navigation_theme_and_logout() {
        let (mut app, ctx) = session();
        execute("go /work-orders", &mut app, &ctx);
        assert_eq!(app.view, crate::core::router::View::WorkOrders);

        execute("theme", &mut app, &ctx);
        assert_eq!(app.theme, Theme::Light);
        execute("theme dark", &mut app, &ctx);
        assert_eq!(app.theme, Theme::Dark);

        execute("logout", &mut app, &ctx);
        assert!(!app.session.is_authenticated());
        // signed out: commands are refused, the store is untouched
        execute("revenue delete REV-001 --yes", &mut app, &ctx);
        assert_eq!(app.store.revenue.len(), 2);
    }

    #[test]
    fn test_exit_and_bad_lines() {
        let (mut app, ctx) = session();
        assert!(matches!(execute("exit", &mut app, &ctx), Step::Exit));
        assert!(matches!(execute("quit", &mut app, &ctx), Step::Exit));
        assert!(matches!(execute("frobnicate", &mut app, &ctx), Step::Continue));
        assert!(matches!(execute("", &mut app, &ctx), Step::Continue));
    }
}
