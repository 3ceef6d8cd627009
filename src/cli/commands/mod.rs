//! CLI command implementations
//!
//! One-shot commands boot a fresh [`AppState`] from the embedded seed, sign
//! in without the login delay and run a single command. `fleet shell` keeps
//! one state alive and feeds every line through [`dispatch`].

use clap::ValueEnum;
use miette::Result;
use std::time::Duration;

use crate::cli::{Commands, GlobalOpts, OutputFormat};
use crate::core::config::Config;
use crate::core::seed;
use crate::core::state::AppState;

pub mod crud;

pub mod alert;
pub mod completions;
pub mod dashboard;
pub mod driver;
pub mod fuel;
pub mod login;
pub mod maint;
pub mod nav;
pub mod open;
pub mod reports;
pub mod revenue;
pub mod route;
pub mod shell;
pub mod track;
pub mod trip;
pub mod vehicle;
pub mod work;

/// Options and configuration shared by every command in a run
#[derive(Debug, Clone)]
pub struct Context {
    pub global: GlobalOpts,
    pub config: Config,
}

impl Context {
    pub fn new(global: GlobalOpts, config: Config) -> Self {
        Self { global, config }
    }

    /// Output format from the flag, else the configured default
    pub fn format(&self) -> OutputFormat {
        if self.global.format != OutputFormat::Auto {
            return self.global.format;
        }
        self.config
            .default_format
            .as_deref()
            .and_then(|f| <OutputFormat as ValueEnum>::from_str(f, true).ok())
            .unwrap_or(OutputFormat::Auto)
    }

    pub fn quiet(&self) -> bool {
        self.global.quiet
    }

    /// The same context with per-command global flags laid over it
    pub fn with_overrides(&self, line: &GlobalOpts) -> Context {
        let mut ctx = self.clone();
        if line.format != OutputFormat::Auto {
            ctx.global.format = line.format;
        }
        ctx.global.quiet |= line.quiet;
        ctx.global.verbose |= line.verbose;
        ctx
    }
}

/// Boot a fresh application from the seed and run one command
pub fn run(command: Commands, global: GlobalOpts, config: Config) -> Result<()> {
    let store = seed::load_embedded()?;
    let theme = global.theme.unwrap_or_else(|| config.theme());
    let mut app = AppState::new(store, theme);
    let ctx = Context::new(global, config);

    match command {
        Commands::Shell => shell::run(app, ctx),
        Commands::Login => login::run(&mut app, &ctx),
        other => {
            app.login(Duration::ZERO);
            dispatch(other, &mut app, &ctx)
        }
    }
}

/// Run one command against a live application state
pub fn dispatch(command: Commands, app: &mut AppState, ctx: &Context) -> Result<()> {
    match command {
        Commands::Login => return login::run(app, ctx),
        Commands::Completions(args) => return completions::run(args),
        Commands::Shell => {
            return Err(miette::miette!(
                code = "fleet::shell::nested",
                "already inside a shell session"
            ))
        }
        _ => {}
    }

    if !app.session.is_authenticated() {
        return Err(miette::miette!(
            code = "fleet::session::signed_out",
            help = "run `login` to sign in again",
            "not signed in"
        ));
    }

    match command {
        Commands::Dashboard => dashboard::run(app, ctx),
        Commands::Vehicle(cmd) => vehicle::run(cmd, app, ctx),
        Commands::Driver(cmd) => driver::run(cmd, app, ctx),
        Commands::Route(cmd) => route::run(cmd, app, ctx),
        Commands::Fuel(cmd) => fuel::run(cmd, app, ctx),
        Commands::Maint(cmd) => maint::run(cmd, app, ctx),
        Commands::Trip(cmd) => trip::run(cmd, app, ctx),
        Commands::Work(cmd) => work::run(cmd, app, ctx),
        Commands::Revenue(cmd) => revenue::run(cmd, app, ctx),
        Commands::Alert(cmd) => alert::run(cmd, app, ctx),
        Commands::Track(args) => track::run(args, app, ctx),
        Commands::Reports(args) => reports::run(args, app, ctx),
        Commands::Open(args) => open::run(args, app, ctx),
        Commands::Nav => nav::run(app, ctx),
        Commands::Login | Commands::Completions(_) | Commands::Shell => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["fleet"];
        argv.extend_from_slice(args);
        argv.push("nav");
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let config = Config {
            default_format: Some("json".to_string()),
            ..Config::default()
        };
        assert_eq!(Context::new(global(&[]), config.clone()).format(), OutputFormat::Json);
        assert_eq!(Context::new(global(&["-f", "csv"]), config).format(), OutputFormat::Csv);

        let unknown = Config {
            default_format: Some("xml".to_string()),
            ..Config::default()
        };
        assert_eq!(Context::new(global(&[]), unknown).format(), OutputFormat::Auto);
    }

    #[test]
    fn test_line_overrides_keep_session_settings() {
        let ctx = Context::new(global(&["-f", "yaml"]), Config::default());
        let line = ctx.with_overrides(&global(&["-q"]));
        assert_eq!(line.format(), OutputFormat::Yaml);
        assert!(line.quiet());
        let line = ctx.with_overrides(&global(&["-f", "md"]));
        assert_eq!(line.format(), OutputFormat::Md);
    }

    #[test]
    fn test_signed_out_session_is_rejected() {
        let store = seed::load_embedded().unwrap();
        let mut app = AppState::new(store, Default::default());
        let ctx = Context::new(global(&[]), Config::default());
        assert!(dispatch(Commands::Nav, &mut app, &ctx).is_err());
        app.login(Duration::ZERO);
        assert!(dispatch(Commands::Nav, &mut app, &ctx).is_ok());
    }
}
