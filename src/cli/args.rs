//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    alert::AlertCommands,
    completions::CompletionsArgs,
    driver::DriverCommands,
    fuel::FuelCommands,
    maint::MaintCommands,
    open::OpenArgs,
    reports::ReportsArgs,
    revenue::RevenueCommands,
    route::RouteCommands,
    track::TrackArgs,
    trip::TripCommands,
    vehicle::VehicleCommands,
    work::WorkCommands,
};
use crate::core::Theme;

#[derive(Parser, Debug)]
#[command(name = "fleet")]
#[command(author, version, about = "FleetTrack fleet management console")]
#[command(long_about = "Manage vehicles, drivers, routes, trips, work orders, fuel, maintenance and revenue \
against an in-memory fleet that is reset on every start.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Color scheme (dark or light)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Extra config file layered over the global one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Control Center: fleet KPIs, fuel trend and latest alerts
    Dashboard,

    /// Asset Matrix: vehicle management
    #[command(subcommand)]
    Vehicle(VehicleCommands),

    /// Operator Deck: driver management
    #[command(subcommand)]
    Driver(DriverCommands),

    /// Route Planner: scheduled routes
    #[command(subcommand)]
    Route(RouteCommands),

    /// Telemetry: fuel log
    #[command(subcommand)]
    Fuel(FuelCommands),

    /// Maintenance log
    #[command(subcommand)]
    Maint(MaintCommands),

    /// Journey Log: trips
    #[command(subcommand)]
    Trip(TripCommands),

    /// Ops Center: work orders
    #[command(subcommand)]
    Work(WorkCommands),

    /// Revenue ledger
    #[command(subcommand)]
    Revenue(RevenueCommands),

    /// Alert feed (read-only)
    #[command(subcommand)]
    Alert(AlertCommands),

    /// Live Tracking: simulated vehicle positions
    Track(TrackArgs),

    /// Analytics: KPIs and report archive
    Reports(ReportsArgs),

    /// Open the view for a path, as the router would
    Open(OpenArgs),

    /// Show the sidebar menu
    Nav,

    /// Sign in (simulated)
    Login,

    /// Start an interactive session that keeps state between commands
    Shell,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Aligned columns for reading
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

impl OutputFormat {
    /// Replace `Auto` with the format the command prefers
    pub fn or(self, preferred: OutputFormat) -> OutputFormat {
        match self {
            OutputFormat::Auto => preferred,
            f => f,
        }
    }
}
