//! CLI module - argument parsing, rendering and command dispatch

pub mod args;
pub mod chrome;
pub mod commands;
pub mod helpers;
pub mod output;
pub mod table;
pub mod wizard;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
