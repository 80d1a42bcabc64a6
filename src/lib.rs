#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::{App, AppStore, Page};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to open at startup
    #[arg(long, value_enum)]
    pub page: Option<Page>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
