// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{PriceHistorySource, YahooChartClient, fetch_price_history};
pub use domain::PriceSeries;
pub use error::{DashResult, DashboardError};
pub use models::DashboardModel;
pub use ui::BrentDashApp;

// CLI argument parsing
use clap::Parser;

/// The dashboard exposes a single "run it" entry point: clap only
/// contributes --help and --version.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Brent Oil price analysis dashboard", long_about = None)]
pub struct Cli {}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    model: Result<DashboardModel, DashboardError>,
) -> Box<dyn eframe::App> {
    let app = ui::BrentDashApp::new(cc, model);
    Box::new(app)
}
