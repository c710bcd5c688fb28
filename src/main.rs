use anyhow::Context;
use clap::Parser;
use eframe::NativeOptions;
use tokio::runtime::Runtime;

use brent_dash::config::ANALYSIS;
use brent_dash::ui::config::UI_TEXT;
use brent_dash::{Cli, DashboardModel, YahooChartClient, fetch_price_history, run_app};

fn main() -> anyhow::Result<()> {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args (only --help / --version; the run itself is the command)
    let _args = Cli::parse();

    // C. Data Loading (Blocking, single attempt, no cache)
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let client = YahooChartClient::new().context("Failed to build HTTP client")?;
    let fetched = rt.block_on(fetch_price_history(&client));

    // D. Derive everything the UI will render, once
    let model = fetched.and_then(|prices| DashboardModel::build(prices, &ANALYSIS));
    if let Err(e) = &model {
        log::error!("Dashboard build failed: {e}");
    }

    // E. Run Native App
    let options = NativeOptions::default();
    eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, model))),
    )
    .map_err(|e| anyhow::anyhow!("GUI exited with an error: {e}"))?;

    Ok(())
}
