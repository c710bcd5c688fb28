//! Configuration module for the dashboard.

pub mod analysis;
pub mod events;
pub mod market;
pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use events::{MARKET_EVENTS, MarketEvent};
pub use market::MARKET;
pub use plot::PLOT_CONFIG;
