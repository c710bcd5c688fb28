// Data loading from the market-data provider
pub mod fetch;
pub mod yahoo;

// Re-export commonly used types
pub use fetch::{PriceHistorySource, fetch_price_history};
pub use yahoo::YahooChartClient;
