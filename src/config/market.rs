//! Market-data provider configuration constants.

/// Default values for the HTTP client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

/// The Master Market-Data Configuration Struct
pub struct MarketConfig {
    /// Yahoo Finance futures ticker for Brent Crude
    pub ticker: &'static str,
    /// Trailing lookback passed as the chart API `range` parameter
    pub lookback_range: &'static str,
    /// Bar width passed as the chart API `interval` parameter
    pub bar_interval: &'static str,
    /// Chart API base URL
    pub base_url: &'static str,
    pub client: ClientDefaults,
}

pub const MARKET: MarketConfig = MarketConfig {
    ticker: "BZ=F",
    lookback_range: "10y",
    bar_interval: "1d",
    base_url: "https://query1.finance.yahoo.com/v8/finance/chart",
    client: ClientDefaults {
        timeout_ms: 10_000,
        // Yahoo rejects requests without a browser-like agent
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
    },
};
