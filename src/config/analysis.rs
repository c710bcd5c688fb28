//! Analysis and computation configuration

/// Configuration for the moving-average UI sliders
#[derive(Debug, Clone)]
pub struct MovingAverageConfig {
    pub short_min_days: usize,
    pub short_max_days: usize,
    pub short_default_days: usize,
    pub long_min_days: usize,
    pub long_max_days: usize,
    pub long_default_days: usize,
}

/// Settings for the next-day forecaster
#[derive(Debug, Clone)]
pub struct ForecastSettings {
    // Minimum observations before a fit is attempted
    pub min_observations: usize,
    // z value for the forecast interval (1.96 = 95%)
    pub interval_z: f64,
    // Number of trailing sessions shown in the forecast chart
    pub chart_tail_days: usize,
}

/// The Master Analysis Configuration
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Trailing window (in return observations) for rolling volatility
    pub volatility_window: usize,
    // Trading sessions per year, used to annualize daily volatility
    pub trading_days_per_year: usize,
    // Periodicity (in sessions) for the additive seasonal decomposition
    pub seasonal_period: usize,

    // Sub-groups
    pub moving_average: MovingAverageConfig,
    pub forecast: ForecastSettings,
}

impl AnalysisConfig {
    /// Factor that scales daily return volatility to an annualized percent.
    pub fn annualization_factor(&self) -> f64 {
        (self.trading_days_per_year as f64).sqrt() * 100.0
    }
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    volatility_window: 30,
    trading_days_per_year: 252,
    // One trading year: Brent seasonality is an annual cycle on daily bars
    seasonal_period: 252,

    moving_average: MovingAverageConfig {
        short_min_days: 10,
        short_max_days: 100,
        short_default_days: 50,
        long_min_days: 50,
        long_max_days: 300,
        long_default_days: 200,
    },

    forecast: ForecastSettings {
        min_observations: 2,
        interval_z: 1.96,
        chart_tail_days: 30,
    },
};
