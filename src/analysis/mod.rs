// Derived series and the forecaster
pub mod forecast;
pub mod resample;
pub mod returns;
pub mod seasonal;
pub mod volatility;

// Re-export commonly used types
pub use forecast::{ForecastConfig, ForecastPoint, forecast_next};
pub use resample::{ResampledPoint, monthly_averages, yearly_averages};
pub use returns::{ReturnSeries, compute_returns};
pub use seasonal::{SeasonalComponents, decompose_seasonal};
pub use volatility::{VolatilitySeries, compute_rolling_volatility};
