use crate::analysis::{
    ForecastConfig, ForecastPoint, ResampledPoint, ReturnSeries, SeasonalComponents,
    VolatilitySeries, compute_returns, compute_rolling_volatility, decompose_seasonal,
    forecast_next, monthly_averages, yearly_averages,
};
use crate::config::AnalysisConfig;
use crate::domain::PriceSeries;
use crate::error::DashResult;

// ============================================================================
// DashboardModel: everything the UI renders, built once per invocation
// ============================================================================

/// The immutable output of one pipeline run. The UI reads this every frame
/// and never mutates it; a failed build leaves the UI with the error instead.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub prices: PriceSeries,
    pub returns: ReturnSeries,
    pub volatility: VolatilitySeries,
    pub seasonal: SeasonalComponents,
    pub monthly: Vec<ResampledPoint>,
    pub yearly: Vec<ResampledPoint>,
    pub forecast: ForecastPoint,
}

impl DashboardModel {
    /// Run the derivation pipeline in sequence on an already-fetched series.
    /// Any stage error is terminal: no partial model is produced.
    pub fn build(prices: PriceSeries, config: &AnalysisConfig) -> DashResult<Self> {
        let returns = compute_returns(&prices)?;
        let volatility = compute_rolling_volatility(&returns, config.volatility_window);
        let seasonal = decompose_seasonal(&prices, config.seasonal_period)?;
        let monthly = monthly_averages(&prices);
        let yearly = yearly_averages(&prices);

        let forecast_config = ForecastConfig {
            min_observations: config.forecast.min_observations,
            seasonal_period: config.seasonal_period,
            interval_z: config.forecast.interval_z,
        };
        let forecast = forecast_next(&prices, &forecast_config)?;

        Ok(Self {
            prices,
            returns,
            volatility,
            seasonal,
            monthly,
            yearly,
            forecast,
        })
    }

    /// Latest annualized volatility in percent, once the window has filled.
    pub fn latest_volatility_pct(&self, config: &AnalysisConfig) -> Option<f64> {
        self.volatility
            .last()
            .map(|sigma| sigma * config.annualization_factor())
    }

    /// Forecast move versus the last observed close, in percent.
    pub fn forecast_delta_pct(&self) -> f64 {
        let last = self.prices.last_close();
        (self.forecast.predicted_close - last) / last * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use chrono::NaiveDate;

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let dates = (0..closes.len() as u64)
            .map(|i| start + chrono::Days::new(i))
            .collect();
        PriceSeries::new(
            "BZ=F",
            dates,
            closes.to_vec(),
            closes.to_vec(),
            closes.to_vec(),
            closes.to_vec(),
            vec![0.0; closes.len()],
        )
        .unwrap()
    }

    fn test_config(seasonal_period: usize) -> AnalysisConfig {
        let mut config = ANALYSIS.clone();
        config.seasonal_period = seasonal_period;
        config
    }

    #[test]
    fn full_pipeline_on_a_long_synthetic_history() {
        let closes: Vec<f64> = (0..700)
            .map(|i| 70.0 + 0.03 * i as f64 + 4.0 * ((i % 252) as f64 / 252.0 * std::f64::consts::TAU).sin())
            .collect();
        let prices = series_from_closes(&closes);
        let model = DashboardModel::build(prices, &ANALYSIS).unwrap();

        assert_eq!(model.returns.len(), model.prices.len() - 1);
        assert_eq!(model.seasonal.len(), model.prices.len());
        assert!(model.latest_volatility_pct(&ANALYSIS).is_some());
        assert!(!model.monthly.is_empty());
        assert!(!model.yearly.is_empty());
        assert_eq!(
            model.forecast.date,
            model.prices.last_date().succ_opt().unwrap()
        );
    }

    #[test]
    fn linear_ramp_end_to_end() {
        // 400 sessions of close = 100.0 + 0.1 * day; a shorter seasonal
        // period keeps the decomposition inside the available history.
        let closes: Vec<f64> = (0..400).map(|day| 100.0 + 0.1 * day as f64).collect();
        let prices = series_from_closes(&closes);
        let model = DashboardModel::build(prices, &test_config(50)).unwrap();

        assert!(model.returns.values().iter().all(|&r| r > 0.0));
        assert!(
            model
                .returns
                .values()
                .windows(2)
                .all(|pair| pair[1] < pair[0])
        );
        assert!(model.forecast.predicted_close > model.prices.last_close());
        assert!(model.forecast_delta_pct() > 0.0);
    }

    #[test]
    fn short_history_fails_the_build() {
        let closes: Vec<f64> = (0..100).map(|i| 80.0 + i as f64 * 0.1).collect();
        let prices = series_from_closes(&closes);
        // 100 sessions cannot support a 252-session seasonal period
        let err = DashboardModel::build(prices, &ANALYSIS).unwrap_err();
        assert!(matches!(
            err,
            crate::error::DashboardError::InsufficientData { .. }
        ));
    }
}
