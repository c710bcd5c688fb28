use chrono::NaiveDate;
use statrs::statistics::Statistics;

use crate::config::ANALYSIS;
use crate::domain::PriceSeries;
use crate::error::{DashResult, DashboardError};

// ============================================================================
// Next-day point forecast
// ============================================================================

/// Explicit, versioned model configuration. Two calls with the same series
/// and the same config always produce the same forecast: the fit is plain
/// least squares plus seasonal position means, with no random state.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Minimum close observations before a fit is attempted
    pub min_observations: usize,
    /// Periodicity used for the seasonal adjustment; the adjustment only
    /// engages once two full periods of history exist
    pub seasonal_period: usize,
    /// z value for the prediction interval (1.96 = 95%)
    pub interval_z: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_observations: ANALYSIS.forecast.min_observations,
            seasonal_period: ANALYSIS.seasonal_period,
            interval_z: ANALYSIS.forecast.interval_z,
        }
    }
}

/// A single prediction one step past the last observed date.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_close: f64,
    /// `(lower, upper)` bounds; absent when the residual spread is undefined
    pub interval: Option<(f64, f64)>,
}

/// Fit an additive trend + seasonality model on the close series and predict
/// exactly one step beyond the last observed date.
pub fn forecast_next(prices: &PriceSeries, config: &ForecastConfig) -> DashResult<ForecastPoint> {
    let n = prices.len();
    if n < config.min_observations.max(2) {
        return Err(DashboardError::model_fit(format!(
            "need at least {} observations to fit, got {n}",
            config.min_observations.max(2)
        )));
    }

    let closes = prices.close_prices();

    // Least-squares line through (bar index, close).
    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = closes.iter().mean();
    let mut cov = 0.0;
    let mut var = 0.0;
    for (i, y) in closes.iter().enumerate() {
        let dx = i as f64 - x_mean;
        cov += dx * (y - y_mean);
        var += dx * dx;
    }
    let slope = cov / var;
    let intercept = y_mean - slope * x_mean;

    let mut residuals: Vec<f64> = closes
        .iter()
        .enumerate()
        .map(|(i, y)| y - (intercept + slope * i as f64))
        .collect();

    // Seasonal adjustment: mean trend residual per period position, centered,
    // applied only when two full periods of history support the estimate.
    let period = config.seasonal_period;
    let mut seasonal_adjustment = 0.0;
    if period >= 2 && n >= 2 * period {
        let mut sums = vec![0.0; period];
        let mut counts = vec![0usize; period];
        for (i, r) in residuals.iter().enumerate() {
            sums[i % period] += r;
            counts[i % period] += 1;
        }
        let mut means: Vec<f64> = sums
            .iter()
            .zip(&counts)
            .map(|(sum, &count)| sum / count as f64)
            .collect();
        let grand_mean = means.iter().sum::<f64>() / period as f64;
        for m in &mut means {
            *m -= grand_mean;
        }

        for (i, r) in residuals.iter_mut().enumerate() {
            *r -= means[i % period];
        }
        seasonal_adjustment = means[n % period];
    }

    let predicted_close = intercept + slope * n as f64 + seasonal_adjustment;
    if !predicted_close.is_finite() {
        return Err(DashboardError::model_fit(
            "fit did not converge to a finite prediction",
        ));
    }

    // Residual spread needs more than two points to mean anything; with
    // exactly two the line passes through both and the spread is zero by
    // construction.
    let interval = (n > 2).then(|| {
        let sd = residuals.iter().std_dev();
        let half_width = config.interval_z * sd;
        (predicted_close - half_width, predicted_close + half_width)
    });

    let date = prices
        .last_date()
        .succ_opt()
        .expect("date arithmetic overflow");

    Ok(ForecastPoint {
        date,
        predicted_close,
        interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
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

    fn config(period: usize) -> ForecastConfig {
        ForecastConfig {
            min_observations: 2,
            seasonal_period: period,
            interval_z: 1.96,
        }
    }

    #[test]
    fn forecast_is_deterministic() {
        let closes: Vec<f64> = (0..300)
            .map(|i| 75.0 + 0.02 * i as f64 + ((i % 7) as f64 - 3.0))
            .collect();
        let prices = series_from_closes(&closes);

        let first = forecast_next(&prices, &config(7)).unwrap();
        let second = forecast_next(&prices, &config(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn linear_ramp_extrapolates_above_last_close() {
        // 400 sessions of close = 100.0 + 0.1 * day
        let closes: Vec<f64> = (0..400).map(|day| 100.0 + 0.1 * day as f64).collect();
        let prices = series_from_closes(&closes);
        let point = forecast_next(&prices, &config(252)).unwrap();

        assert!(point.predicted_close > prices.last_close());
        // Least squares on exact linear data reproduces the ramp
        let expected = 100.0 + 0.1 * 400.0;
        assert!(
            (point.predicted_close - expected).abs() < 1e-6,
            "got {}",
            point.predicted_close
        );
    }

    #[test]
    fn forecast_date_is_one_day_past_the_series() {
        let prices = series_from_closes(&[80.0, 81.0, 82.0]);
        let point = forecast_next(&prices, &config(252)).unwrap();
        assert_eq!(point.date, prices.last_date().succ_opt().unwrap());
    }

    #[test]
    fn single_observation_fails_to_fit() {
        let prices = series_from_closes(&[80.0]);
        let err = forecast_next(&prices, &config(252)).unwrap_err();
        assert!(matches!(err, DashboardError::ModelFit(_)));
    }

    #[test]
    fn two_points_fit_without_an_interval() {
        let prices = series_from_closes(&[80.0, 82.0]);
        let point = forecast_next(&prices, &config(252)).unwrap();

        assert!((point.predicted_close - 84.0).abs() < 1e-9);
        assert_eq!(point.interval, None);
    }

    #[test]
    fn interval_brackets_the_prediction() {
        let closes: Vec<f64> = (0..100)
            .map(|i| 90.0 + 0.1 * i as f64 + if i % 2 == 0 { 0.5 } else { -0.5 })
            .collect();
        let prices = series_from_closes(&closes);
        let point = forecast_next(&prices, &config(252)).unwrap();

        let (lower, upper) = point.interval.unwrap();
        assert!(lower < point.predicted_close);
        assert!(upper > point.predicted_close);
    }

    #[test]
    fn seasonal_history_sharpens_the_prediction() {
        // Flat base with a strict weekly shape; the next bar lands on
        // position 350 % 7 == 0, whose seasonal offset is +3.
        let pattern = [3.0, 1.0, -1.0, -3.0, -1.0, 1.0, 0.0];
        let closes: Vec<f64> = (0..350).map(|i| 88.0 + pattern[i % 7]).collect();
        let prices = series_from_closes(&closes);
        let point = forecast_next(&prices, &config(7)).unwrap();

        assert!(
            (point.predicted_close - (88.0 + 3.0)).abs() < 0.1,
            "got {}",
            point.predicted_close
        );
    }
}
