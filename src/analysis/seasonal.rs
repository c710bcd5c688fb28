use chrono::NaiveDate;

use crate::domain::PriceSeries;
use crate::error::{DashResult, DashboardError};

// ============================================================================
// SeasonalComponents: additive trend / seasonal / residual split
// ============================================================================

/// Additive decomposition of the close series. Same length and date index as
/// the input; `trend + seasonal + residual` reproduces the close exactly at
/// every position because the residual is defined as the remainder.
#[derive(Debug, Clone)]
pub struct SeasonalComponents {
    period: usize,
    dates: Vec<NaiveDate>,
    trend: Vec<f64>,
    seasonal: Vec<f64>,
    residual: Vec<f64>,
}

impl SeasonalComponents {
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn trend(&self) -> &[f64] {
        &self.trend
    }

    pub fn seasonal(&self) -> &[f64] {
        &self.seasonal
    }

    pub fn residual(&self) -> &[f64] {
        &self.residual
    }
}

/// Classical additive decomposition with a fixed periodicity.
///
/// Trend is a centered moving average (the standard half-weighted 2xMA for
/// even periods); where a full window does not fit, the window shrinks
/// symmetrically so the trend is defined at every position. Seasonal is the
/// zero-centered mean of the detrended series by period position.
pub fn decompose_seasonal(prices: &PriceSeries, period: usize) -> DashResult<SeasonalComponents> {
    assert!(period >= 2, "seasonal period must span at least two bars");

    let n = prices.len();
    if n < 2 * period {
        return Err(DashboardError::InsufficientData {
            required: 2 * period,
            actual: n,
        });
    }

    let closes = prices.close_prices();
    let trend = centered_moving_average(closes, period);

    // Mean detrended value per period position, then centered so the
    // seasonal component carries no level of its own.
    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, (value, t)) in closes.iter().zip(&trend).enumerate() {
        sums[i % period] += value - t;
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

    let seasonal: Vec<f64> = (0..n).map(|i| means[i % period]).collect();
    let residual: Vec<f64> = (0..n)
        .map(|i| closes[i] - trend[i] - seasonal[i])
        .collect();

    Ok(SeasonalComponents {
        period,
        dates: prices.dates().to_vec(),
        trend,
        seasonal,
        residual,
    })
}

/// Centered moving average over `period` bars.
///
/// Even periods use the conventional weighted form (half weight on the two
/// outermost bars, so the window stays centered); positions too close to
/// either end fall back to a plain mean over the largest symmetric window.
fn centered_moving_average(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let half = period / 2;
    let even = period.is_multiple_of(2);

    (0..n)
        .map(|i| {
            if i >= half && i + half < n {
                if even {
                    let inner: f64 = values[i - half + 1..i + half].iter().sum();
                    (0.5 * values[i - half] + inner + 0.5 * values[i + half]) / period as f64
                } else {
                    let window = &values[i - half..=i + half];
                    window.iter().sum::<f64>() / window.len() as f64
                }
            } else {
                let reach = i.min(n - 1 - i);
                let window = &values[i - reach..=i + reach];
                window.iter().sum::<f64>() / window.len() as f64
            }
        })
        .collect()
}
