use chrono::NaiveDate;
use itertools::Itertools;

use crate::domain::PriceSeries;
use crate::error::{DashResult, DashboardError};

// ============================================================================
// ReturnSeries: day-over-day fractional changes in close
// ============================================================================

/// One fractional return per pair of consecutive sessions, dated by the later
/// session. Always one element shorter than the price series it came from.
#[derive(Debug, Clone)]
pub struct ReturnSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl ReturnSeries {
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { dates, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Most recent return, if any.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// `(close[i] - close[i-1]) / close[i-1]` for every `i >= 1`.
pub fn compute_returns(prices: &PriceSeries) -> DashResult<ReturnSeries> {
    if prices.len() < 2 {
        return Err(DashboardError::InsufficientData {
            required: 2,
            actual: prices.len(),
        });
    }

    let values = prices
        .close_prices()
        .iter()
        .tuple_windows()
        .map(|(prev, next)| (next - prev) / prev)
        .collect();
    let dates = prices.dates()[1..].to_vec();

    Ok(ReturnSeries::new(dates, values))
}
