use chrono::NaiveDate;

use crate::error::{DashResult, DashboardError};

// ============================================================================
// PriceSeries: Raw daily OHLCV history for one ticker
// ============================================================================

/// Ordered daily price records, strictly increasing by date.
///
/// Columns are parallel vectors sharing one date index. Construction goes
/// through [`PriceSeries::new`], which enforces the ordering invariant; the
/// series is never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    dates: Vec<NaiveDate>,
    open_prices: Vec<f64>,
    high_prices: Vec<f64>,
    low_prices: Vec<f64>,
    close_prices: Vec<f64>,
    volumes: Vec<f64>,
}

impl PriceSeries {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        dates: Vec<NaiveDate>,
        open_prices: Vec<f64>,
        high_prices: Vec<f64>,
        low_prices: Vec<f64>,
        close_prices: Vec<f64>,
        volumes: Vec<f64>,
    ) -> DashResult<Self> {
        let symbol = symbol.into();

        if dates.is_empty() {
            return Err(DashboardError::data_unavailable(format!(
                "{symbol}: provider returned no rows"
            )));
        }

        let n = dates.len();
        for (column, len) in [
            ("open", open_prices.len()),
            ("high", high_prices.len()),
            ("low", low_prices.len()),
            ("close", close_prices.len()),
            ("volume", volumes.len()),
        ] {
            if len != n {
                return Err(DashboardError::data_unavailable(format!(
                    "{symbol}: {column} column has {len} rows, date index has {n}"
                )));
            }
        }

        // Strictly increasing also rules out duplicate dates.
        if let Some(pair) = dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(DashboardError::data_unavailable(format!(
                "{symbol}: date index not strictly increasing at {} -> {}",
                pair[0], pair[1]
            )));
        }

        Ok(Self {
            symbol,
            dates,
            open_prices,
            high_prices,
            low_prices,
            close_prices,
            volumes,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
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

    pub fn open_prices(&self) -> &[f64] {
        &self.open_prices
    }

    pub fn high_prices(&self) -> &[f64] {
        &self.high_prices
    }

    pub fn low_prices(&self) -> &[f64] {
        &self.low_prices
    }

    pub fn close_prices(&self) -> &[f64] {
        &self.close_prices
    }

    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }

    pub fn last_close(&self) -> f64 {
        self.close_prices[self.close_prices.len() - 1]
    }

    /// Close-to-close change of the most recent session, if there is one.
    pub fn last_change(&self) -> Option<f64> {
        let n = self.close_prices.len();
        (n >= 2).then(|| self.close_prices[n - 1] - self.close_prices[n - 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn series(dates: Vec<NaiveDate>, closes: Vec<f64>) -> DashResult<PriceSeries> {
        let n = closes.len();
        PriceSeries::new(
            "BZ=F",
            dates,
            closes.clone(),
            closes.iter().map(|c| c + 1.0).collect(),
            closes.iter().map(|c| c - 1.0).collect(),
            closes,
            vec![0.0; n],
        )
    }

    #[test]
    fn accepts_strictly_increasing_dates() {
        let s = series(vec![day(1), day(2), day(5)], vec![80.0, 81.0, 79.5]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.first_date(), day(1));
        assert_eq!(s.last_date(), day(5));
        assert_eq!(s.last_close(), 79.5);
        assert_eq!(s.last_change(), Some(-1.5));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let err = series(vec![day(1), day(2), day(2)], vec![80.0, 81.0, 82.0]).unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable(_)));
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let err = series(vec![day(2), day(1)], vec![80.0, 81.0]).unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable(_)));
    }

    #[test]
    fn rejects_empty_series() {
        let err = series(vec![], vec![]).unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable(_)));
    }

    #[test]
    fn rejects_column_length_mismatch() {
        let err = PriceSeries::new(
            "BZ=F",
            vec![day(1), day(2)],
            vec![80.0, 81.0],
            vec![81.0, 82.0],
            vec![79.0, 80.0],
            vec![80.5], // short close column
            vec![0.0, 0.0],
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable(_)));
    }
}
