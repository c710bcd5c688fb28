use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

use crate::domain::PriceSeries;

// ============================================================================
// Calendar resamples of the close series
// ============================================================================

/// Average close over one calendar bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledPoint {
    /// First day of the bucket (month or year)
    pub period_start: NaiveDate,
    pub mean_close: f64,
}

/// Mean close per calendar month, in date order.
pub fn monthly_averages(prices: &PriceSeries) -> Vec<ResampledPoint> {
    bucket_means(prices, |date| {
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month")
    })
}

/// Mean close per calendar year, in date order.
pub fn yearly_averages(prices: &PriceSeries) -> Vec<ResampledPoint> {
    bucket_means(prices, |date| {
        NaiveDate::from_ymd_opt(date.year(), 1, 1).expect("first of year")
    })
}

fn bucket_means(
    prices: &PriceSeries,
    bucket_start: impl Fn(NaiveDate) -> NaiveDate,
) -> Vec<ResampledPoint> {
    let buckets = prices
        .dates()
        .iter()
        .zip(prices.close_prices())
        .chunk_by(|(date, _)| bucket_start(**date));

    buckets
        .into_iter()
        .map(|(period_start, rows)| {
            let closes: Vec<f64> = rows.map(|(_, close)| *close).collect();
            ResampledPoint {
                period_start,
                mean_close: closes.iter().sum::<f64>() / closes.len() as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(rows: &[(i32, u32, u32, f64)]) -> PriceSeries {
        let dates = rows
            .iter()
            .map(|(y, m, d, _)| NaiveDate::from_ymd_opt(*y, *m, *d).unwrap())
            .collect();
        let closes: Vec<f64> = rows.iter().map(|(_, _, _, c)| *c).collect();
        PriceSeries::new(
            "BZ=F",
            dates,
            closes.clone(),
            closes.clone(),
            closes.clone(),
            closes.clone(),
            vec![0.0; rows.len()],
        )
        .unwrap()
    }

    #[test]
    fn monthly_buckets_average_their_sessions() {
        let prices = series(&[
            (2024, 1, 2, 80.0),
            (2024, 1, 15, 84.0),
            (2024, 2, 1, 90.0),
            (2024, 2, 20, 94.0),
            (2024, 3, 5, 70.0),
        ]);
        let monthly = monthly_averages(&prices);

        assert_eq!(monthly.len(), 3);
        assert_eq!(
            monthly[0],
            ResampledPoint {
                period_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                mean_close: 82.0
            }
        );
        assert_eq!(monthly[1].mean_close, 92.0);
        assert_eq!(monthly[2].mean_close, 70.0);
    }

    #[test]
    fn yearly_buckets_cross_month_boundaries() {
        let prices = series(&[
            (2023, 11, 1, 80.0),
            (2023, 12, 1, 90.0),
            (2024, 1, 2, 100.0),
        ]);
        let yearly = yearly_averages(&prices);

        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].mean_close, 85.0);
        assert_eq!(
            yearly[1].period_start,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(yearly[1].mean_close, 100.0);
    }
}
