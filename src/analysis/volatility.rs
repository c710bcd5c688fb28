use chrono::NaiveDate;
use statrs::statistics::Statistics;

use crate::analysis::returns::ReturnSeries;

// ============================================================================
// VolatilitySeries: trailing-window standard deviation of returns
// ============================================================================

/// Rolling sample standard deviation of returns, aligned to the return dates.
/// The first `window - 1` positions are absent, not zero.
#[derive(Debug, Clone)]
pub struct VolatilitySeries {
    window: usize,
    dates: Vec<NaiveDate>,
    values: Vec<Option<f64>>,
}

impl VolatilitySeries {
    pub fn window(&self) -> usize {
        self.window
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Most recent defined value.
    pub fn last(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }

    /// Values scaled to an annualized percent for display
    /// (daily sigma x sqrt(252) x 100 on the original dashboard).
    pub fn annualized_pct(&self, factor: f64) -> Vec<Option<f64>> {
        self.values.iter().map(|v| v.map(|s| s * factor)).collect()
    }
}

/// Sample standard deviation of the trailing `window` returns ending at each
/// date. Positions with fewer than `window` observations so far stay `None`.
pub fn compute_rolling_volatility(returns: &ReturnSeries, window: usize) -> VolatilitySeries {
    assert!(window > 1, "volatility window must exceed one observation");

    let values = (0..returns.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let tail = &returns.values()[i + 1 - window..=i];
                Some(tail.iter().std_dev())
            }
        })
        .collect();

    VolatilitySeries {
        window,
        dates: returns.dates().to_vec(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn returns_from(values: Vec<f64>) -> ReturnSeries {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let dates = (0..values.len() as u64)
            .map(|i| start + chrono::Days::new(i))
            .collect();
        ReturnSeries::new(dates, values)
    }

    /// Direct two-pass sample std dev, the reference the rolling window must match.
    fn sample_std(values: &[f64]) -> f64 {
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (values.len() - 1) as f64).sqrt()
    }

    #[test]
    fn leading_positions_are_absent() {
        let returns = returns_from(vec![0.01, -0.02, 0.005, 0.015, -0.01]);
        let vol = compute_rolling_volatility(&returns, 3);

        assert_eq!(vol.values()[0], None);
        assert_eq!(vol.values()[1], None);
        assert!(vol.values()[2].is_some());
        assert_eq!(vol.values().len(), returns.len());
        assert_eq!(vol.dates(), returns.dates());
    }

    #[test]
    fn window_values_match_sample_std_dev() {
        let raw = vec![0.01, -0.02, 0.005, 0.015, -0.01, 0.03, 0.0];
        let returns = returns_from(raw.clone());
        let window = 4;
        let vol = compute_rolling_volatility(&returns, window);

        for i in (window - 1)..raw.len() {
            let expected = sample_std(&raw[i + 1 - window..=i]);
            let got = vol.values()[i].unwrap();
            assert!(
                (got - expected).abs() < 1e-12,
                "index {i}: got {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn constant_returns_have_zero_volatility() {
        let returns = returns_from(vec![0.01; 10]);
        let vol = compute_rolling_volatility(&returns, 5);
        assert!(vol.last().unwrap().abs() < 1e-15);
    }

    #[test]
    fn annualization_scales_defined_values_only() {
        let returns = returns_from(vec![0.01, -0.02, 0.005]);
        let vol = compute_rolling_volatility(&returns, 3);
        let scaled = vol.annualized_pct(100.0);

        assert_eq!(scaled[0], None);
        assert_eq!(scaled[1], None);
        assert!((scaled[2].unwrap() - vol.values()[2].unwrap() * 100.0).abs() < 1e-12);
    }
}
