//! Yahoo Finance chart API client.
//!
//! Fetches free daily OHLCV history for the configured future. Uses Yahoo
//! Finance's unofficial v8 chart endpoint.
//!
//! Note: Yahoo data is delayed and intended for personal use.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::MARKET;
use crate::data::fetch::PriceHistorySource;
use crate::domain::PriceSeries;
use crate::error::{DashResult, DashboardError};
use crate::utils::time_utils::epoch_sec_to_date;

/// Yahoo chart API client
pub struct YahooChartClient {
    client: reqwest::Client,
    base_url: String,
}

impl YahooChartClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(MARKET.client.timeout_ms))
            .user_agent(MARKET.client.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: MARKET.base_url.to_string(),
        })
    }

    /// Fetch daily bars for `symbol` over a trailing `range` (e.g. `"10y"`).
    pub async fn fetch_daily(&self, symbol: &str, range: &str) -> DashResult<PriceSeries> {
        let url = format!(
            "{}/{}?range={}&interval={}",
            self.base_url, symbol, range, MARKET.bar_interval
        );

        let response: ChartResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::data_unavailable(format!("{symbol}: {e}")))?
            .error_for_status()
            .map_err(|e| DashboardError::data_unavailable(format!("{symbol}: {e}")))?
            .json()
            .await
            .map_err(|e| {
                DashboardError::data_unavailable(format!("{symbol}: failed to parse chart: {e}"))
            })?;

        if let Some(api_error) = response.chart.error {
            return Err(DashboardError::data_unavailable(format!(
                "{symbol}: provider error {}: {}",
                api_error.code,
                api_error.description.unwrap_or_default()
            )));
        }

        let result = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| {
                DashboardError::data_unavailable(format!("{symbol}: empty chart result"))
            })?;

        convert_chart_result(symbol, result)
    }
}

#[async_trait]
impl PriceHistorySource for YahooChartClient {
    fn signature(&self) -> &'static str {
        "Yahoo Finance chart API"
    }

    async fn fetch_daily_history(&self) -> DashResult<PriceSeries> {
        self.fetch_daily(MARKET.ticker, MARKET.lookback_range).await
    }
}

// Yahoo chart API response structures

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteColumns>,
}

/// Column-oriented bar data; Yahoo emits `null` for sessions with no trade.
#[derive(Debug, Default, Deserialize)]
struct QuoteColumns {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn convert_chart_result(symbol: &str, result: ChartResult) -> DashResult<PriceSeries> {
    let quote = result.indicators.quote.into_iter().next().ok_or_else(|| {
        DashboardError::data_unavailable(format!("{symbol}: chart result has no quote columns"))
    })?;

    let n = result.timestamp.len();
    let mut dates: Vec<NaiveDate> = Vec::with_capacity(n);
    let mut opens = Vec::with_capacity(n);
    let mut highs = Vec::with_capacity(n);
    let mut lows = Vec::with_capacity(n);
    let mut closes = Vec::with_capacity(n);
    let mut volumes = Vec::with_capacity(n);
    let mut skipped = 0usize;

    let column = |col: &[Option<f64>], i: usize| col.get(i).copied().flatten();

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let Some(date) = epoch_sec_to_date(ts) else {
            skipped += 1;
            continue;
        };

        // Rows with a hole in any OHLC column are unusable for analysis.
        let (Some(open), Some(high), Some(low), Some(close)) = (
            column(&quote.open, i),
            column(&quote.high, i),
            column(&quote.low, i),
            column(&quote.close, i),
        ) else {
            skipped += 1;
            continue;
        };
        let volume = column(&quote.volume, i).unwrap_or(0.0);

        // The live session's bar can repeat the last date; keep the newer row.
        if dates.last() == Some(&date) {
            let last = dates.len() - 1;
            opens[last] = open;
            highs[last] = high;
            lows[last] = low;
            closes[last] = close;
            volumes[last] = volume;
            continue;
        }

        dates.push(date);
        opens.push(open);
        highs.push(high);
        lows.push(low);
        closes.push(close);
        volumes.push(volume);
    }

    if skipped > 0 {
        log::info!("{symbol}: skipped {skipped} rows with missing fields");
    }

    PriceSeries::new(symbol, dates, opens, highs, lows, closes, volumes)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-02, 2024-01-03, 2024-01-04 UTC, daily bars
    const TS_JAN_2: i64 = 1_704_196_800;
    const TS_JAN_3: i64 = 1_704_283_200;
    const TS_JAN_4: i64 = 1_704_369_600;

    fn payload(timestamps: &[i64], closes: &[Option<f64>]) -> ChartResponse {
        let quote = serde_json::json!({
            "open": closes,
            "high": closes,
            "low": closes,
            "close": closes,
            "volume": closes.iter().map(|c| c.map(|_| 1000.0)).collect::<Vec<_>>(),
        });
        let value = serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": timestamps,
                    "indicators": { "quote": [quote] },
                }],
                "error": null,
            }
        });
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn converts_a_clean_payload() {
        let response = payload(
            &[TS_JAN_2, TS_JAN_3, TS_JAN_4],
            &[Some(78.0), Some(79.5), Some(77.25)],
        );
        let result = response.chart.result.unwrap().remove(0);
        let series = convert_chart_result("BZ=F", result).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.close_prices(), &[78.0, 79.5, 77.25]);
        assert_eq!(series.open_prices(), series.close_prices());
        assert_eq!(series.high_prices(), series.close_prices());
        assert_eq!(series.low_prices(), series.close_prices());
        assert_eq!(series.volumes(), &[1000.0, 1000.0, 1000.0]);
        assert_eq!(
            series.first_date(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert_eq!(
            series.last_date(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
        );
    }

    #[test]
    fn skips_rows_with_null_fields() {
        let response = payload(
            &[TS_JAN_2, TS_JAN_3, TS_JAN_4],
            &[Some(78.0), None, Some(77.25)],
        );
        let result = response.chart.result.unwrap().remove(0);
        let series = convert_chart_result("BZ=F", result).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.close_prices(), &[78.0, 77.25]);
    }

    #[test]
    fn collapses_a_repeated_session_bar() {
        // Same calendar day twice: the later row must win.
        let response = payload(
            &[TS_JAN_2, TS_JAN_2 + 3600, TS_JAN_3],
            &[Some(78.0), Some(78.4), Some(79.0)],
        );
        let result = response.chart.result.unwrap().remove(0);
        let series = convert_chart_result("BZ=F", result).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.close_prices(), &[78.4, 79.0]);
    }

    #[test]
    fn all_null_rows_is_data_unavailable() {
        let response = payload(&[TS_JAN_2, TS_JAN_3], &[None, None]);
        let result = response.chart.result.unwrap().remove(0);
        let err = convert_chart_result("BZ=F", result).unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable(_)));
    }

    #[test]
    fn provider_error_object_parses() {
        let value = serde_json::json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" },
            }
        });
        let response: ChartResponse = serde_json::from_value(value).unwrap();
        let error = response.chart.error.unwrap();
        assert_eq!(error.code, "Not Found");
    }

    #[tokio::test]
    #[ignore] // Requires network
    async fn fetches_live_brent_history() {
        let client = YahooChartClient::new().unwrap();
        let series = client.fetch_daily("BZ=F", "1mo").await.unwrap();

        assert!(series.len() > 5);
        assert!(series.last_close() > 0.0);
    }
}
