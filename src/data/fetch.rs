// Async code to run in main before egui starts up

use async_trait::async_trait;
use tokio::time::Instant;

use crate::domain::PriceSeries;
use crate::error::DashResult;

/// A market-data provider that can produce the daily history for the
/// configured ticker.
#[async_trait]
pub trait PriceHistorySource {
    // Either produce a validated series OR return the pipeline error
    async fn fetch_daily_history(&self) -> DashResult<PriceSeries>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// One fetch attempt, logged. There is deliberately no retry and no fallback
/// provider: a failed fetch is terminal for the whole invocation.
pub async fn fetch_price_history(source: &dyn PriceHistorySource) -> DashResult<PriceSeries> {
    log::info!("Fetching price history via {}...", source.signature());
    let start_time = Instant::now();

    match source.fetch_daily_history().await {
        Ok(series) => {
            log::info!(
                "{}: {} sessions from {} to {} (fetched in {:?})",
                series.symbol(),
                series.len(),
                series.first_date(),
                series.last_date(),
                start_time.elapsed(),
            );
            Ok(series)
        }
        Err(e) => {
            log::warn!("{} failed: {}", source.signature(), e);
            Err(e)
        }
    }
}
