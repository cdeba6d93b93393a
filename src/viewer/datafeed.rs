//! Datafeed abstraction for historical price sources.

use async_trait::async_trait;

use super::error::FetchError;
use super::object::{HistoryRequest, PriceSeries};

/// A source of daily price history
#[async_trait]
pub trait BaseDatafeed: Send + Sync {
    /// Name shown in logs
    fn name(&self) -> &str;

    /// Query daily bars for the requested ticker and period
    async fn query_history(&self, req: HistoryRequest) -> Result<PriceSeries, FetchError>;
}
