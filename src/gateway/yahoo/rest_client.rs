//! Yahoo Finance REST client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::viewer::constant::Period;
use crate::viewer::datafeed::BaseDatafeed;
use crate::viewer::error::FetchError;
use crate::viewer::object::{HistoryRequest, PriceBar, PriceSeries};
use crate::viewer::setting::Settings;

use super::constants::{CHART_EVENTS, CHART_PATH, DAILY_INTERVAL, ERROR_BODY_LIMIT, GATEWAY_NAME};

/// Default host when none is configured
const DEFAULT_HOST: &str = "https://query1.finance.yahoo.com";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT: u64 = 30;

/// Datafeed backed by the Yahoo Finance chart endpoint
pub struct YahooDatafeed {
    /// HTTP client
    client: Client,
    /// Base URL
    host: String,
}

impl YahooDatafeed {
    /// Create a datafeed from the `datafeed.*` settings
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        let host = settings
            .get_string("datafeed.host")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let timeout = settings
            .get_int("datafeed.timeout")
            .and_then(|t| u64::try_from(t).ok())
            .unwrap_or(DEFAULT_TIMEOUT);

        let mut builder = Client::builder().timeout(Duration::from_secs(timeout));
        if let Some(agent) = settings.get_string("datafeed.user_agent") {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            client: builder.build()?,
            host,
        })
    }

    /// Build the chart request URL for a ticker and period
    pub fn build_url(&self, ticker: &str, period: Period) -> Result<Url, FetchError> {
        build_chart_url(&self.host, ticker, period)
    }
}

#[async_trait]
impl BaseDatafeed for YahooDatafeed {
    fn name(&self) -> &str {
        GATEWAY_NAME
    }

    async fn query_history(&self, req: HistoryRequest) -> Result<PriceSeries, FetchError> {
        let url = self.build_url(&req.ticker, req.period)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Error payloads arrive as JSON with a non-2xx status, so try the body first
        match parse_chart_response(&req.ticker, req.period, &body) {
            Ok(series) => {
                info!("{} bars received for {} ({})", series.len(), req.ticker, req.period);
                Ok(series)
            }
            Err(e @ FetchError::Api { .. }) => Err(e),
            Err(_) if !status.is_success() => {
                warn!("{} returned HTTP {}", GATEWAY_NAME, status);
                Err(FetchError::Status {
                    status: status.as_u16(),
                    body: body.chars().take(ERROR_BODY_LIMIT).collect(),
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Build `{host}/v8/finance/chart/{ticker}?range=..&interval=1d`
pub fn build_chart_url(host: &str, ticker: &str, period: Period) -> Result<Url, FetchError> {
    let mut url = Url::parse(host)?;
    url.path_segments_mut()
        .map_err(|_| FetchError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(CHART_PATH)
        .push(ticker);
    url.query_pairs_mut()
        .append_pair("range", period.value())
        .append_pair("interval", DAILY_INTERVAL)
        .append_pair("includePrePost", "false")
        .append_pair("events", CHART_EVENTS);
    Ok(url)
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
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

/// Parse a chart endpoint body into a price series.
///
/// Rows with any missing OHLC value are dropped; a missing volume counts as 0.
pub fn parse_chart_response(ticker: &str, period: Period, body: &str) -> Result<PriceSeries, FetchError> {
    let response: ChartResponse = serde_json::from_str(body)?;

    if let Some(err) = response.chart.error {
        return Err(FetchError::Api {
            code: err.code,
            description: err.description,
        });
    }

    let result = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| FetchError::NoData(ticker.to_string()))?;

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let offset = result.meta.gmtoffset;

    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, ts) in result.timestamp.iter().enumerate() {
        let ohlc = (
            value_at(&quote.open, i),
            value_at(&quote.high, i),
            value_at(&quote.low, i),
            value_at(&quote.close, i),
        );
        let (Some(open), Some(high), Some(low), Some(close)) = ohlc else {
            continue;
        };
        let date = DateTime::from_timestamp(ts + offset, 0)
            .ok_or_else(|| FetchError::Parse(format!("timestamp out of range: {}", ts)))?
            .date_naive();
        let volume = value_at(&quote.volume, i).unwrap_or(0.0).max(0.0) as u64;
        bars.push(PriceBar::new(date, open, high, low, close, volume));
    }

    if bars.is_empty() {
        return Err(FetchError::NoData(ticker.to_string()));
    }

    Ok(PriceSeries::new(ticker, period, bars))
}

fn value_at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}
