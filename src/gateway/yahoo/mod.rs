//! Yahoo Finance datafeed.
//!
//! Fetches daily OHLCV history from the public chart endpoint.

mod constants;
mod rest_client;

pub use constants::*;
pub use rest_client::{build_chart_url, parse_chart_response, YahooDatafeed};
