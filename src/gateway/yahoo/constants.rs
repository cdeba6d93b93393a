//! Yahoo Finance chart API constants.

/// Path segments of the chart endpoint, followed by the ticker
pub const CHART_PATH: [&str; 3] = ["v8", "finance", "chart"];

/// Bar interval requested for every period
pub const DAILY_INTERVAL: &str = "1d";

/// Corporate action events included in the response
pub const CHART_EVENTS: &str = "div,split";

/// Maximum number of response body characters kept in an HTTP error
pub const ERROR_BODY_LIMIT: usize = 200;

/// Gateway name used in logs
pub const GATEWAY_NAME: &str = "YAHOO";
