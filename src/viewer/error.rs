//! Error types for the viewer.

use thiserror::Error;

/// Input form rejection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a ticker symbol.")]
    EmptyTicker,
    #[error("unknown period token: {0}")]
    UnknownPeriod(String),
    #[error("unknown chart type: {0}")]
    UnknownChartType(String),
}

/// Failure while retrieving price history from the data provider
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{code}: {description}")]
    Api { code: String, description: String },
    #[error("unexpected response: {0}")]
    Parse(String),
    #[error("no price data found for {0}")]
    NoData(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

/// Failure while turning a series into a chart
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("cannot draw an empty price series for {0}")]
    EmptySeries(String),
}

/// Settings file failure
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any failure inside the fetch-and-render pipeline
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_human_readable() {
        assert_eq!(ValidationError::EmptyTicker.to_string(), "Please enter a ticker symbol.");
        let err = FetchError::Api {
            code: "Not Found".to_string(),
            description: "No data found, symbol may be delisted".to_string(),
        };
        assert_eq!(err.to_string(), "Not Found: No data found, symbol may be delisted");
        let wrapped: ViewerError = FetchError::NoData("ZZZZ".to_string()).into();
        assert_eq!(wrapped.to_string(), "no price data found for ZZZZ");
    }
}
