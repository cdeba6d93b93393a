//! Input form values and validation.

use super::constant::{ChartType, Period};
use super::error::ValidationError;
use super::object::HistoryRequest;
use super::setting::Settings;

/// Current values of the ticker entry and the two dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputForm {
    pub ticker: String,
    pub period: Period,
    pub chart_type: ChartType,
}

impl InputForm {
    /// Create an empty form with the given selections
    pub fn new(period: Period, chart_type: ChartType) -> Self {
        Self {
            ticker: String::new(),
            period,
            chart_type,
        }
    }

    /// Create an empty form preselected from `default.*` settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.default_period(), settings.default_chart_type())
    }

    /// Turn the form into a history request.
    ///
    /// Surrounding whitespace is dropped from the ticker; what remains must be
    /// non-empty and is otherwise passed through untouched.
    pub fn validate(&self) -> Result<HistoryRequest, ValidationError> {
        let ticker = self.ticker.trim();
        if ticker.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }
        Ok(HistoryRequest::new(ticker, self.period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ticker_rejected() {
        for ticker in ["", " ", "\t\n"] {
            let form = InputForm {
                ticker: ticker.to_string(),
                ..InputForm::default()
            };
            assert_eq!(form.validate(), Err(ValidationError::EmptyTicker));
        }
    }

    #[test]
    fn test_valid_request_keeps_ticker_literal() {
        let form = InputForm {
            ticker: "  brk-b ".to_string(),
            period: Period::Year5,
            chart_type: ChartType::Volume,
        };
        let req = form.validate().unwrap();
        assert_eq!(req.ticker, "brk-b");
        assert_eq!(req.period, Period::Year5);
    }

    #[test]
    fn test_from_settings() {
        let form = InputForm::from_settings(&Settings::with_defaults());
        assert!(form.ticker.is_empty());
        assert_eq!(form.period, Period::Day1);
        assert_eq!(form.chart_type, ChartType::Line);
    }
}
