//! Enumerations used by the input form and the chart renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Historical window requested from the data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    /// 1 day
    #[default]
    #[serde(rename = "1d")]
    Day1,
    /// 5 days
    #[serde(rename = "5d")]
    Day5,
    /// 1 month
    #[serde(rename = "1mo")]
    Month1,
    /// 3 months
    #[serde(rename = "3mo")]
    Month3,
    /// 6 months
    #[serde(rename = "6mo")]
    Month6,
    /// 1 year
    #[serde(rename = "1y")]
    Year1,
    /// 2 years
    #[serde(rename = "2y")]
    Year2,
    /// 5 years
    #[serde(rename = "5y")]
    Year5,
    /// 10 years
    #[serde(rename = "10y")]
    Year10,
    /// Year to date
    #[serde(rename = "ytd")]
    YearToDate,
    /// Full history
    #[serde(rename = "max")]
    Max,
}

impl Period {
    /// All periods in dropdown order
    pub const ALL: [Period; 11] = [
        Period::Day1,
        Period::Day5,
        Period::Month1,
        Period::Month3,
        Period::Month6,
        Period::Year1,
        Period::Year2,
        Period::Year5,
        Period::Year10,
        Period::YearToDate,
        Period::Max,
    ];

    /// Get the period token sent to the provider
    pub fn value(&self) -> &'static str {
        match self {
            Period::Day1 => "1d",
            Period::Day5 => "5d",
            Period::Month1 => "1mo",
            Period::Month3 => "3mo",
            Period::Month6 => "6mo",
            Period::Year1 => "1y",
            Period::Year2 => "2y",
            Period::Year5 => "5y",
            Period::Year10 => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.value() == s)
            .ok_or_else(|| ValidationError::UnknownPeriod(s.to_string()))
    }
}

/// Chart style selected in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Line,
    Candlestick,
    Volume,
}

impl ChartType {
    /// All chart types in dropdown order
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Candlestick, ChartType::Volume];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartType::Line => "Line",
            ChartType::Candlestick => "Candlestick",
            ChartType::Volume => "Volume",
        }
    }

    /// Y-axis label used when drawing this chart type
    pub fn y_label(&self) -> &'static str {
        match self {
            ChartType::Line | ChartType::Candlestick => "Price (USD)",
            ChartType::Volume => "Volume",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ChartType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|c| c.display_name() == s)
            .ok_or_else(|| ValidationError::UnknownChartType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_tokens() {
        let tokens: Vec<&str> = Period::ALL.iter().map(|p| p.value()).collect();
        assert_eq!(
            tokens,
            vec!["1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "10y", "ytd", "max"]
        );
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("ytd".parse::<Period>().unwrap(), Period::YearToDate);
        assert_eq!("10y".parse::<Period>().unwrap(), Period::Year10);
        assert!("2w".parse::<Period>().is_err());
    }

    #[test]
    fn test_chart_type_y_label() {
        assert_eq!(ChartType::Volume.y_label(), "Volume");
        assert_eq!(ChartType::Line.y_label(), "Price (USD)");
        assert_eq!(ChartType::Candlestick.y_label(), "Price (USD)");
    }

    #[test]
    fn test_chart_type_from_str() {
        assert_eq!("Candlestick".parse::<ChartType>().unwrap(), ChartType::Candlestick);
        assert!("Bar".parse::<ChartType>().is_err());
    }
}
