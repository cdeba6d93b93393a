//! Gateway module - market data provider implementations.
//!
//! - **yahoo**: Yahoo Finance chart API datafeed

pub mod yahoo;

// Re-exports
pub use yahoo::YahooDatafeed;
