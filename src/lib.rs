//! Market data core for the trading dashboard's price charts.
//!
//! Builds price-history queries for the remote API, decodes the responses
//! (string-encoded prices included), establishes chronological order and
//! computes the SMA overlays the chart views render. Rendering, sessions and
//! navigation live elsewhere; this crate stops at render-ready data.

use crate::domain::logging::LogComponent;

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::chart_service::{ChartConfig, ChartData, ChartService, SmaOverlay};
pub use domain::errors::{MarketDataError, MarketDataResult};
pub use domain::market_data::{
    MovingAverageService, Price, PriceSample, SampleInterval, SampleSeries,
    SeriesValidationService, SmaEngine, SmaPoint, Symbol, Timestamp,
};
pub use infrastructure::http::{PriceHistoryRequest, parse_price_history};

/// Install the stderr logger and system clock as the global services.
///
/// Safe to call more than once; only the first call wins.
pub fn initialize() {
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let time_provider = Box::new(infrastructure::services::SystemTimeProvider::new());
    domain::logging::init_time_provider(time_provider);

    crate::log_info!(LogComponent::MarketData("Init"), "market data core initialized");
}
