use derive_more::Display;

/// Error taxonomy for the market data core.
///
/// Malformed price strings have no variant here: they degrade to NaN at
/// ingestion and flow through windowing untouched, leaving display policy
/// to the chart.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MarketDataError {
    /// A window length of zero can form no window; rejected before any
    /// output is produced.
    #[display(fmt = "invalid window length: {}", _0)]
    InvalidWindowLength(usize),

    /// The price-history payload could not be decoded at all.
    #[display(fmt = "malformed price history payload: {}", _0)]
    Payload(String),

    /// A sample sequence broke the non-decreasing timestamp invariant.
    #[display(fmt = "samples out of chronological order at index {}", _0)]
    OutOfOrder(usize),

    /// Symbols must be non-empty.
    #[display(fmt = "invalid symbol: {:?}", _0)]
    InvalidSymbol(String),
}

impl std::error::Error for MarketDataError {}

pub type MarketDataResult<T> = Result<T, MarketDataError>;
