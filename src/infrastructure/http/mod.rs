pub mod price_history;

pub use price_history::{
    PriceHistoryRequest, PricePointDto, RawPrice, into_chronological, parse_price_history,
};
