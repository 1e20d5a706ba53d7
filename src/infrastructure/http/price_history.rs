use crate::domain::errors::{MarketDataError, MarketDataResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Price, PriceSample, SampleInterval, Symbol, Timestamp};
use serde::Deserialize;
use serde_json::json;

/// Builds the price-history query for the dashboard's GraphQL API.
///
/// Executing the request is the caller's concern; this layer only shapes the
/// document and decodes the response payload.
#[derive(Debug)]
pub struct PriceHistoryRequest {
    symbol: Symbol,
    interval: SampleInterval,
}

impl PriceHistoryRequest {
    pub fn new(symbol: Symbol, interval: SampleInterval) -> Self {
        Self { symbol, interval }
    }

    pub fn query_document(&self) -> &'static str {
        "query PriceHistory($symbol: String!, $interval: String!, $limit: Int!) {\
         \n  priceHistory(symbol: $symbol, interval: $interval, limit: $limit) {\
         \n    timestamp\
         \n    price\
         \n  }\
         \n}"
    }

    pub fn variables(&self, limit: u32) -> serde_json::Value {
        json!({
            "symbol": self.symbol.value(),
            "interval": self.interval.as_str(),
            "limit": limit,
        })
    }
}

/// Price field as the API delivers it: a bare number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    /// Unparsable text collapses to NaN so a bad sample poisons only the
    /// windows that contain it, never the whole response.
    pub fn to_f64(&self) -> f64 {
        match self {
            RawPrice::Number(n) => *n,
            RawPrice::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }
}

/// DTO for one point of the priceHistory query result.
#[derive(Debug, Clone, Deserialize)]
pub struct PricePointDto {
    pub timestamp: u64,
    pub price: RawPrice,
}

impl PricePointDto {
    pub fn to_domain_sample(&self) -> PriceSample {
        PriceSample::new(Timestamp::from(self.timestamp), Price::from(self.price.to_f64()))
    }
}

#[derive(Debug, Deserialize)]
struct PriceHistoryResponse {
    data: PriceHistoryData,
}

#[derive(Debug, Deserialize)]
struct PriceHistoryData {
    #[serde(rename = "priceHistory")]
    price_history: Vec<PricePointDto>,
}

/// Decode a price-history response body into chronological domain samples.
///
/// The provider delivers either chronological or reverse-chronological order;
/// both are normalized here, once, at the boundary. An undecodable envelope
/// is a `Payload` error; individual malformed prices are not: they become
/// NaN samples and are only logged.
pub fn parse_price_history(body: &str) -> MarketDataResult<Vec<PriceSample>> {
    let response: PriceHistoryResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            crate::log_error!(LogComponent::Feed("PriceHistory"), "undecodable payload: {e}");
            return Err(MarketDataError::Payload(e.to_string()));
        }
    };

    let samples: Vec<PriceSample> =
        response.data.price_history.iter().map(PricePointDto::to_domain_sample).collect();

    let malformed = samples.iter().filter(|s| !s.is_valid()).count();
    if malformed > 0 {
        crate::log_warn!(
            LogComponent::Feed("PriceHistory"),
            "{malformed} of {} samples carry unparsable prices",
            samples.len()
        );
    }

    let samples = into_chronological(samples);
    crate::log_info!(LogComponent::Feed("PriceHistory"), "decoded {} price samples", samples.len());

    Ok(samples)
}

/// Establish non-decreasing timestamp order.
///
/// A reverse-chronological payload is reversed; anything else unordered is
/// stably sorted, which keeps ties in arrival order.
pub fn into_chronological(mut samples: Vec<PriceSample>) -> Vec<PriceSample> {
    let ascending = samples.windows(2).all(|w| w[0].timestamp <= w[1].timestamp);
    if ascending {
        return samples;
    }

    let descending = samples.windows(2).all(|w| w[0].timestamp >= w[1].timestamp);
    if descending {
        samples.reverse();
        return samples;
    }

    samples.sort_by_key(|s| s.timestamp);
    samples
}
