use crate::domain::errors::MarketDataResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    MovingAverageService, Price, PriceSample, SampleInterval, SampleSeries, SmaPoint, Symbol,
};
use crate::infrastructure::http::PriceHistoryRequest;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Chart settings as the dashboard persists them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub symbol: String,
    pub interval: SampleInterval,
    /// Overlay window lengths, in display order.
    pub windows: Vec<usize>,
    pub max_samples: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            symbol: "BTCUSD".to_string(),
            interval: SampleInterval::FiveMinutes,
            windows: vec![20, 50, 200],
            max_samples: 1024,
        }
    }
}

/// One SMA overlay line, ready for the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmaOverlay {
    pub window_len: usize,
    pub points: Vec<SmaPoint>,
}

/// Everything one chart render needs.
///
/// NaN points travel through untouched; whether to break the line or skip
/// the point is the renderer's call.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub samples: Vec<PriceSample>,
    pub overlays: Vec<SmaOverlay>,
    pub price_range: Option<(Price, Price)>,
}

/// Application service assembling render-ready chart data.
pub struct ChartService {
    config: ChartConfig,
    moving_averages: MovingAverageService,
}

impl ChartService {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, moving_averages: MovingAverageService::new() }
    }

    pub fn with_defaults() -> Self {
        Self::new(ChartConfig::default())
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Price-history request for the configured symbol and interval.
    ///
    /// The configured symbol is free-form dashboard input; it is validated
    /// here, once, before any query is shaped from it.
    pub fn price_history_request(&self) -> MarketDataResult<PriceHistoryRequest> {
        let symbol = Symbol::new(self.config.symbol.clone())?;
        Ok(PriceHistoryRequest::new(symbol, self.config.interval))
    }

    /// One overlay per configured window, in configuration order.
    ///
    /// Windows longer than the series produce empty overlays rather than
    /// errors; the chart simply has nothing to draw for them yet.
    pub fn compute_overlays(&self, samples: &[PriceSample]) -> MarketDataResult<Vec<SmaOverlay>> {
        #[cfg(feature = "parallel")]
        let overlays: MarketDataResult<Vec<SmaOverlay>> = self
            .config
            .windows
            .par_iter()
            .map(|&window_len| {
                self.moving_averages
                    .calculate_sma(samples, window_len)
                    .map(|points| SmaOverlay { window_len, points })
            })
            .collect();

        #[cfg(not(feature = "parallel"))]
        let overlays: MarketDataResult<Vec<SmaOverlay>> = self
            .config
            .windows
            .iter()
            .map(|&window_len| {
                self.moving_averages
                    .calculate_sma(samples, window_len)
                    .map(|points| SmaOverlay { window_len, points })
            })
            .collect();

        let overlays = overlays?;
        crate::log_debug!(
            LogComponent::Chart("Service"),
            "computed {} overlays over {} samples",
            overlays.len(),
            samples.len()
        );
        Ok(overlays)
    }

    /// Bundle samples, overlays and the finite price range for one render.
    pub fn build_chart_data(&self, series: &SampleSeries) -> MarketDataResult<ChartData> {
        let samples = series.to_vec();
        let overlays = self.compute_overlays(&samples)?;
        let price_range = series.price_range();

        crate::log_info!(
            LogComponent::Chart("Service"),
            "chart data ready: {} samples, {} overlays for {}",
            samples.len(),
            overlays.len(),
            self.config.symbol
        );

        Ok(ChartData { samples, overlays, price_range })
    }
}
