use crate::domain::errors::{MarketDataError, MarketDataResult};
use crate::domain::market_data::{Price, PriceSample, SampleInterval, SmaPoint, Timestamp};

/// Domain service computing moving averages over price samples.
pub struct MovingAverageService;

impl MovingAverageService {
    pub fn new() -> Self {
        Self
    }

    /// Simple moving average over `window_len` consecutive samples.
    ///
    /// One point per fully formed window: the arithmetic mean of the window's
    /// prices, stamped with the closing sample's timestamp shifted forward by
    /// `window_len` feed intervals. The feed is assumed to tick every five
    /// minutes; see `SampleInterval::FiveMinutes`.
    ///
    /// Fewer samples than `window_len` yield an empty series. A zero window
    /// length is rejected before any output is produced. NaN prices (from
    /// unparsable upstream strings) make the mean of every window containing
    /// them NaN and leave all other windows untouched.
    pub fn calculate_sma(
        &self,
        samples: &[PriceSample],
        window_len: usize,
    ) -> MarketDataResult<Vec<SmaPoint>> {
        if window_len == 0 {
            return Err(MarketDataError::InvalidWindowLength(window_len));
        }
        if samples.len() < window_len {
            return Ok(Vec::new());
        }

        let shift_secs = window_len as u64 * SampleInterval::FiveMinutes.duration_secs();
        let mut points = Vec::with_capacity(samples.len() - window_len + 1);

        for i in (window_len - 1)..samples.len() {
            let sum: f64 =
                samples[i + 1 - window_len..=i].iter().map(|s| s.price.value()).sum();

            points.push(SmaPoint::new(
                Timestamp::from(samples[i].timestamp.value() + shift_secs),
                Price::from(sum / window_len as f64),
            ));
        }

        Ok(points)
    }
}

impl Default for MovingAverageService {
    fn default() -> Self {
        Self::new()
    }
}

/// Domain service validating sample sequences before they reach the windower.
#[derive(Clone)]
pub struct SeriesValidationService;

impl SeriesValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Timestamps must be non-decreasing; ties are legal live updates.
    pub fn validate_chronology(&self, samples: &[PriceSample]) -> MarketDataResult<()> {
        for i in 1..samples.len() {
            if samples[i].timestamp < samples[i - 1].timestamp {
                return Err(MarketDataError::OutOfOrder(i));
            }
        }
        Ok(())
    }

    /// Indices where the gap to the previous sample is not one feed interval.
    ///
    /// The SMA timestamp shift assumes a fixed five-minute cadence; gaps from
    /// upstream outages make the shifted anchor time drift. Callers surface
    /// these as warnings, the windower itself stays oblivious.
    pub fn cadence_gaps(&self, samples: &[PriceSample]) -> Vec<usize> {
        let expected = SampleInterval::FiveMinutes.duration_secs();
        let mut gaps = Vec::new();

        for i in 1..samples.len() {
            let delta = samples[i].timestamp.value().saturating_sub(samples[i - 1].timestamp.value());
            if delta != expected {
                gaps.push(i);
            }
        }

        gaps
    }
}

impl Default for SeriesValidationService {
    fn default() -> Self {
        Self::new()
    }
}
