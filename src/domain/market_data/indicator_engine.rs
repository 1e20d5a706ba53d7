use super::{Price, PriceSample, SampleInterval, SmaPoint, Timestamp};
use crate::domain::errors::{MarketDataError, MarketDataResult};
use std::collections::VecDeque;

/// Engine maintaining one SMA incrementally with a running sum.
///
/// Produces the same points as `MovingAverageService::calculate_sma` fed the
/// full history, without rescanning the window on every tick. Non-finite
/// prices never enter the running sum; a counter tracks them so the windows
/// containing one emit NaN and the windows after it recover.
#[derive(Debug, Clone)]
pub struct SmaEngine {
    window_len: usize,
    shift_secs: u64,
    window: VecDeque<f64>,
    sum: f64,
    non_finite_in_window: usize,
    points: Vec<SmaPoint>,
}

impl SmaEngine {
    pub fn new(window_len: usize) -> MarketDataResult<Self> {
        if window_len == 0 {
            return Err(MarketDataError::InvalidWindowLength(window_len));
        }
        Ok(Self {
            window_len,
            shift_secs: window_len as u64 * SampleInterval::FiveMinutes.duration_secs(),
            window: VecDeque::with_capacity(window_len),
            sum: 0.0,
            non_finite_in_window: 0,
            points: Vec::new(),
        })
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Replay a chronological backfill through the engine.
    pub fn compute_historical(&mut self, samples: &[PriceSample]) {
        for sample in samples {
            self.update(sample);
        }
    }

    /// Feed one closed sample; appends at most one point.
    pub fn update(&mut self, sample: &PriceSample) {
        let price = sample.price.value();
        self.window.push_back(price);
        if price.is_finite() {
            self.sum += price;
        } else {
            self.non_finite_in_window += 1;
        }

        if self.window.len() > self.window_len
            && let Some(dropped) = self.window.pop_front()
        {
            if dropped.is_finite() {
                self.sum -= dropped;
            } else {
                self.non_finite_in_window -= 1;
            }
        }

        if self.window.len() == self.window_len {
            let value = if self.non_finite_in_window > 0 {
                f64::NAN
            } else {
                self.sum / self.window_len as f64
            };
            self.points.push(SmaPoint::new(
                Timestamp::from(sample.timestamp.value() + self.shift_secs),
                Price::from(value),
            ));
        }
    }

    /// Provisional value for a still-forming sample, without mutating state.
    pub fn preview(&self, price: f64) -> Option<Price> {
        if self.window.len() + 1 < self.window_len {
            return None;
        }

        let (removed, removed_non_finite) = if self.window.len() < self.window_len {
            (0.0, 0)
        } else {
            match self.window.front() {
                Some(front) if front.is_finite() => (*front, 0),
                Some(_) => (0.0, 1),
                None => (0.0, 0),
            }
        };

        let pending_non_finite =
            self.non_finite_in_window - removed_non_finite + usize::from(!price.is_finite());

        let value = if pending_non_finite > 0 {
            f64::NAN
        } else {
            (self.sum + price - removed) / self.window_len as f64
        };
        Some(Price::from(value))
    }

    pub fn points(&self) -> &[SmaPoint] {
        &self.points
    }

    pub fn latest(&self) -> Option<&SmaPoint> {
        self.points.last()
    }
}
