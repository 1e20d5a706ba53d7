pub use super::value_objects::{Price, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Domain entity - one observed price at a collection time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    pub timestamp: Timestamp,
    pub price: Price,
}

impl PriceSample {
    pub fn new(timestamp: Timestamp, price: Price) -> Self {
        Self { timestamp, price }
    }

    /// A sample whose upstream price failed to parse carries NaN and is not
    /// well formed; it still participates in windowing.
    pub fn is_valid(&self) -> bool {
        self.price.is_finite()
    }
}

/// Domain entity - one point of an SMA overlay.
///
/// The timestamp is the window-closing sample's timestamp shifted forward by
/// one feed interval per sample in the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmaPoint {
    pub timestamp: Timestamp,
    pub value: Price,
}

impl SmaPoint {
    pub fn new(timestamp: Timestamp, value: Price) -> Self {
        Self { timestamp, value }
    }
}

/// Domain entity - chronologically ordered, bounded price series.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    samples: VecDeque<PriceSample>,
    max_size: usize,
}

impl SampleSeries {
    pub fn new(max_size: usize) -> Self {
        Self { samples: VecDeque::new(), max_size }
    }

    pub fn add_sample(&mut self, sample: PriceSample) {
        // A repeated timestamp is a live update of the same tick
        if let Some(last) = self.samples.back_mut() {
            if last.timestamp == sample.timestamp {
                *last = sample;
                return;
            }

            // Late arrival: keep chronological order
            if sample.timestamp < last.timestamp {
                self.insert_sample_sorted(sample);
                return;
            }
        }

        self.samples.push_back(sample);

        if self.samples.len() > self.max_size {
            self.samples.pop_front();
        }
    }

    fn insert_sample_sorted(&mut self, sample: PriceSample) {
        let insert_pos = self
            .samples
            .iter()
            .position(|s| s.timestamp >= sample.timestamp)
            .unwrap_or(self.samples.len());

        if insert_pos < self.samples.len() && self.samples[insert_pos].timestamp == sample.timestamp
        {
            self.samples[insert_pos] = sample;
        } else {
            self.samples.insert(insert_pos, sample);
        }

        if self.samples.len() > self.max_size {
            self.samples.pop_front();
        }
    }

    pub fn get_samples(&self) -> &VecDeque<PriceSample> {
        &self.samples
    }

    /// Contiguous copy for the windower, oldest first.
    pub fn to_vec(&self) -> Vec<PriceSample> {
        self.samples.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<&PriceSample> {
        self.samples.back()
    }

    pub fn latest_price(&self) -> Option<Price> {
        self.samples.back().map(|s| s.price)
    }

    pub fn count(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Finite min/max price across the series, for axis scaling.
    ///
    /// NaN samples are skipped so one malformed tick cannot blank the scale.
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let mut range: Option<(f64, f64)> = None;

        for sample in &self.samples {
            let value = sample.price.value();
            if !value.is_finite() {
                continue;
            }
            range = Some(match range {
                Some((min, max)) => (min.min(value), max.max(value)),
                None => (value, value),
            });
        }

        range.map(|(min, max)| (Price::from(min), Price::from(max)))
    }
}
