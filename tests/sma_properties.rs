use price_chart_data::domain::market_data::{
    MovingAverageService, Price, PriceSample, SmaEngine, Timestamp,
};
use quickcheck_macros::quickcheck;

/// Five-minute spaced samples; non-finite generated prices are squashed so
/// value equality stays meaningful.
fn samples_from(prices: &[f64]) -> Vec<PriceSample> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let price = if p.is_finite() { p % 10_000.0 } else { 0.0 };
            PriceSample::new(Timestamp::from(i as u64 * 300), Price::from(price))
        })
        .collect()
}

#[quickcheck]
fn output_length_matches_full_window_count(prices: Vec<f64>, window: usize) -> bool {
    let window = window % 64 + 1;
    let samples = samples_from(&prices);

    let points = MovingAverageService::new().calculate_sma(&samples, window).unwrap();
    points.len() == (samples.len() + 1).saturating_sub(window)
}

#[quickcheck]
fn longer_windows_never_produce_more_points(prices: Vec<f64>, window: usize) -> bool {
    let window = window % 64 + 1;
    let samples = samples_from(&prices);
    let svc = MovingAverageService::new();

    let shorter = svc.calculate_sma(&samples, window).unwrap().len();
    let longer = svc.calculate_sma(&samples, window + 1).unwrap().len();
    longer <= shorter
}

#[quickcheck]
fn recomputation_is_deterministic(prices: Vec<f64>, window: usize) -> bool {
    let window = window % 64 + 1;
    let samples = samples_from(&prices);
    let svc = MovingAverageService::new();

    svc.calculate_sma(&samples, window).unwrap() == svc.calculate_sma(&samples, window).unwrap()
}

#[quickcheck]
fn timestamps_shift_by_window_intervals(prices: Vec<f64>, window: usize) -> bool {
    let window = window % 16 + 1;
    let samples = samples_from(&prices);

    let points = MovingAverageService::new().calculate_sma(&samples, window).unwrap();
    points.iter().enumerate().all(|(k, point)| {
        point.timestamp.value()
            == samples[window - 1 + k].timestamp.value() + window as u64 * 300
    })
}

#[quickcheck]
fn streaming_engine_agrees_with_batch(prices: Vec<f64>, window: usize) -> bool {
    let window = window % 32 + 1;
    let samples = samples_from(&prices);

    let expected = MovingAverageService::new().calculate_sma(&samples, window).unwrap();
    let mut engine = SmaEngine::new(window).unwrap();
    engine.compute_historical(&samples);
    let points = engine.points();

    points.len() == expected.len()
        && points.iter().zip(expected.iter()).all(|(got, want)| {
            got.timestamp == want.timestamp
                && (got.value.value() - want.value.value()).abs() < 1e-6
        })
}
