use price_chart_data::domain::market_data::{MovingAverageService, Price, PriceSample, Timestamp};

fn sample(ts: u64, price: f64) -> PriceSample {
    PriceSample::new(Timestamp::from(ts), Price::from(price))
}

#[test]
fn two_sample_windows_over_three_samples() {
    let svc = MovingAverageService::new();
    let samples = vec![sample(0, 10.0), sample(300, 20.0), sample(600, 30.0)];

    let points = svc.calculate_sma(&samples, 2).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].timestamp.value(), 900);
    assert_eq!(points[0].value.value(), 15.0);
    assert_eq!(points[1].timestamp.value(), 1200);
    assert_eq!(points[1].value.value(), 25.0);
}

#[test]
fn single_sample_window_of_one() {
    let svc = MovingAverageService::new();
    let samples = vec![sample(0, 5.0)];

    let points = svc.calculate_sma(&samples, 1).unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].timestamp.value(), 300);
    assert_eq!(points[0].value.value(), 5.0);
}

#[test]
fn fractional_means_within_tolerance() {
    let svc = MovingAverageService::new();
    let samples: Vec<PriceSample> =
        (0..10).map(|i| sample(i as u64 * 300, 100.1 + i as f64 * 0.3)).collect();

    let points = svc.calculate_sma(&samples, 3).unwrap();
    assert_eq!(points.len(), 8);

    for (k, point) in points.iter().enumerate() {
        let window = &samples[k..k + 3];
        let mean: f64 = window.iter().map(|s| s.price.value()).sum::<f64>() / 3.0;
        let relative = ((point.value.value() - mean) / mean).abs();
        assert!(relative < 1e-9, "window {k} off by {relative}");
    }
}

#[test]
fn duplicate_timestamps_pass_through() {
    let svc = MovingAverageService::new();
    let samples = vec![sample(0, 10.0), sample(300, 20.0), sample(300, 40.0), sample(600, 30.0)];

    let points = svc.calculate_sma(&samples, 2).unwrap();

    // Four samples stay four samples; nothing is deduplicated
    assert_eq!(points.len(), 3);
    assert_eq!(points[1].value.value(), 30.0);
    assert_eq!(points[1].timestamp.value(), 300 + 600);
}
