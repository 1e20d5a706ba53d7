use insta::assert_json_snapshot;
use price_chart_data::domain::market_data::{MovingAverageService, Price, PriceSample, Timestamp};

fn sample(ts: u64, price: f64) -> PriceSample {
    PriceSample::new(Timestamp::from(ts), Price::from(price))
}

#[test]
fn sma_points_serialize_for_the_renderer() {
    let svc = MovingAverageService::new();
    let samples = vec![sample(0, 10.0), sample(300, 20.0), sample(600, 30.0)];

    let points = svc.calculate_sma(&samples, 2).unwrap();

    assert_json_snapshot!(points, @r###"
    [
      {
        "timestamp": 900,
        "value": 15.0
      },
      {
        "timestamp": 1200,
        "value": 25.0
      }
    ]
    "###);
}
