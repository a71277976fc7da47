use chrono::Duration;
use market::model::series::{HISTORY_POINTS, PREDICTION_POINTS};
use market::CatalogError;
use market_core::generator::round2;
use market_core::generator::series::{today, DEFAULT_BASE_PRICE};
use market_core::testing::{fixed_today, init_test_logger, seeded_series};

#[test]
fn test_historical_series_covers_last_31_days() {
    init_test_logger();
    let mut series = seeded_series(1);
    let today = fixed_today();
    let history = series.historical_series_on("AAPL", today);

    assert_eq!(history.len(), HISTORY_POINTS);
    assert_eq!(history[0].get_date(), today - Duration::days(30));
    assert_eq!(history.last().unwrap().get_date(), today);
    for pair in history.windows(2) {
        assert_eq!(pair[1].get_date() - pair[0].get_date(), Duration::days(1));
    }

    let base = series.get_catalog().find("AAPL").unwrap().get_price();
    for point in &history {
        assert!(point.get_price() >= (base * 0.95 * 100.0).floor() / 100.0);
        assert!(point.get_price() <= (base * 1.05 * 100.0).ceil() / 100.0);
        assert!((1_000_000..11_000_000).contains(&point.get_volume()));
    }
}

#[test]
fn test_unknown_symbol_uses_default_base_price() {
    let mut series = seeded_series(2);
    let history = series.historical_series_on("NOSUCHSYMBOL", fixed_today());
    assert_eq!(history.len(), HISTORY_POINTS);
    assert!(history
        .iter()
        .all(|p| (DEFAULT_BASE_PRICE * 0.95..=DEFAULT_BASE_PRICE * 1.05).contains(&p.get_price())));
}

#[test]
fn test_prediction_series_covers_next_week() {
    let mut series = seeded_series(3);
    let today = fixed_today();
    let predictions = series.prediction_series_on("TCS", today);

    assert_eq!(predictions.len(), PREDICTION_POINTS);
    assert_eq!(predictions[0].get_date(), today + Duration::days(1));
    for (offset, point) in predictions.iter().enumerate() {
        assert_eq!(point.get_date(), today + Duration::days(offset as i64 + 1));
        assert!((0.7..1.0).contains(&point.get_confidence()));
    }
}

#[test]
fn test_predictions_drift_around_the_last_historical_price() {
    let today = fixed_today();
    for (seed, symbol) in [(11, "AAPL"), (12, "GOLDBEES"), (13, "HDFCDEBT"), (14, "NOSUCHSYMBOL")] {
        // A fresh generator with the same seed replays the history the prediction anchors on.
        let history = seeded_series(seed).historical_series_on(symbol, today);
        let anchor = history.last().unwrap().get_price();
        let predictions = seeded_series(seed).prediction_series_on(symbol, today);

        let low = round2(anchor * 0.98 * 0.975);
        let high = round2(anchor * 1.02 * 1.025);
        for point in &predictions {
            assert!(
                (low..=high).contains(&point.get_price()),
                "{symbol}: {} outside [{low}, {high}] around {anchor}",
                point.get_price()
            );
        }
    }
}

#[test]
fn test_default_entry_points_use_the_current_date() {
    let today = today();
    let mut series = seeded_series(16);
    let history = series.historical_series("AAPL");
    let predictions = series.prediction_series("AAPL");

    assert_eq!(history.last().unwrap().get_date(), today);
    assert_eq!(predictions[0].get_date(), today + Duration::days(1));
    assert_eq!(series.symbol_detail("AAPL").unwrap().get_historical()[30].get_date(), today);
}

#[test]
fn test_every_call_rerandomizes() {
    let mut series = seeded_series(4);
    let today = fixed_today();
    let first = series.historical_series_on("AAPL", today);
    let second = series.historical_series_on("AAPL", today);
    assert_ne!(first, second);

    let first = series.prediction_series_on("AAPL", today);
    let second = series.prediction_series_on("AAPL", today);
    assert_ne!(first, second);
}

#[test]
fn test_same_seed_replays_series() {
    let today = fixed_today();
    let a = seeded_series(5).prediction_series_on("GOLDBEES", today);
    let b = seeded_series(5).prediction_series_on("GOLDBEES", today);
    assert_eq!(a, b);
}

#[test]
fn test_symbol_detail() {
    let mut series = seeded_series(6);
    let today = fixed_today();

    let detail = series.symbol_detail_on("HDFCDEBT", today).unwrap();
    assert_eq!(detail.get_instrument().get_symbol(), "HDFCDEBT");
    assert_eq!(detail.get_historical().len(), HISTORY_POINTS);
    assert_eq!(detail.get_predictions().len(), PREDICTION_POINTS);

    let chart = detail.chart();
    assert_eq!(chart.len(), HISTORY_POINTS + PREDICTION_POINTS);
    assert!(chart[..HISTORY_POINTS].iter().all(|p| !p.is_prediction()));
    assert!(chart[HISTORY_POINTS..].iter().all(|p| p.is_prediction()));
    assert!(chart.windows(2).all(|w| w[0].date() < w[1].date()));

    assert_eq!(
        series.symbol_detail_on("NOPE", today).unwrap_err(),
        CatalogError::NotFound("NOPE".to_string())
    );
}

#[test]
fn test_symbol_detail_serializes_for_json_output() {
    let mut series = seeded_series(7);
    let detail = series.symbol_detail_on("AAPL", fixed_today()).unwrap();
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["instrument"]["symbol"], "AAPL");
    assert_eq!(json["historical"][30]["date"], "2024-03-01");
    assert_eq!(json["predictions"][0]["date"], "2024-03-02");
}
