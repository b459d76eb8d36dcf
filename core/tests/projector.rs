//! Trend fitting, projection, and conversion.

use bobrate_core::{
    config::{ProjectorConfig, PROJECTOR_HISTORICAL_RATES},
    error::RateError,
    projector::{project, CombinedSeries, TrendModel, TrendProjector},
    series::RateSeries,
};
use chrono::NaiveDate;

const TOLERANCE: f64 = 1e-9;

fn projection_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

#[test]
fn fit_matches_closed_form_ols() {
    let model = TrendModel::fit(&PROJECTOR_HISTORICAL_RATES).unwrap();

    // Sxy = 924.0 - 6.5 * 129.6, Sxx = 14 * (14^2 - 1) / 12
    let slope = 81.6 / 227.5;
    let intercept = 129.6 / 14.0 - slope * 6.5;

    assert!(model.slope > 0.0);
    assert!((model.slope - slope).abs() < TOLERANCE, "slope {}", model.slope);
    assert!((model.intercept - intercept).abs() < TOLERANCE, "intercept {}", model.intercept);
}

#[test]
fn fit_recovers_an_exact_line() {
    let values: Vec<f64> = (0..10).map(|i| 2.5 * i as f64 - 1.0).collect();
    let model = TrendModel::fit(&values).unwrap();
    assert!((model.slope - 2.5).abs() < TOLERANCE);
    assert!((model.intercept + 1.0).abs() < TOLERANCE);
}

#[test]
fn fit_needs_two_points() {
    assert!(matches!(
        TrendModel::fit(&[7.0]),
        Err(RateError::InsufficientData { needed: 2, got: 1 })
    ));
    assert!(TrendModel::fit(&[]).is_err());
}

#[test]
fn projection_continues_the_index() {
    let model = TrendModel::fit(&PROJECTOR_HISTORICAL_RATES).unwrap();
    let projected = project(&model, 14, 24, projection_start());

    assert_eq!(projected.len(), 24);
    assert_eq!(projected.points[0].rate, model.slope * 14.0 + model.intercept);
    assert_eq!(projected.points[23].rate, model.slope * 37.0 + model.intercept);
    assert_eq!(projected.points[0].label, "Mar 2025");
    assert_eq!(projected.points[23].label, "Jan 2027");
    assert!(projected.rates().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn run_combines_history_then_projection() {
    let projection = TrendProjector::run(&ProjectorConfig::default()).unwrap();
    let combined = &projection.combined;

    assert_eq!(projection.historical.len(), 14);
    assert_eq!(projection.projected.len(), 24);
    assert_eq!(combined.len(), 38);
    assert_eq!(combined.points()[0].label, "Ene 2024");
    assert_eq!(combined.points()[13].label, "Feb 2025");
    assert_eq!(combined.points()[13].rate, 11.30);
    assert_eq!(combined.points()[14], projection.projected.points[0]);
    assert_eq!(combined.boundary(), Some(13));
}

#[test]
fn convert_uses_the_selected_month() {
    let projection = TrendProjector::run(&ProjectorConfig::default()).unwrap();
    let combined = &projection.combined;

    assert_eq!(combined.convert(100.0, 1).unwrap(), 100.0 * combined.points()[0].rate);
    assert_eq!(combined.convert(100.0, 1).unwrap(), 700.0);
    assert_eq!(combined.convert(100.0, 38).unwrap(), 100.0 * combined.points()[37].rate);
    assert_eq!(combined.convert(0.0, 20).unwrap(), 0.0);
}

#[test]
fn convert_rejects_selections_outside_the_series() {
    let projection = TrendProjector::run(&ProjectorConfig::default()).unwrap();
    let combined = &projection.combined;

    for bad in [0, 39, -3] {
        match combined.convert(100.0, bad) {
            Err(RateError::OutOfRange { index, len }) => {
                assert_eq!(index, bad);
                assert_eq!(len, 38);
            }
            other => panic!("selection {bad}: expected OutOfRange, got {other:?}"),
        }
    }
}

#[test]
fn convert_rejects_negative_amounts() {
    let projection = TrendProjector::run(&ProjectorConfig::default()).unwrap();
    assert!(matches!(
        projection.combined.convert(-5.0, 1),
        Err(RateError::InvalidInput { .. })
    ));
    assert!(projection.combined.convert(f64::NAN, 1).is_err());
}

#[test]
fn mismatched_history_is_rejected() {
    let mut config = ProjectorConfig::default();
    config.historical_labels.pop();
    assert!(matches!(
        TrendProjector::run(&config),
        Err(RateError::InvalidInput { .. })
    ));
}

#[test]
fn combine_preserves_order_for_arbitrary_series() {
    let mut a = RateSeries::new("a");
    a.push("one", 1.0);
    let mut b = RateSeries::new("b");
    b.push("two", 2.0);
    b.push("three", 3.0);

    let combined = CombinedSeries::combine(&a, &b);
    assert_eq!(combined.series().labels(), vec!["one", "two", "three"]);
    assert_eq!(combined.boundary(), Some(0));
    assert_eq!(combined.get(3).unwrap().rate, 3.0);
}
