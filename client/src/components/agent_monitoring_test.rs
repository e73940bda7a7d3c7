use super::*;

#[test]
fn series_max_adds_headroom() {
    assert!((series_max(&[1.0, 5.0, 2.0]) - 5.5).abs() < 1e-9);
    assert!((series_max(&[]) - 1.0).abs() < f64::EPSILON);
    assert!((series_max(&[0.0, 0.0]) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn polyline_spreads_points_across_width() {
    let points = polyline_points(&[0.0, 50.0, 100.0], 200.0, 100.0, 100.0);
    assert_eq!(points, "0.0,100.0 100.0,50.0 200.0,0.0");
}

#[test]
fn polyline_clamps_values_above_max() {
    assert_eq!(polyline_points(&[150.0], 100.0, 40.0, 100.0), "0.0,0.0");
}

#[test]
fn polyline_empty_series() {
    assert_eq!(polyline_points(&[], 100.0, 40.0, 1.0), "");
}

#[test]
fn static_series_fit_their_charts() {
    let points = polyline_points(&LATENCY_SERIES, CHART_WIDTH, CHART_HEIGHT, series_max(&LATENCY_SERIES));
    assert_eq!(points.split(' ').count(), SERIES_LABELS.len());
}
