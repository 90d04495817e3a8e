use super::*;

#[test]
fn polyline_has_one_point_per_month() {
    let points = polyline_points(&MONTHLY_SALES);
    assert_eq!(points.split(' ').count(), MONTHLY_SALES.len());
}

#[test]
fn polyline_points_stay_inside_the_viewbox() {
    let points = polyline_points(&MONTHLY_SALES);
    for pair in points.split(' ') {
        let (x, y) = pair.split_once(',').unwrap();
        let x: f64 = x.parse().unwrap();
        let y: f64 = y.parse().unwrap();
        assert!((0.0..=360.0).contains(&x), "x out of bounds: {x}");
        assert!((0.0..=160.0).contains(&y), "y out of bounds: {y}");
    }
}

#[test]
fn extremes_map_to_padded_edges() {
    let points = polyline_points(&[0.0, 100.0]);
    assert_eq!(points, "20.0,140.0 340.0,20.0");
}

#[test]
fn flat_series_does_not_divide_by_zero() {
    let points = polyline_points(&[5.0, 5.0, 5.0]);
    assert!(!points.contains("NaN"));
    assert!(!points.contains("inf"));
}

#[test]
fn markup_contains_polyline_and_axis() {
    let svg = svg_markup();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("<line"));
}
