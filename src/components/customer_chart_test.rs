use super::*;

#[test]
fn segment_shares_sum_to_the_full_ring() {
    let segments = donut_segments(&[12.0, 19.0, 3.0]);
    let total: f64 = segments.iter().map(|(share, _)| share).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn segment_offsets_accumulate_prior_shares() {
    let segments = donut_segments(&[25.0, 25.0, 50.0]);
    assert_eq!(segments[0], (25.0, 0.0));
    assert_eq!(segments[1], (25.0, 25.0));
    assert_eq!(segments[2], (50.0, 50.0));
}

#[test]
fn empty_total_yields_zero_shares() {
    let segments = donut_segments(&[0.0, 0.0]);
    assert!(segments.iter().all(|(share, _)| *share == 0.0));
}

#[test]
fn markup_contains_one_ring_and_legend_entry_per_segment() {
    let svg = svg_markup();
    assert_eq!(svg.matches("<circle").count(), CUSTOMER_SEGMENTS.len());
    assert_eq!(svg.matches("<text").count(), CUSTOMER_SEGMENTS.len());
    for (label, _) in CUSTOMER_SEGMENTS {
        assert!(svg.contains(label));
    }
}
