//! Customer-distribution doughnut chart, purely presentational.

#[cfg(test)]
#[path = "customer_chart_test.rs"]
mod customer_chart_test;

use leptos::prelude::*;

/// Demo segments shown until the API exposes customer analytics.
pub(crate) const CUSTOMER_SEGMENTS: [(&str, f64); 3] =
    [("New", 12.0), ("Returning", 19.0), ("Inactive", 3.0)];

const SEGMENT_COLORS: [&str; 3] = ["#00d1ff", "#ffce56", "#ff6384"];

/// Per-segment `(share, offset)` pairs in `pathLength="100"` units.
pub(crate) fn donut_segments(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    let mut offset = 0.0;
    values
        .iter()
        .map(|value| {
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            let segment = (share, offset);
            offset += share;
            segment
        })
        .collect()
}

/// Full SVG markup for the chart; shared with the report export.
pub(crate) fn svg_markup() -> String {
    let values: Vec<f64> = CUSTOMER_SEGMENTS.iter().map(|(_, value)| *value).collect();
    let rings: String = donut_segments(&values)
        .into_iter()
        .zip(SEGMENT_COLORS)
        .map(|((share, offset), color)| {
            format!(
                "<circle cx=\"80\" cy=\"80\" r=\"60\" fill=\"none\" stroke=\"{color}\" \
                 stroke-width=\"22\" pathLength=\"100\" \
                 stroke-dasharray=\"{share:.2} {rest:.2}\" stroke-dashoffset=\"{offset:.2}\" \
                 transform=\"rotate(-90 80 80)\"/>",
                rest = 100.0 - share,
                offset = -offset,
            )
        })
        .collect();
    let legend: String = CUSTOMER_SEGMENTS
        .iter()
        .zip(SEGMENT_COLORS)
        .enumerate()
        .map(|(index, ((label, value), color))| {
            let y = 60 + index * 22;
            format!(
                "<rect x=\"170\" y=\"{rect_y}\" width=\"12\" height=\"12\" fill=\"{color}\"/>\
                 <text x=\"188\" y=\"{y}\" class=\"chart__legend\" font-size=\"12\">\
                 {label} ({value})</text>",
                rect_y = y - 10,
            )
        })
        .collect();
    format!(
        "<svg viewBox=\"0 0 280 160\" role=\"img\" aria-label=\"Customer distribution\" \
         class=\"chart chart--donut\">{rings}{legend}</svg>"
    )
}

/// Doughnut chart of the customer-distribution segments.
#[component]
pub fn CustomerChart() -> impl IntoView {
    view! { <div class="chart-host" inner_html=svg_markup()></div> }
}
