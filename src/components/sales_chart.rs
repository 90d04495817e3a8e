//! Monthly-sales line chart, purely presentational.
//!
//! The same SVG markup backs both the on-screen widget and the exported
//! report, so the chart never diverges between the two.

#[cfg(test)]
#[path = "sales_chart_test.rs"]
mod sales_chart_test;

use leptos::prelude::*;

/// Demo series shown until the API exposes historical sales.
pub(crate) const MONTHLY_SALES: [f64; 12] = [
    65.0, 59.0, 80.0, 81.0, 56.0, 55.0, 40.0, 52.0, 66.0, 74.0, 88.0, 95.0,
];

const VIEW_WIDTH: f64 = 360.0;
const VIEW_HEIGHT: f64 = 160.0;
const PADDING: f64 = 20.0;

/// Scale `values` into `points` coordinates for an SVG polyline, mapping the
/// series min/max onto the padded viewbox.
pub(crate) fn polyline_points(values: &[f64]) -> String {
    let max = values.iter().copied().fold(f64::MIN, f64::max);
    let min = values.iter().copied().fold(f64::MAX, f64::min);
    let span = (max - min).max(f64::EPSILON);
    let step = (VIEW_WIDTH - 2.0 * PADDING) / (values.len().saturating_sub(1).max(1)) as f64;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = PADDING + step * index as f64;
            let y = VIEW_HEIGHT - PADDING - (value - min) / span * (VIEW_HEIGHT - 2.0 * PADDING);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full SVG markup for the chart; shared with the report export.
pub(crate) fn svg_markup() -> String {
    let baseline = VIEW_HEIGHT - PADDING;
    format!(
        "<svg viewBox=\"0 0 {VIEW_WIDTH} {VIEW_HEIGHT}\" role=\"img\" \
         aria-label=\"Monthly sales\" class=\"chart chart--line\">\
         <line x1=\"{PADDING}\" y1=\"{baseline}\" x2=\"{end}\" y2=\"{baseline}\" \
         class=\"chart__axis\" stroke=\"#8892a0\" stroke-width=\"1\"/>\
         <polyline fill=\"none\" stroke=\"#00d1ff\" stroke-width=\"2\" points=\"{points}\"/>\
         </svg>",
        end = VIEW_WIDTH - PADDING,
        points = polyline_points(&MONTHLY_SALES),
    )
}

/// Line chart of the monthly sales series.
#[component]
pub fn SalesChart() -> impl IntoView {
    view! { <div class="chart-host" inner_html=svg_markup()></div> }
}
