//! Dashboard report export.
//!
//! DESIGN
//! ======
//! The export action assembles a standalone single-page HTML document from
//! the in-memory profile, the chart markup, and the last sales submission
//! persisted by the sales widget, then hands it to the browser as a Blob
//! download. A presentation feature with no data-model impact.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::net::types::{SalesFeatures, UserProfile};

pub const REPORT_FILE_NAME: &str = "dashboard_report.html";

/// Build the full report document.
pub fn build_report_html(
    user: Option<&UserProfile>,
    charts_svg: &str,
    snapshot: Option<&SalesFeatures>,
) -> String {
    let prepared_for = user.map_or_else(String::new, |u| {
        format!(
            "<p class=\"meta\">Prepared for {} ({})</p>",
            escape_html(&u.full_name),
            escape_html(&u.email)
        )
    });

    let snapshot_section = snapshot.map_or_else(String::new, |features| {
        let rows: String = snapshot_rows(features)
            .into_iter()
            .map(|(label, value)| format!("<tr><th>{label}</th><td>{value}</td></tr>"))
            .collect();
        format!("<h2>Last sales prediction input</h2><table>{rows}</table>")
    });

    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Insight BI — Dashboard Report</title>\
         <style>\
         body{{font-family:sans-serif;margin:2rem;color:#222}}\
         .meta{{color:#555}}\
         table{{border-collapse:collapse;margin-top:.5rem}}\
         th,td{{border:1px solid #ccc;padding:.3rem .6rem;text-align:left}}\
         </style></head><body>\
         <h1>Insight BI — Dashboard Report</h1>\
         {prepared_for}\
         {charts_svg}\
         {snapshot_section}\
         </body></html>"
    )
}

/// Label/value pairs for the persisted sales submission.
fn snapshot_rows(features: &SalesFeatures) -> Vec<(&'static str, String)> {
    let region = if features.region_east == 1 {
        "East"
    } else if features.region_north == 1 {
        "North"
    } else if features.region_south == 1 {
        "South"
    } else {
        "West"
    };
    vec![
        ("Temperature (°C)", format!("{}", features.temperature)),
        ("Customers", format!("{}", features.customers)),
        ("Marketing spend (€)", format!("{}", features.marketing_spend)),
        ("Month", format!("{}", features.month)),
        ("Day of week", format!("{}", features.day_of_week)),
        ("Region", region.to_owned()),
        ("Promotion", yes_no(features.promotion_yes)),
        ("Holiday", yes_no(features.holiday_yes)),
    ]
}

fn yes_no(flag: u8) -> String {
    if flag == 1 { "Yes" } else { "No" }.to_owned()
}

/// Minimal HTML escaping for user-supplied text.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Trigger a browser download of `html` under `file_name`.
pub fn download_report(html: &str, file_name: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(html));
        let props = web_sys::BlobPropertyBag::new();
        props.set_type("text/html");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &props) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(file_name);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (html, file_name);
    }
}
