use super::*;

fn sample_features() -> SalesFeatures {
    SalesFeatures {
        temperature: 10.0,
        customers: 50.0,
        marketing_spend: 20.0,
        month: 3,
        day_of_week: 4,
        region_east: 0,
        region_north: 1,
        region_south: 0,
        promotion_yes: 1,
        holiday_yes: 0,
    }
}

#[test]
fn report_embeds_snapshot_values() {
    let html = build_report_html(None, "", Some(&sample_features()));
    assert!(html.contains("Last sales prediction input"));
    assert!(html.contains("<td>North</td>"));
    assert!(html.contains("<td>50</td>"));
    assert!(html.contains("<td>Yes</td>"));
}

#[test]
fn report_without_snapshot_omits_section() {
    let html = build_report_html(None, "", None);
    assert!(!html.contains("Last sales prediction input"));
}

#[test]
fn report_embeds_chart_markup_and_user() {
    let user = UserProfile {
        id: 7,
        email: "ada@example.com".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        company: "Analytical Engines".to_owned(),
    };
    let html = build_report_html(Some(&user), "<svg id=\"chart\"></svg>", None);
    assert!(html.contains("<svg id=\"chart\"></svg>"));
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("ada@example.com"));
}

#[test]
fn report_escapes_user_supplied_text() {
    let user = UserProfile {
        id: 1,
        email: "a@b.com".to_owned(),
        full_name: "<script>alert(1)</script>".to_owned(),
        company: String::new(),
    };
    let html = build_report_html(Some(&user), "", None);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn snapshot_rows_map_one_hot_region_back_to_label() {
    let mut features = sample_features();
    assert_eq!(snapshot_rows(&features)[5].1, "North");

    features.region_north = 0;
    assert_eq!(snapshot_rows(&features)[5].1, "West");
}
