use super::*;

// =============================================================
// One-hot encoding
// =============================================================

#[test]
fn north_region_sets_only_the_north_flag() {
    let draft = SalesDraft {
        region: "North".to_owned(),
        ..SalesDraft::default()
    };
    let payload = build_sales_payload(&draft).unwrap();
    assert_eq!(payload.region_east, 0);
    assert_eq!(payload.region_north, 1);
    assert_eq!(payload.region_south, 0);
}

#[test]
fn west_region_clears_all_region_flags() {
    let draft = SalesDraft {
        region: "West".to_owned(),
        ..SalesDraft::default()
    };
    let payload = build_sales_payload(&draft).unwrap();
    assert_eq!(payload.region_east, 0);
    assert_eq!(payload.region_north, 0);
    assert_eq!(payload.region_south, 0);
}

#[test]
fn flags_one_hot_expand_to_yes_columns() {
    let draft = SalesDraft {
        promotion: true,
        holiday: false,
        ..SalesDraft::default()
    };
    let payload = build_sales_payload(&draft).unwrap();
    assert_eq!(payload.promotion_yes, 1);
    assert_eq!(payload.holiday_yes, 0);
}

// =============================================================
// Numeric parsing
// =============================================================

#[test]
fn default_draft_produces_a_payload() {
    let payload = build_sales_payload(&SalesDraft::default()).unwrap();
    assert_eq!(payload.temperature, 10.0);
    assert_eq!(payload.customers, 50.0);
    assert_eq!(payload.marketing_spend, 20.0);
    assert_eq!(payload.month, 1);
    assert_eq!(payload.day_of_week, 0);
}

#[test]
fn numeric_fields_tolerate_surrounding_whitespace() {
    let draft = SalesDraft {
        temperature: " 21.5 ".to_owned(),
        ..SalesDraft::default()
    };
    assert_eq!(build_sales_payload(&draft).unwrap().temperature, 21.5);
}

#[test]
fn garbled_numeric_field_rejects_the_draft() {
    let draft = SalesDraft {
        customers: "lots".to_owned(),
        ..SalesDraft::default()
    };
    assert!(build_sales_payload(&draft).is_none());
}

#[test]
fn empty_required_field_rejects_the_draft() {
    let draft = SalesDraft {
        marketing_spend: String::new(),
        ..SalesDraft::default()
    };
    assert!(build_sales_payload(&draft).is_none());
}
