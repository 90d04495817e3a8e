use super::*;

#[test]
fn sales_features_serialize_with_backend_column_names() {
    let features = SalesFeatures {
        temperature: 10.0,
        customers: 50.0,
        marketing_spend: 20.0,
        month: 1,
        day_of_week: 0,
        region_east: 1,
        region_north: 0,
        region_south: 0,
        promotion_yes: 0,
        holiday_yes: 0,
    };
    let value = serde_json::to_value(&features).unwrap();
    assert_eq!(value["Temperature"], 10.0);
    assert_eq!(value["Marketing_Spend"], 20.0);
    assert_eq!(value["DayOfWeek"], 0);
    assert_eq!(value["Region_East"], 1);
    assert_eq!(value["Promotion_Yes"], 0);
}

#[test]
fn maintenance_reading_serializes_with_backend_column_names() {
    let reading = MaintenanceReading {
        sensor1: 10.5,
        sensor2: 25.2,
        sensor3: 5.8,
        temperature: 80.0,
        pressure: 3.5,
        vibration: 1.2,
    };
    let value = serde_json::to_value(&reading).unwrap();
    assert_eq!(value["Sensor1"], 10.5);
    assert_eq!(value["Vibration"], 1.2);
}

#[test]
fn sales_prediction_accuracy_is_optional() {
    let with: SalesPrediction =
        serde_json::from_str(r#"{"prediction": 120.5, "accuracy_percentage": 92.3}"#).unwrap();
    assert_eq!(with.accuracy_percentage, Some(92.3));

    let without: SalesPrediction = serde_json::from_str(r#"{"prediction": 120.5}"#).unwrap();
    assert_eq!(without.accuracy_percentage, None);
}

#[test]
fn error_body_tolerates_missing_detail() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.detail, None);

    let body: ErrorBody = serde_json::from_str(r#"{"detail": "nope"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("nope"));
}
