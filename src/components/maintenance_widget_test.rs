use super::*;

fn verdict(prediction: i64, probability: f64) -> MaintenanceVerdict {
    MaintenanceVerdict {
        prediction,
        probability,
    }
}

// =============================================================
// Severity classification
// =============================================================

#[test]
fn high_probability_failure_is_critical() {
    assert_eq!(classify_severity(&verdict(1, 0.8)), Severity::Critical);
}

#[test]
fn moderate_probability_failure_is_warning() {
    assert_eq!(classify_severity(&verdict(1, 0.5)), Severity::Warning);
}

#[test]
fn cutoff_probability_is_still_warning() {
    assert_eq!(
        classify_severity(&verdict(1, CRITICAL_PROBABILITY)),
        Severity::Warning
    );
}

#[test]
fn negative_prediction_is_normal_regardless_of_probability() {
    assert_eq!(classify_severity(&verdict(0, 0.99)), Severity::Normal);
}

#[test]
fn severity_maps_to_distinct_display_classes() {
    assert_ne!(
        severity_class(Severity::Warning),
        severity_class(Severity::Critical)
    );
    assert_ne!(
        severity_class(Severity::Normal),
        severity_class(Severity::Warning)
    );
}

// =============================================================
// Draft parsing
// =============================================================

#[test]
fn default_draft_parses_to_a_reading() {
    let reading = build_maintenance_payload(&MaintenanceDraft::default()).unwrap();
    assert_eq!(reading.sensor1, 10.5);
    assert_eq!(reading.vibration, 1.2);
}

#[test]
fn garbled_sensor_value_rejects_the_draft() {
    let draft = MaintenanceDraft {
        pressure: "high".to_owned(),
        ..MaintenanceDraft::default()
    };
    assert!(build_maintenance_payload(&draft).is_none());
}

// =============================================================
// Display reset on failure
// =============================================================

#[test]
fn failed_call_leaves_prior_prediction_cleared() {
    let mut submission = Submission::<MaintenanceVerdict>::default();
    let generation = submission.begin().unwrap();
    assert!(submission.resolve(generation, Ok(verdict(1, 0.9))));
    assert!(submission.success().is_some());

    // A new submission clears the display before the call starts; its
    // failure then renders only the static error message.
    let generation = submission.begin().unwrap();
    assert!(submission.success().is_none());
    assert!(submission.resolve(generation, Err(DIAGNOSIS_FAILED)));
    assert!(submission.success().is_none());
    assert_eq!(submission.failure(), Some(DIAGNOSIS_FAILED));
}
