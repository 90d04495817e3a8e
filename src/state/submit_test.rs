use super::*;

// =============================================================
// Re-entrancy guard
// =============================================================

#[test]
fn begin_from_idle_hands_out_generation() {
    let mut submission = Submission::<u32>::default();
    assert_eq!(submission.begin(), Some(1));
    assert!(submission.is_submitting());
}

#[test]
fn begin_while_submitting_is_ignored() {
    let mut submission = Submission::<u32>::default();
    let _ = submission.begin();
    assert_eq!(submission.begin(), None);
}

#[test]
fn begin_clears_prior_result_and_error() {
    let mut submission = Submission::<u32>::default();
    let generation = submission.begin().unwrap();
    assert!(submission.resolve(generation, Ok(7)));
    assert_eq!(submission.success(), Some(&7));

    let _ = submission.begin();
    assert_eq!(submission.success(), None);
    assert_eq!(submission.failure(), None);

    let mut failed = Submission::<u32>::default();
    let generation = failed.begin().unwrap();
    assert!(failed.resolve(generation, Err("boom")));
    let _ = failed.begin();
    assert_eq!(failed.failure(), None);
}

// =============================================================
// Resolution and staleness
// =============================================================

#[test]
fn resolve_success_stores_value() {
    let mut submission = Submission::<u32>::default();
    let generation = submission.begin().unwrap();
    assert!(submission.resolve(generation, Ok(42)));
    assert_eq!(submission.state(), &SubmitState::Success(42));
}

#[test]
fn resolve_failure_stores_message() {
    let mut submission = Submission::<u32>::default();
    let generation = submission.begin().unwrap();
    assert!(submission.resolve(generation, Err("request failed")));
    assert_eq!(submission.failure(), Some("request failed"));
}

#[test]
fn stale_generation_leaves_state_untouched() {
    let mut submission = Submission::<u32>::default();
    let stale = submission.begin().unwrap();
    // The first response never arrived before the state settled and a new
    // submission started.
    assert!(submission.resolve(stale, Err("request failed")));
    let fresh = submission.begin().unwrap();
    assert!(submission.resolve(fresh, Ok(1)));

    assert!(!submission.resolve(stale, Ok(99)));
    assert_eq!(submission.success(), Some(&1));
}

#[test]
fn resolve_without_inflight_request_is_rejected() {
    let mut submission = Submission::<u32>::default();
    assert!(!submission.resolve(0, Ok(5)));
    assert_eq!(submission.state(), &SubmitState::Idle);
}

#[test]
fn resubmission_is_allowed_from_success_and_failure() {
    let mut submission = Submission::<u32>::default();
    let generation = submission.begin().unwrap();
    assert!(submission.resolve(generation, Ok(3)));
    assert_eq!(submission.begin(), Some(2));

    let generation = submission.begin();
    assert_eq!(generation, None); // still submitting
}
