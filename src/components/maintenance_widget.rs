//! Equipment-maintenance widget: sensor form and severity-tiered verdict.

#[cfg(test)]
#[path = "maintenance_widget_test.rs"]
mod maintenance_widget_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::{MaintenanceReading, MaintenanceVerdict};
use crate::state::session::SessionState;
use crate::state::submit::Submission;

pub(crate) const DIAGNOSIS_FAILED: &str = "Could not get a diagnosis. Please try again.";

/// Probability cutoff separating a warning from a critical failure risk.
pub(crate) const CRITICAL_PROBABILITY: f64 = 0.75;

/// Display tier for a maintenance verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Warning,
    Critical,
}

/// Threshold the returned probability when the predicted class indicates
/// failure risk; a negative verdict is always `Normal`.
pub fn classify_severity(verdict: &MaintenanceVerdict) -> Severity {
    if verdict.prediction == 1 {
        if verdict.probability > CRITICAL_PROBABILITY {
            Severity::Critical
        } else {
            Severity::Warning
        }
    } else {
        Severity::Normal
    }
}

pub(crate) fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Normal => "widget-form__result--normal",
        Severity::Warning => "widget-form__result--warning",
        Severity::Critical => "widget-form__result--critical",
    }
}

/// In-progress sensor values, kept as entered until submit converts them.
#[derive(Clone, Debug, PartialEq)]
pub struct MaintenanceDraft {
    pub sensor1: String,
    pub sensor2: String,
    pub sensor3: String,
    pub temperature: String,
    pub pressure: String,
    pub vibration: String,
}

impl Default for MaintenanceDraft {
    fn default() -> Self {
        Self {
            sensor1: "10.5".to_owned(),
            sensor2: "25.2".to_owned(),
            sensor3: "5.8".to_owned(),
            temperature: "80".to_owned(),
            pressure: "3.5".to_owned(),
            vibration: "1.2".to_owned(),
        }
    }
}

/// Parse all six telemetry fields; `None` when any of them is garbled, in
/// which case the submit is ignored.
pub fn build_maintenance_payload(draft: &MaintenanceDraft) -> Option<MaintenanceReading> {
    Some(MaintenanceReading {
        sensor1: draft.sensor1.trim().parse().ok()?,
        sensor2: draft.sensor2.trim().parse().ok()?,
        sensor3: draft.sensor3.trim().parse().ok()?,
        temperature: draft.temperature.trim().parse().ok()?,
        pressure: draft.pressure.trim().parse().ok()?,
        vibration: draft.vibration.trim().parse().ok()?,
    })
}

/// Maintenance-prediction form with a severity-colored diagnosis panel.
#[component]
pub fn MaintenanceWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(MaintenanceDraft::default());
    let submission = RwSignal::new(Submission::<MaintenanceVerdict>::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = build_maintenance_payload(&draft.get_untracked()) else {
            return;
        };
        let mut generation = None;
        submission.update(|s| generation = s.begin());
        let Some(generation) = generation else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = match crate::util::session::read_token() {
                Some(token) => crate::net::api::predict_maintenance(&token, &payload).await,
                None => Err(ApiError::Auth),
            };
            let result = match outcome {
                Ok(verdict) => Ok(verdict),
                Err(err) => {
                    log::error!("maintenance prediction failed: {err}");
                    if err == ApiError::Auth {
                        crate::state::session::terminate(session);
                    }
                    Err(DIAGNOSIS_FAILED)
                }
            };
            submission.update(|s| {
                let _ = s.resolve(generation, result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, generation, session);
        }
    };

    let field = move |label: &'static str,
                      value: fn(&MaintenanceDraft) -> &String,
                      write: fn(&mut MaintenanceDraft, String)| {
        view! {
            <label class="widget-form__field">
                {label}
                <input
                    class="widget-form__input"
                    type="number"
                    step="0.1"
                    prop:value=move || value(&draft.get()).clone()
                    on:input=move |ev| draft.update(|d| write(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <form class="widget-form" on:submit=on_submit>
            <div class="widget-form__grid">
                {field("Sensor 1", |d| &d.sensor1, |d, v| d.sensor1 = v)}
                {field("Sensor 2", |d| &d.sensor2, |d, v| d.sensor2 = v)}
                {field("Sensor 3", |d| &d.sensor3, |d, v| d.sensor3 = v)}
                {field("Temperature", |d| &d.temperature, |d, v| d.temperature = v)}
                {field("Pressure", |d| &d.pressure, |d, v| d.pressure = v)}
                {field("Vibration", |d| &d.vibration, |d, v| d.vibration = v)}
            </div>

            <button
                class="btn btn--primary widget-form__submit"
                type="submit"
                disabled=move || submission.get().is_submitting()
            >
                {move || {
                    if submission.get().is_submitting() { "Analyzing..." } else { "Predict Failure" }
                }}
            </button>

            {move || {
                submission
                    .get()
                    .failure()
                    .map(|message| view! { <p class="widget-form__error">{message}</p> })
            }}

            {move || {
                submission
                    .get()
                    .success()
                    .cloned()
                    .map(|verdict| {
                        let severity = classify_severity(&verdict);
                        let class = format!("widget-form__result {}", severity_class(severity));
                        let status = if verdict.prediction == 1 {
                            "FAILURE RISK"
                        } else {
                            "Normal operation"
                        };
                        view! {
                            <div class=class>
                                <p class="widget-form__result-title">"Diagnosis"</p>
                                <p class="widget-form__result-line">
                                    <b>"Status: "</b>
                                    {status}
                                </p>
                                <p class="widget-form__result-line">
                                    <b>"Failure probability: "</b>
                                    {format!("{:.2}%", verdict.probability * 100.0)}
                                </p>
                            </div>
                        }
                    })
            }}
        </form>
    }
}
