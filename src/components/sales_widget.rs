//! Sales-forecast widget: feature form, one-hot encoding, result display.
//!
//! SYSTEM CONTEXT
//! ==============
//! Converts the text-entered draft into the backend's trained feature
//! columns (numeric parsing plus one-hot expansion of the categorical
//! fields) and mirrors each submitted payload into `localStorage` so the
//! dashboard's report export can pick it up later.

#[cfg(test)]
#[path = "sales_widget_test.rs"]
mod sales_widget_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::{SalesFeatures, SalesPrediction};
use crate::state::session::SessionState;
use crate::state::submit::Submission;

/// localStorage key mirroring the last submitted feature record.
pub const SALES_SNAPSHOT_KEY: &str = "sales.last_submission";

pub(crate) const PREDICTION_FAILED: &str = "Could not get a prediction. Please try again.";

pub(crate) const REGIONS: [&str; 4] = ["East", "West", "North", "South"];

pub(crate) const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// In-progress form values, kept as entered until submit converts them.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesDraft {
    pub temperature: String,
    pub customers: String,
    pub marketing_spend: String,
    pub month: String,
    pub day_of_week: String,
    pub region: String,
    pub promotion: bool,
    pub holiday: bool,
}

impl Default for SalesDraft {
    fn default() -> Self {
        Self {
            temperature: "10".to_owned(),
            customers: "50".to_owned(),
            marketing_spend: "20".to_owned(),
            month: "1".to_owned(),
            day_of_week: "0".to_owned(),
            region: "East".to_owned(),
            promotion: false,
            holiday: false,
        }
    }
}

/// Convert the draft to the backend's expected field shapes.
///
/// Returns `None` when a required numeric field does not parse; the submit
/// is ignored in that case. A `West` region one-hot expands to all three
/// region flags set to `0`.
pub fn build_sales_payload(draft: &SalesDraft) -> Option<SalesFeatures> {
    Some(SalesFeatures {
        temperature: draft.temperature.trim().parse().ok()?,
        customers: draft.customers.trim().parse().ok()?,
        marketing_spend: draft.marketing_spend.trim().parse().ok()?,
        month: draft.month.trim().parse().ok()?,
        day_of_week: draft.day_of_week.trim().parse().ok()?,
        region_east: u8::from(draft.region == "East"),
        region_north: u8::from(draft.region == "North"),
        region_south: u8::from(draft.region == "South"),
        promotion_yes: u8::from(draft.promotion),
        holiday_yes: u8::from(draft.holiday),
    })
}

/// Sales-forecast form with prediction and model-confidence display.
#[component]
pub fn SalesWidget() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let draft = RwSignal::new(SalesDraft::default());
    let submission = RwSignal::new(Submission::<SalesPrediction>::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = build_sales_payload(&draft.get_untracked()) else {
            return;
        };
        let mut generation = None;
        submission.update(|s| generation = s.begin());
        let Some(generation) = generation else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            crate::util::storage::save_json(SALES_SNAPSHOT_KEY, &payload);
            leptos::task::spawn_local(async move {
                let outcome = match crate::util::session::read_token() {
                    Some(token) => crate::net::api::predict_sales(&token, &payload).await,
                    None => Err(ApiError::Auth),
                };
                let result = match outcome {
                    Ok(prediction) => Ok(prediction),
                    Err(err) => {
                        log::error!("sales prediction failed: {err}");
                        if err == ApiError::Auth {
                            crate::state::session::terminate(session);
                        }
                        Err(PREDICTION_FAILED)
                    }
                };
                submission.update(|s| {
                    let _ = s.resolve(generation, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, generation, session);
        }
    };

    view! {
        <form class="widget-form" on:submit=on_submit>
            <div class="widget-form__grid">
                <label class="widget-form__field">
                    "Temperature (°C)"
                    <input
                        class="widget-form__input"
                        type="number"
                        prop:value=move || draft.get().temperature
                        on:input=move |ev| draft.update(|d| d.temperature = event_target_value(&ev))
                    />
                </label>
                <label class="widget-form__field">
                    "Customers"
                    <input
                        class="widget-form__input"
                        type="number"
                        prop:value=move || draft.get().customers
                        on:input=move |ev| draft.update(|d| d.customers = event_target_value(&ev))
                    />
                </label>
                <label class="widget-form__field">
                    "Marketing spend (€)"
                    <input
                        class="widget-form__input"
                        type="number"
                        prop:value=move || draft.get().marketing_spend
                        on:input=move |ev| draft.update(|d| d.marketing_spend = event_target_value(&ev))
                    />
                </label>
                <label class="widget-form__field">
                    "Month"
                    <select
                        class="widget-form__select"
                        prop:value=move || draft.get().month
                        on:change=move |ev| draft.update(|d| d.month = event_target_value(&ev))
                    >
                        {(1..=12)
                            .map(|month| {
                                view! { <option value=month.to_string()>{month}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="widget-form__field">
                    "Day of week"
                    <select
                        class="widget-form__select"
                        prop:value=move || draft.get().day_of_week
                        on:change=move |ev| draft.update(|d| d.day_of_week = event_target_value(&ev))
                    >
                        {WEEKDAYS
                            .iter()
                            .enumerate()
                            .map(|(index, name)| {
                                view! { <option value=index.to_string()>{*name}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="widget-form__field">
                    "Region"
                    <select
                        class="widget-form__select"
                        prop:value=move || draft.get().region
                        on:change=move |ev| draft.update(|d| d.region = event_target_value(&ev))
                    >
                        {REGIONS
                            .iter()
                            .map(|region| view! { <option value=*region>{*region}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <div class="widget-form__flags">
                <label class="widget-form__flag">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().promotion
                        on:change=move |ev| draft.update(|d| d.promotion = event_target_checked(&ev))
                    />
                    "Promotion?"
                </label>
                <label class="widget-form__flag">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().holiday
                        on:change=move |ev| draft.update(|d| d.holiday = event_target_checked(&ev))
                    />
                    "Holiday?"
                </label>
            </div>

            <button
                class="btn btn--primary widget-form__submit"
                type="submit"
                disabled=move || submission.get().is_submitting()
            >
                {move || {
                    if submission.get().is_submitting() { "Predicting..." } else { "Predict Sales" }
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
                    .map(|prediction| {
                        view! {
                            <div class="widget-form__result">
                                <p class="widget-form__result-title">"Result"</p>
                                <p class="widget-form__result-line">
                                    {format!("Forecast sales: {:.2} €", prediction.prediction)}
                                </p>
                                {prediction
                                    .accuracy_percentage
                                    .map(|accuracy| {
                                        view! {
                                            <p class="widget-form__result-line">
                                                {format!("Model confidence: {accuracy:.2}%")}
                                            </p>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </form>
    }
}
