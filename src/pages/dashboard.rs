//! Dashboard page composing the prediction, chat, and chart widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount: no persisted token means an immediate login redirect with no
//! profile fetch; with a token the profile is fetched and any failure
//! terminates the session. The export action assembles the downloadable
//! report from the charts and the sales widget's persisted snapshot.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::chatbot_widget::ChatbotWidget;
use crate::components::customer_chart::CustomerChart;
use crate::components::maintenance_widget::MaintenanceWidget;
use crate::components::sales_chart::SalesChart;
use crate::components::sales_widget::SalesWidget;
#[cfg(feature = "hydrate")]
use crate::components::sales_widget::SALES_SNAPSHOT_KEY;
use crate::components::{customer_chart, sales_chart};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Chart sections embedded into the exported report document.
pub(crate) fn report_charts_markup() -> String {
    format!(
        "<h2>Monthly sales</h2>{}<h2>Customer distribution</h2>{}",
        sales_chart::svg_markup(),
        customer_chart::svg_markup(),
    )
}

/// Dashboard page — header actions plus the widget grid.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    // No token: settle as unauthenticated without a profile fetch, so the
    // redirect guard fires. Otherwise fetch the profile for this mount.
    #[cfg(feature = "hydrate")]
    {
        if crate::util::session::read_token().is_some() {
            session.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                crate::state::session::load_profile(session).await;
            });
        } else {
            crate::state::session::terminate(session);
        }
    }

    let on_profile = {
        let navigate = navigate.clone();
        move |_| navigate("/profile", NavigateOptions::default())
    };
    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            crate::state::session::terminate(session);
            navigate("/login", NavigateOptions::default());
        }
    };
    let on_export = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let user = session.get_untracked().user;
            let snapshot: Option<crate::net::types::SalesFeatures> =
                crate::util::storage::load_json(SALES_SNAPSHOT_KEY);
            let html = crate::util::export::build_report_html(
                user.as_ref(),
                &report_charts_markup(),
                snapshot.as_ref(),
            );
            crate::util::export::download_report(&html, crate::util::export::REPORT_FILE_NAME);
        }
    };

    let greeting = move || {
        session
            .get()
            .user
            .map(|user| format!("Welcome, {}", user.full_name))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Insight BI"</h1>
                <div class="dashboard-page__actions">
                    <Show when=move || session.get().user.is_some()>
                        <span class="dashboard-page__greeting">{greeting}</span>
                    </Show>
                    <button class="btn" on:click=on_profile>
                        "Profile"
                    </button>
                    <button class="btn btn--danger" on:click=on_logout>
                        "Log Out"
                    </button>
                    <button class="btn btn--primary" on:click=on_export>
                        "Export Report"
                    </button>
                </div>
            </header>

            <div class="dashboard-page__grid">
                <section class="widget-card">
                    <h3 class="widget-card__title">"Sales Forecast"</h3>
                    <SalesWidget/>
                </section>
                <section class="widget-card">
                    <h3 class="widget-card__title">"Failure Prediction"</h3>
                    <MaintenanceWidget/>
                </section>
                <section class="widget-card widget-card--wide">
                    <h3 class="widget-card__title">"Virtual Assistant"</h3>
                    <ChatbotWidget/>
                </section>
                <section class="widget-card">
                    <h3 class="widget-card__title">"Monthly Sales"</h3>
                    <SalesChart/>
                </section>
                <section class="widget-card">
                    <h3 class="widget-card__title">"Customer Distribution"</h3>
                    <CustomerChart/>
                </section>
            </div>
        </div>
    }
}
