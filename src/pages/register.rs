//! Registration page, with automatic sign-in after a successful signup.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::error::ApiError;
use crate::state::session::SessionState;

pub(crate) const EMAIL_IN_USE: &str = "This email is already in use. Please try another.";
pub(crate) const REGISTRATION_FAILED: &str = "Something went wrong during registration.";
pub(crate) const CREATED_LOGIN_FAILED: &str =
    "Account created, but signing in failed. Please use the login page.";

/// Validated registration fields: `(full_name, company, email, password)`.
/// Company is optional; the rest are required.
pub(crate) fn validate_register_input(
    full_name: &str,
    company: &str,
    email: &str,
    password: &str,
) -> Result<(String, String, String, String), &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter your name, email, and a password.");
    }
    Ok((
        full_name.to_owned(),
        company.trim().to_owned(),
        email.to_owned(),
        password.to_owned(),
    ))
}

/// Pick the user-facing message for a failed registration. Only the
/// duplicate-email conflict gets a specific message.
pub(crate) fn register_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Conflict => EMAIL_IN_USE,
        _ => REGISTRATION_FAILED,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let full_name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, company_value, email_value, password_value) =
            match validate_register_input(
                &full_name.get(),
                &company.get(),
                &email.get(),
                &password.get(),
            ) {
                Ok(values) => values,
                Err(hint) => {
                    message.set(hint.to_owned());
                    return;
                }
            };
        busy.set(true);
        message.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let registered = crate::net::api::register(
                    &email_value,
                    &password_value,
                    &name_value,
                    &company_value,
                )
                .await;
                match registered {
                    Ok(_) => {
                        // Sign the new account in with the same credentials.
                        match crate::net::api::login(&email_value, &password_value).await {
                            Ok(token) => {
                                crate::state::session::establish(session, &token);
                                navigate("/", leptos_router::NavigateOptions::default());
                            }
                            Err(err) => {
                                log::error!("post-registration login failed: {err}");
                                message.set(CREATED_LOGIN_FAILED.to_owned());
                                busy.set(false);
                            }
                        }
                    }
                    Err(err) => {
                        log::error!("registration failed: {err}");
                        message.set(register_error_message(&err).to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, company_value, email_value, password_value, session);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Insight BI"</h1>
                <p class="login-card__subtitle">"Create Account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Company (optional)"
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <A href="/login">"Already have an account? Sign in"</A>
            </div>
        </div>
    }
}
