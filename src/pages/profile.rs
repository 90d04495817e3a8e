//! Profile page: view identity, edit full name and company.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::ProfileUpdate;
use crate::state::session::SessionState;
use crate::state::submit::Submission;
use crate::util::auth::install_unauth_redirect;

pub(crate) const PROFILE_UPDATED: &str = "Profile updated.";
pub(crate) const PROFILE_UPDATE_FAILED: &str = "Could not update the profile.";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let full_name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let seeded = RwSignal::new(false);
    let submission = RwSignal::new(Submission::<()>::default());

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

    // Seed the editable fields once the profile arrives; later edits win.
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some(user) = session.get().user {
            full_name.set(user.full_name);
            company.set(user.company);
            seeded.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut generation = None;
        submission.update(|s| generation = s.begin());
        let Some(generation) = generation else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let update = ProfileUpdate {
                full_name: full_name.get_untracked().trim().to_owned(),
                company: company.get_untracked().trim().to_owned(),
            };
            leptos::task::spawn_local(async move {
                let outcome = match crate::util::session::read_token() {
                    Some(token) => crate::net::api::update_current_user(&token, &update).await,
                    None => Err(ApiError::Auth),
                };
                let result = match outcome {
                    Ok(user) => {
                        session.update(|s| s.user = Some(user));
                        Ok(())
                    }
                    Err(err) => {
                        log::error!("profile update failed: {err}");
                        if err == ApiError::Auth {
                            crate::state::session::terminate(session);
                        }
                        Err(PROFILE_UPDATE_FAILED)
                    }
                };
                submission.update(|s| {
                    let _ = s.resolve(generation, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = generation;
        }
    };

    let identity = move || {
        session
            .get()
            .user
            .map(|user| format!("User #{} — {}", user.id, user.email))
    };

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <h1>"User Profile"</h1>

                <Show
                    when=move || session.get().user.is_some()
                    fallback=|| view! { <p class="profile-card__loading">"Loading..."</p> }
                >
                    <p class="profile-card__identity">{identity}</p>

                    {move || {
                        submission
                            .get()
                            .failure()
                            .map(|message| view! { <p class="profile-card__error">{message}</p> })
                    }}
                    {move || {
                        submission
                            .get()
                            .success()
                            .is_some()
                            .then(|| view! { <p class="profile-card__success">{PROFILE_UPDATED}</p> })
                    }}

                    <form class="profile-form" on:submit=on_submit>
                        <label class="profile-form__field">
                            "Full name"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || full_name.get()
                                on:input=move |ev| full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="profile-form__field">
                            "Company"
                            <input
                                class="profile-form__input"
                                type="text"
                                prop:value=move || company.get()
                                on:input=move |ev| company.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="btn btn--primary profile-form__submit"
                            type="submit"
                            disabled=move || submission.get().is_submitting()
                        >
                            {move || {
                                if submission.get().is_submitting() {
                                    "Updating..."
                                } else {
                                    "Update Profile"
                                }
                            }}
                        </button>
                    </form>
                </Show>

                <div class="profile-card__footer">
                    <A href="/">"Back to dashboard"</A>
                </div>
            </div>
        </div>
    }
}
