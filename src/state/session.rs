//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root and read by route guards, pages, and
//! widgets. `establish` and `terminate` are the only paths that write the
//! persisted token; everything else reads it through the token store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::util::session as token_store;

/// Authenticated-user context: the fetched profile plus a loading flag that
/// keeps route guards quiet while a profile fetch is in flight.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl SessionState {
    /// True once loading settled without producing a user.
    pub fn is_unauthenticated(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

/// Persist a freshly issued token and mark the profile fetch as pending.
/// Overwrites any prior token; at most one session exists at a time.
pub fn establish(session: RwSignal<SessionState>, token: &str) {
    token_store::write_token(token);
    session.update(|s| {
        s.user = None;
        s.loading = true;
    });
}

/// Drop the persisted token and the in-memory user.
///
/// This is the logout path and the uniform reaction to any authentication
/// failure, whether it came from a page-level profile fetch or a widget call.
pub fn terminate(session: RwSignal<SessionState>) {
    token_store::clear_token();
    session.update(|s| {
        s.user = None;
        s.loading = false;
    });
}

/// Fetch the profile for the persisted token into the session.
///
/// Any failure — auth or otherwise — terminates the session; the route guard
/// then turns that into a login redirect.
#[cfg(feature = "hydrate")]
pub async fn load_profile(session: RwSignal<SessionState>) {
    let outcome = match token_store::read_token() {
        Some(token) => crate::net::api::fetch_current_user(&token).await,
        None => Err(crate::net::error::ApiError::Auth),
    };
    match outcome {
        Ok(user) => session.update(|s| {
            s.user = Some(user);
            s.loading = false;
        }),
        Err(err) => {
            log::error!("profile fetch failed: {err}");
            terminate(session);
        }
    }
}
