//! Persisted session-token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `localStorage` slot holds the bearer token. The token shape is not
//! validated here; any non-empty string is forwarded verbatim to the API
//! layer. Writes go through `state::session` so login/logout stay the only
//! write paths.

const TOKEN_KEY: &str = "session.token";

/// Read the persisted token, if any. No side effects.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`, overwriting any prior value.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
    }
}
