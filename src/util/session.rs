//! Browser localStorage persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token and the signed-in user record live in `localStorage`
//! so a reload restores the session without a round-trip. These helpers
//! centralize hydrate-only read/write behavior; SSR paths safely no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::auth::SessionUser;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "jobdeck_token";
const USER_KEY: &str = "jobdeck_user";

/// Load a JSON value from `localStorage` for `key`.
fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// The stored bearer token, if a session is persisted.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The stored user record, if a session is persisted.
pub fn load_user() -> Option<SessionUser> {
    load_json(USER_KEY)
}

/// Persist a fresh session after login/registration.
pub fn store(token: &str, user: &SessionUser) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
    save_json(USER_KEY, user);
}

/// Overwrite the stored user record, keeping the token (profile edits).
pub fn update_user(user: &SessionUser) {
    save_json(USER_KEY, user);
}

/// Drop the persisted session (logout or forced 401 logout).
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
