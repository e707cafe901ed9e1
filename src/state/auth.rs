//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as a context `RwSignal` at the app root. Route guards and
//! role-aware components read it to coordinate login redirects and
//! identity-dependent rendering; login/register/logout/profile-save are
//! the only writers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{AuthResponse, Role};

/// The slice of the user record kept in memory and in `localStorage`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// Project the login/registration response into the stored slice.
    pub fn from_auth(auth: &AuthResponse) -> Self {
        Self {
            user_id: auth.user_id,
            name: auth.name.clone(),
            email: auth.email.clone(),
            role: auth.role,
        }
    }
}

/// Authentication state tracking the current user and loading status.
/// `loading` stays true until the persisted session has been restored,
/// so guards don't redirect before the answer is known.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_employer(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Employer)
    }

    pub fn is_seeker(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::JobSeeker)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.user_id)
    }
}
