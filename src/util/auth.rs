//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical redirect behavior: anonymous
//! visitors go to `/login`, and a signed-in user on the wrong role's
//! route is bounced to their own dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Landing route for a role after login or a wrong-role bounce.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Employer => "/employer/dashboard",
        Role::JobSeeker => "/seeker/dashboard",
    }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Guard a role-scoped route: anonymous users go to `/login`, users with
/// the wrong role go to their own dashboard.
pub fn install_role_redirect<F>(auth: RwSignal<AuthState>, required: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        match &state.user {
            None => navigate("/login", NavigateOptions::default()),
            Some(user) if user.role != required => {
                navigate(dashboard_path(user.role), NavigateOptions::default());
            }
            Some(_) => {}
        }
    });
}
