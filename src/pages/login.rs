//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::auth::dashboard_path;

/// Trim and require both credentials before hitting the network.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to land after a successful login: the guarded route that bounced
/// us here, or the role's dashboard.
#[cfg(any(test, feature = "hydrate"))]
fn post_login_destination(from: Option<&str>, role: Role) -> String {
    match from {
        Some(path) if path.starts_with('/') => path.to_owned(),
        _ => dashboard_path(role).to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    let navigate_away = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading {
            if let Some(user) = state.user {
                navigate_away(dashboard_path(user.role), NavigateOptions::default());
            }
        }
    });

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    crate::state::toast::show_error(toasts, message);
                    return;
                }
            };
        busy.set(true);
        let from = query.get_untracked().get("from");
        let navigate_done = navigate_submit.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(response) => {
                    let user = crate::state::auth::SessionUser::from_auth(&response);
                    crate::util::session::store(&response.token, &user);
                    let destination = post_login_destination(from.as_deref(), user.role);
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                    crate::state::toast::show_success(toasts, "Login successful!");
                    navigate_done(&destination, NavigateOptions::default());
                }
                Err(message) => {
                    crate::state::toast::show_error(toasts, message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (from, navigate_done);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">
                    "JobDeck"
                </a>
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue to your account"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        "Email Address"
                        <input
                            class="form-field__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Password"
                        <input
                            class="form-field__input"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
