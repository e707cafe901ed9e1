//! Registration page with a seeker/employer role selector.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, Role};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::auth::dashboard_path;

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    role_employer: bool,
    company_name: String,
    phone_number: String,
}

/// Superficial client-side checks before the backend validates for real:
/// password match, minimum length, and the employer's company name.
fn validate_register(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.");
    }
    if form.password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    let role = if form.role_employer {
        Role::Employer
    } else {
        Role::JobSeeker
    };
    let company_name = form.company_name.trim();
    if role == Role::Employer && company_name.is_empty() {
        return Err("Enter your company name.");
    }
    let phone_number = form.phone_number.trim();
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role,
        company_name: (role == Role::Employer).then(|| company_name.to_owned()),
        phone_number: (!phone_number.is_empty()).then(|| phone_number.to_owned()),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let employer = RwSignal::new(false);
    let company_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

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
        let form = RegisterForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role_employer: employer.get(),
            company_name: company_name.get(),
            phone_number: phone_number.get(),
        };
        let request = match validate_register(&form) {
            Ok(request) => request,
            Err(message) => {
                crate::state::toast::show_error(toasts, message);
                return;
            }
        };
        busy.set(true);
        let navigate_done = navigate_submit.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(response) => {
                    let user = crate::state::auth::SessionUser::from_auth(&response);
                    crate::util::session::store(&response.token, &user);
                    let destination = dashboard_path(user.role).to_owned();
                    auth.update(|a| {
                        a.user = Some(user);
                        a.loading = false;
                    });
                    crate::state::toast::show_success(toasts, "Registration successful!");
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
            let _ = (request, navigate_done);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="auth-card__brand">
                    "JobDeck"
                </a>
                <h1 class="auth-card__title">"Create Account"</h1>
                <p class="auth-card__subtitle">"Join to find your next role or hire talent"</p>

                <form class="auth-form" on:submit=on_submit>
                    <div class="role-selector">
                        <button
                            type="button"
                            class="role-selector__btn"
                            class:role-selector__btn--active=move || !employer.get()
                            on:click=move |_| employer.set(false)
                        >
                            "Job Seeker"
                        </button>
                        <button
                            type="button"
                            class="role-selector__btn"
                            class:role-selector__btn--active=move || employer.get()
                            on:click=move |_| employer.set(true)
                        >
                            "Employer"
                        </button>
                    </div>

                    <label class="form-field">
                        "Full Name"
                        <input
                            class="form-field__input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                    <Show when=move || employer.get()>
                        <label class="form-field">
                            "Company Name"
                            <input
                                class="form-field__input"
                                type="text"
                                placeholder="Enter company name"
                                prop:value=move || company_name.get()
                                on:input=move |ev| company_name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="form-field">
                        "Phone Number (Optional)"
                        <input
                            class="form-field__input"
                            type="tel"
                            placeholder="Enter phone number"
                            prop:value=move || phone_number.get()
                            on:input=move |ev| phone_number.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Password"
                        <input
                            class="form-field__input"
                            type="password"
                            placeholder="Create a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Confirm Password"
                        <input
                            class="form-field__input"
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
