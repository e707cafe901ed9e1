//! Profile page: view and edit the signed-in user's record.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ProfileUpdate, Role, User};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

/// Assemble the update payload; the name is the only hard requirement.
/// Company name is only meaningful for employers.
fn build_update(
    name: &str,
    phone: &str,
    company: &str,
    bio: &str,
    employer: bool,
) -> Result<ProfileUpdate, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name cannot be empty.");
    }
    let phone = phone.trim();
    let company = company.trim();
    let bio = bio.trim();
    Ok(ProfileUpdate {
        name: name.to_owned(),
        phone_number: (!phone.is_empty()).then(|| phone.to_owned()),
        company_name: (employer && !company.is_empty()).then(|| company.to_owned()),
        bio: (!bio.is_empty()).then(|| bio.to_owned()),
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    crate::util::auth::install_unauth_redirect(auth, navigate);

    let profile = RwSignal::new(None::<User>);
    let loading = RwSignal::new(true);
    let editing = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());

    let seed_form = move |user: &User| {
        name.set(user.name.clone());
        phone.set(user.phone_number.clone().unwrap_or_default());
        company.set(user.company_name.clone().unwrap_or_default());
        bio.set(user.bio.clone().unwrap_or_default());
    };

    let reload = RwSignal::new(0_u32);
    Effect::new(move |_| {
        reload.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(user) = crate::net::api::fetch_me().await {
                seed_form(&user);
                profile.set(Some(user));
            } else {
                crate::state::toast::show_error(toasts, "Could not load your profile");
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let is_employer = move || {
        profile
            .get()
            .map(|u| u.role == Role::Employer)
            .unwrap_or_else(|| auth.get().is_employer())
    };

    let on_cancel = move |_| {
        editing.set(false);
        reload.update(|n| *n += 1);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let update = match build_update(
            &name.get(),
            &phone.get(),
            &company.get(),
            &bio.get(),
            is_employer(),
        ) {
            Ok(update) => update,
            Err(message) => {
                crate::state::toast::show_error(toasts, message);
                return;
            }
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&update).await {
                Ok(updated) => {
                    // Keep the auth context and the persisted session in step
                    // with the new name.
                    auth.update(|state| {
                        if let Some(user) = state.user.as_mut() {
                            user.name = updated.name.clone();
                            crate::util::session::update_user(user);
                        }
                    });
                    seed_form(&updated);
                    profile.set(Some(updated));
                    crate::state::toast::show_success(toasts, "Profile updated successfully");
                    editing.set(false);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
            saving.set(false);
        }
    };

    view! {
        <div class="page profile-page">
            <header class="page__header page__header--split">
                <h1 class="page__title">"My Profile"</h1>
                <Show when=move || !editing.get() && profile.get().is_some()>
                    <button class="btn btn--primary" on:click=move |_| editing.set(true)>
                        "Edit Profile"
                    </button>
                </Show>
            </header>

            <Show
                when=move || !loading.get() && profile.get().is_some()
                fallback=move || view! { <p class="page__loading">"Loading profile..."</p> }
            >
                {move || {
                    profile.get().map(|user| {
                        view! {
                            <div class="profile-layout">
                                <aside class="card profile-card">
                                    <span class="profile-card__avatar">
                                        {format::initial(&user.name)}
                                    </span>
                                    <h2>{user.name.clone()}</h2>
                                    <p class="profile-card__role">
                                        {match user.role {
                                            Role::Employer => "Employer",
                                            Role::JobSeeker => "Job Seeker",
                                        }}
                                    </p>
                                    {user.company_name.clone().map(|company| {
                                        view! { <p class="profile-card__company">{company}</p> }
                                    })}
                                </aside>

                                <form class="card profile-form" on:submit=on_submit>
                                    <fieldset class="form-section">
                                        <legend>"Personal Information"</legend>
                                        <label class="form-field">
                                            "Full Name"
                                            <input
                                                class="form-field__input"
                                                type="text"
                                                prop:value=move || name.get()
                                                on:input=move |ev| name.set(event_target_value(&ev))
                                                disabled=move || !editing.get()
                                            />
                                        </label>
                                        <label class="form-field">
                                            "Email"
                                            <input
                                                class="form-field__input"
                                                type="email"
                                                prop:value=user.email.clone()
                                                disabled=true
                                            />
                                        </label>
                                        <label class="form-field">
                                            "Phone"
                                            <input
                                                class="form-field__input"
                                                type="tel"
                                                prop:value=move || phone.get()
                                                on:input=move |ev| phone.set(event_target_value(&ev))
                                                disabled=move || !editing.get()
                                            />
                                        </label>
                                        <Show when=is_employer>
                                            <label class="form-field">
                                                "Company Name"
                                                <input
                                                    class="form-field__input"
                                                    type="text"
                                                    prop:value=move || company.get()
                                                    on:input=move |ev| company.set(event_target_value(&ev))
                                                    disabled=move || !editing.get()
                                                />
                                            </label>
                                        </Show>
                                        <label class="form-field">
                                            "Bio"
                                            <textarea
                                                class="form-field__input"
                                                rows=4
                                                placeholder="Tell us about yourself..."
                                                prop:value=move || bio.get()
                                                on:input=move |ev| bio.set(event_target_value(&ev))
                                                disabled=move || !editing.get()
                                            ></textarea>
                                        </label>
                                    </fieldset>

                                    <Show when=move || editing.get()>
                                        <div class="form-actions">
                                            <button class="btn" type="button" on:click=on_cancel>
                                                "Cancel"
                                            </button>
                                            <button
                                                class="btn btn--primary"
                                                type="submit"
                                                disabled=move || saving.get()
                                            >
                                                {move || {
                                                    if saving.get() { "Saving..." } else { "Save Changes" }
                                                }}
                                            </button>
                                        </div>
                                    </Show>
                                </form>
                            </div>
                        }
                    })
                }}
            </Show>
        </div>
    }
}
