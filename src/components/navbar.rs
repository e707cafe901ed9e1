//! Top navigation bar with role-conditional links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the only chrome present on every route. It reads the
//! auth context for role-dependent links, owns the unread-messages badge
//! poll, and hosts the dark-mode toggle and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::format;

/// Seconds between unread-count refreshes while signed in.
#[cfg(feature = "hydrate")]
const UNREAD_POLL_SECS: u64 = 30;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let menu_open = RwSignal::new(false);
    let dropdown_open = RwSignal::new(false);
    let unread = RwSignal::new(0_i64);
    let dark = RwSignal::new(crate::util::dark_mode::read_preference());

    // Refresh the badge when auth resolves, then keep polling.
    Effect::new(move || {
        if !auth.get().is_authenticated() {
            unread.set(0);
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(count) = crate::net::api::fetch_unread_count().await {
                unread.set(count);
            }
        });
    });

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(UNREAD_POLL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if !auth.get_untracked().is_authenticated() {
                    continue;
                }
                if let Some(count) = crate::net::api::fetch_unread_count().await {
                    unread.set(count);
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let navigate_logout = navigate.clone();
    let on_logout = StoredValue::new(move |_| {
        crate::util::session::clear();
        auth.update(|a| a.user = None);
        dropdown_open.set(false);
        navigate_logout("/", NavigateOptions::default());
    });

    let dashboard_href = move || {
        auth.get()
            .user
            .map_or("/", |u| crate::util::auth::dashboard_path(u.role))
    };

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "JobDeck"
                </a>

                <div class="navbar__menu" class:navbar__menu--open=move || menu_open.get()>
                    <a href="/jobs" class="navbar__link" on:click=move |_| menu_open.set(false)>
                        "Find Jobs"
                    </a>
                    <Show when=move || auth.get().is_employer()>
                        <a
                            href="/employer/jobs/new"
                            class="navbar__link"
                            on:click=move |_| menu_open.set(false)
                        >
                            "Post a Job"
                        </a>
                        <a
                            href="/employer/jobs"
                            class="navbar__link"
                            on:click=move |_| menu_open.set(false)
                        >
                            "My Jobs"
                        </a>
                        <a
                            href="/employer/applications"
                            class="navbar__link"
                            on:click=move |_| menu_open.set(false)
                        >
                            "Applications"
                        </a>
                    </Show>
                    <Show when=move || auth.get().is_seeker()>
                        <a
                            href="/seeker/applications"
                            class="navbar__link"
                            on:click=move |_| menu_open.set(false)
                        >
                            "My Applications"
                        </a>
                        <a
                            href="/seeker/favorites"
                            class="navbar__link"
                            on:click=move |_| menu_open.set(false)
                        >
                            "Saved Jobs"
                        </a>
                    </Show>
                </div>

                <div class="navbar__actions">
                    <button
                        class="btn navbar__dark-toggle"
                        title="Toggle dark mode"
                        on:click=move |_| {
                            let next = crate::util::dark_mode::toggle(dark.get_untracked());
                            dark.set(next);
                        }
                    >
                        {move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
                    </button>

                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=move || {
                            view! {
                                <div class="navbar__auth-buttons">
                                    <a href="/login" class="btn btn--secondary btn--sm">
                                        "Login"
                                    </a>
                                    <a href="/register" class="btn btn--primary btn--sm">
                                        "Sign Up"
                                    </a>
                                </div>
                            }
                        }
                    >
                        <a href="/messages" class="navbar__icon-link" title="Messages">
                            "\u{2709}"
                            <Show when=move || (unread.get() > 0)>
                                <span class="navbar__unread-badge">{move || unread.get()}</span>
                            </Show>
                        </a>

                        <div class="navbar__dropdown">
                            <button
                                class="navbar__user-btn"
                                on:click=move |_| dropdown_open.update(|open| *open = !*open)
                            >
                                <span class="navbar__avatar">
                                    {move || format::initial(&user_name())}
                                </span>
                                <span class="navbar__user-name">{user_name}</span>
                            </button>
                            <Show when=move || dropdown_open.get()>
                                <div class="navbar__dropdown-menu">
                                    <a
                                        href=move || dashboard_href().to_owned()
                                        class="navbar__dropdown-item"
                                        on:click=move |_| dropdown_open.set(false)
                                    >
                                        "Dashboard"
                                    </a>
                                    <a
                                        href="/profile"
                                        class="navbar__dropdown-item"
                                        on:click=move |_| dropdown_open.set(false)
                                    >
                                        "Profile"
                                    </a>
                                    <button
                                        class="navbar__dropdown-item navbar__dropdown-item--logout"
                                        on:click=on_logout.get_value()
                                    >
                                        "Logout"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </Show>

                    <button
                        class="navbar__toggle"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
