//! Seeker's saved-jobs page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::job_card::JobCard;
use crate::components::pagination::Pagination;
use crate::net::types::Job;
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;

#[cfg(feature = "hydrate")]
const PAGE_SIZE: u32 = 10;

#[component]
pub fn FavoriteJobsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::JobSeeker, navigate);

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let page = RwSignal::new(0_u32);
    let total_pages = RwSignal::new(0_u32);
    let refresh = RwSignal::new(0_u32);

    Effect::new(move |_| {
        let current_page = page.get();
        refresh.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_favorites(current_page, PAGE_SIZE).await {
                Ok(result) => {
                    total_pages.set(result.total_pages);
                    jobs.set(result.content);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current_page;
            loading.set(false);
        }
    });

    // Every card on this page is a favorite; toggling always removes.
    let on_favorite = Callback::new(move |(job_id, _): (i64, bool)| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_favorite(job_id).await {
                Ok(()) => {
                    crate::state::toast::show_success(toasts, "Removed from saved jobs");
                    refresh.update(|n| *n += 1);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = job_id;
        }
    });

    view! {
        <div class="page favorites-page">
            <header class="page__header">
                <h1 class="page__title">"Saved Jobs"</h1>
                <p class="page__subtitle">"Jobs you bookmarked while browsing"</p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading saved jobs..."</p> }
            >
                <Show
                    when=move || !jobs.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state card">
                                <h3>"No saved jobs yet"</h3>
                                <p>"Tap the heart on any job listing to keep it here"</p>
                                <a href="/jobs" class="btn btn--primary">
                                    "Browse Jobs"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="jobs-list">
                        <For
                            each=move || jobs.get()
                            key=|job| job.id
                            children=move |job| {
                                // Favorites endpoint rows are saved by definition.
                                let mut job = job;
                                job.is_favorite = Some(true);
                                view! { <JobCard job=job show_favorite=true on_favorite=on_favorite /> }
                            }
                        />
                    </div>
                </Show>
                <Pagination page=page total_pages=Signal::derive(move || total_pages.get()) />
            </Show>
        </div>
    }
}
