//! Job seeker dashboard: stats, recent applications, recommended jobs.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::job_card::JobCard;
use crate::components::status_badge::ApplicationBadge;
use crate::net::types::{Application, ApplicationStatus, Job};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

#[component]
pub fn SeekerDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::JobSeeker, navigate);

    let recent = RwSignal::new(Vec::<Application>::new());
    let recommended = RwSignal::new(Vec::<Job>::new());
    let total_applications = RwSignal::new(0_u64);
    let favorite_count = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_applications(0, 5, None).await {
                Ok(result) => {
                    total_applications.set(result.total_elements);
                    recent.set(result.content);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            if let Ok(favorites) = crate::net::api::fetch_favorites(0, 1).await {
                favorite_count.set(favorites.total_elements);
            }
            if let Some(jobs) = crate::net::api::fetch_latest_jobs(4).await {
                recommended.set(jobs);
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let pending_count = move || {
        recent
            .get()
            .iter()
            .filter(|app| app.status == ApplicationStatus::Pending)
            .count()
    };

    let first_name = move || {
        auth.get()
            .user
            .map(|u| u.name)
            .unwrap_or_else(|| "there".to_owned())
    };

    view! {
        <div class="page dashboard-page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">{move || format!("Welcome back, {}!", first_name())}</h1>
                    <p class="page__subtitle">"Keep track of your search from here"</p>
                </div>
                <a href="/jobs" class="btn btn--primary">
                    "Browse Jobs"
                </a>
            </header>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading dashboard..."</p> }
            >
                <div class="stats-grid">
                    <div class="card stat-card">
                        <span class="stat-card__value">{move || total_applications.get()}</span>
                        <span class="stat-card__label">"Applications Sent"</span>
                    </div>
                    <div class="card stat-card">
                        <span class="stat-card__value">{pending_count}</span>
                        <span class="stat-card__label">"Awaiting Review"</span>
                    </div>
                    <div class="card stat-card">
                        <span class="stat-card__value">{move || favorite_count.get()}</span>
                        <span class="stat-card__label">"Saved Jobs"</span>
                    </div>
                </div>

                <section class="dashboard-section">
                    <div class="section-header">
                        <h2 class="section-header__title">"Recent Applications"</h2>
                        <a href="/seeker/applications" class="section-header__link">
                            "View All"
                        </a>
                    </div>
                    <div class="card">
                        <Show
                            when=move || !recent.get().is_empty()
                            fallback=move || {
                                view! { <p class="empty-section">"No applications yet"</p> }
                            }
                        >
                            <div class="dashboard-list">
                                <For
                                    each=move || recent.get()
                                    key=|app| app.id
                                    children=move |app| {
                                        let job_href = format!("/jobs/{}", app.job_id);
                                        view! {
                                            <a href=job_href class="dashboard-list__row">
                                                <span class="dashboard-list__primary">
                                                    {app.job_title.clone().unwrap_or_default()}
                                                </span>
                                                <span class="dashboard-list__secondary">
                                                    {app.company_name.clone().unwrap_or_default()}
                                                </span>
                                                <ApplicationBadge status=app.status />
                                                <span class="dashboard-list__date">
                                                    {format::short_date(&app.applied_at)}
                                                </span>
                                            </a>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </section>

                <section class="dashboard-section">
                    <div class="section-header">
                        <h2 class="section-header__title">"Recommended For You"</h2>
                        <a href="/jobs" class="section-header__link">
                            "See More"
                        </a>
                    </div>
                    <div class="jobs-grid">
                        <For
                            each=move || recommended.get()
                            key=|job| job.id
                            children=move |job| view! { <JobCard job=job /> }
                        />
                    </div>
                </section>
            </Show>
        </div>
    }
}
