//! Employer dashboard: posting stats, recent jobs, recent applications.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::status_badge::{ApplicationBadge, JobBadge};
use crate::net::types::{Application, Job, JobStatus};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::Employer, navigate);

    let recent_jobs = RwSignal::new(Vec::<Job>::new());
    let recent_applications = RwSignal::new(Vec::<Application>::new());
    let total_jobs = RwSignal::new(0_u64);
    let total_applications = RwSignal::new(0_u64);
    let loading = RwSignal::new(true);

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_jobs(0, 5).await {
                Ok(result) => {
                    total_jobs.set(result.total_elements);
                    recent_jobs.set(result.content);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            match crate::net::api::fetch_employer_applications(0, 5, None).await {
                Ok(result) => {
                    total_applications.set(result.total_elements);
                    recent_applications.set(result.content);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let active_jobs = move || {
        recent_jobs
            .get()
            .iter()
            .filter(|job| job.status == JobStatus::Active)
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
                    <p class="page__subtitle">"Manage your job postings and review applications"</p>
                </div>
                <a href="/employer/jobs/new" class="btn btn--primary">
                    "Post New Job"
                </a>
            </header>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading dashboard..."</p> }
            >
                <div class="stats-grid">
                    <div class="card stat-card">
                        <span class="stat-card__value">{move || total_jobs.get()}</span>
                        <span class="stat-card__label">"Total Jobs Posted"</span>
                    </div>
                    <div class="card stat-card">
                        <span class="stat-card__value">{active_jobs}</span>
                        <span class="stat-card__label">"Active Jobs"</span>
                    </div>
                    <div class="card stat-card">
                        <span class="stat-card__value">{move || total_applications.get()}</span>
                        <span class="stat-card__label">"Total Applications"</span>
                    </div>
                </div>

                <section class="dashboard-section">
                    <div class="section-header">
                        <h2 class="section-header__title">"Recent Job Postings"</h2>
                        <a href="/employer/jobs" class="section-header__link">
                            "View All"
                        </a>
                    </div>
                    <div class="card">
                        <Show
                            when=move || !recent_jobs.get().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="empty-section">
                                        <p>"No jobs posted yet"</p>
                                        <a href="/employer/jobs/new" class="btn btn--primary btn--sm">
                                            "Post Your First Job"
                                        </a>
                                    </div>
                                }
                            }
                        >
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Job Title"</th>
                                        <th>"Location"</th>
                                        <th>"Status"</th>
                                        <th>"Posted"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || recent_jobs.get()
                                        key=|job| job.id
                                        children=move |job| {
                                            view! {
                                                <tr>
                                                    <td class="data-table__title">
                                                        <a href=format!("/jobs/{}", job.id)>{job.title.clone()}</a>
                                                    </td>
                                                    <td>{job.location.clone()}</td>
                                                    <td><JobBadge status=job.status /></td>
                                                    <td>{format::short_date(&job.created_at)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </Show>
                    </div>
                </section>

                <section class="dashboard-section">
                    <div class="section-header">
                        <h2 class="section-header__title">"Recent Applications"</h2>
                        <a href="/employer/applications" class="section-header__link">
                            "View All"
                        </a>
                    </div>
                    <div class="card">
                        <Show
                            when=move || !recent_applications.get().is_empty()
                            fallback=move || {
                                view! { <p class="empty-section">"No applications received yet"</p> }
                            }
                        >
                            <div class="dashboard-list">
                                <For
                                    each=move || recent_applications.get()
                                    key=|app| app.id
                                    children=move |app| {
                                        let href = format!("/employer/jobs/{}/applications", app.job_id);
                                        view! {
                                            <a href=href class="dashboard-list__row">
                                                <span class="job-card__logo">
                                                    {format::initial(
                                                        app.applicant_name.as_deref().unwrap_or_default(),
                                                    )}
                                                </span>
                                                <span class="dashboard-list__primary">
                                                    {app.applicant_name.clone().unwrap_or_default()}
                                                </span>
                                                <span class="dashboard-list__secondary">
                                                    {format!(
                                                        "Applied for: {}",
                                                        app.job_title.clone().unwrap_or_default(),
                                                    )}
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
            </Show>
        </div>
    }
}
