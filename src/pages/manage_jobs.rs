//! Employer's posting management table with activate/deactivate.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::pagination::Pagination;
use crate::components::status_badge::JobBadge;
use crate::net::api::draft_from_job;
use crate::net::types::{Job, JobStatus};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

#[cfg(feature = "hydrate")]
const PAGE_SIZE: u32 = 10;

#[component]
pub fn ManageJobsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::Employer, navigate);

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let page = RwSignal::new(0_u32);
    let total_pages = RwSignal::new(0_u32);
    let refresh = RwSignal::new(0_u32);
    // Pending status-change confirmation: the job and its new status.
    let confirm_change = RwSignal::new(None::<(Job, JobStatus)>);

    Effect::new(move |_| {
        let current_page = page.get();
        refresh.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_jobs(current_page, PAGE_SIZE).await {
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

    let on_confirm = Callback::new(move |()| {
        let Some((job, status)) = confirm_change.get_untracked() else {
            return;
        };
        confirm_change.set(None);
        let draft = draft_from_job(&job, status);
        let job_id = job.id;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_job(job_id, &draft).await {
                Ok(_) => {
                    crate::state::toast::show_success(
                        toasts,
                        if status == JobStatus::Active {
                            "Job activated; it is now visible to job seekers"
                        } else {
                            "Job deactivated"
                        },
                    );
                    refresh.update(|n| *n += 1);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, job_id);
        }
    });

    view! {
        <div class="page manage-jobs-page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"Manage Jobs"</h1>
                    <p class="page__subtitle">"View and manage all your job postings"</p>
                </div>
                <a href="/employer/jobs/new" class="btn btn--primary">
                    "Post New Job"
                </a>
            </header>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading jobs..."</p> }
            >
                <Show
                    when=move || !jobs.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state card">
                                <h3>"No jobs posted yet"</h3>
                                <a href="/employer/jobs/new" class="btn btn--primary btn--sm">
                                    "Post Your First Job"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="card table-card">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Job Title"</th>
                                    <th>"Location"</th>
                                    <th>"Status"</th>
                                    <th>"Posted"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || jobs.get()
                                    key=|job| (job.id, job.status)
                                    children=move |job| {
                                        let detail_href = format!("/jobs/{}", job.id);
                                        let edit_href = format!("/employer/jobs/{}/edit", job.id);
                                        let apps_href = format!("/employer/jobs/{}/applications", job.id);
                                        let active = job.status == JobStatus::Active;
                                        let toggle_job = job.clone();
                                        view! {
                                            <tr>
                                                <td class="data-table__title">{job.title.clone()}</td>
                                                <td>{job.location.clone()}</td>
                                                <td><JobBadge status=job.status /></td>
                                                <td>{format::short_date(&job.created_at)}</td>
                                                <td>
                                                    <div class="data-table__actions">
                                                        <a href=detail_href class="action-link">
                                                            "View"
                                                        </a>
                                                        <a href=edit_href class="action-link">
                                                            "Edit"
                                                        </a>
                                                        <a href=apps_href class="action-link">
                                                            "Applications"
                                                        </a>
                                                        <button
                                                            class="action-link action-link--btn"
                                                            on:click=move |_| {
                                                                let next = if active {
                                                                    JobStatus::Inactive
                                                                } else {
                                                                    JobStatus::Active
                                                                };
                                                                confirm_change
                                                                    .set(Some((toggle_job.clone(), next)));
                                                            }
                                                        >
                                                            {if active { "Deactivate" } else { "Activate" }}
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
                <Pagination page=page total_pages=Signal::derive(move || total_pages.get()) />
            </Show>

            <Show when=move || confirm_change.get().is_some()>
                {move || {
                    confirm_change.get().map(|(job, status)| {
                        let activating = status == JobStatus::Active;
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| confirm_change.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>{if activating { "Activate Job" } else { "Deactivate Job" }}</h2>
                                    <p class="dialog__text" class:dialog__danger={!activating}>
                                        {if activating {
                                            format!(
                                                "\"{}\" will become visible to job seekers again.",
                                                job.title
                                            )
                                        } else {
                                            format!(
                                                "\"{}\" will be hidden from job seekers. Existing applications are kept.",
                                                job.title
                                            )
                                        }}
                                    </p>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=move |_| confirm_change.set(None)>
                                            "Cancel"
                                        </button>
                                        <button
                                            class=if activating { "btn btn--primary" } else { "btn btn--danger" }
                                            on:click=move |_| on_confirm.run(())
                                        >
                                            {if activating { "Activate" } else { "Deactivate" }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                }}
            </Show>
        </div>
    }
}
