//! Employer review screen for one posting's applications.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::application_detail::ApplicationDetail;
use crate::components::pagination::Pagination;
use crate::components::status_badge::ApplicationBadge;
use crate::net::types::{Application, ApplicationStatus, InterviewSchedule, Job};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

#[cfg(feature = "hydrate")]
const PAGE_SIZE: u32 = 10;

#[component]
pub fn JobApplicationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let params = use_params_map();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::Employer, navigate.clone());

    let job_id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let job = RwSignal::new(None::<Job>);
    let applications = RwSignal::new(Vec::<Application>::new());
    let selected = RwSignal::new(None::<Application>);
    let loading = RwSignal::new(true);
    let page = RwSignal::new(0_u32);
    let total_pages = RwSignal::new(0_u32);
    let filter = RwSignal::new(String::new());
    let refresh = RwSignal::new(0_u32);

    let navigate_err = navigate.clone();
    Effect::new(move |_| {
        let Some(id) = job_id.get() else {
            navigate_err("/employer/jobs", NavigateOptions::default());
            return;
        };
        let status = ApplicationStatus::parse(&filter.get());
        let current_page = page.get();
        refresh.track();
        loading.set(true);
        let navigate_fail = navigate_err.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if job.get_untracked().is_none() {
                match crate::net::api::fetch_job(id).await {
                    Ok(fetched) => job.set(Some(fetched)),
                    Err(message) => {
                        crate::state::toast::show_error(toasts, message);
                        navigate_fail("/employer/jobs", NavigateOptions::default());
                        return;
                    }
                }
            }
            match crate::net::api::fetch_job_applications(id, current_page, PAGE_SIZE, status).await
            {
                Ok(result) => {
                    total_pages.set(result.total_pages);
                    // Keep the detail pane in sync with refreshed rows.
                    if let Some(current) = selected.get_untracked() {
                        selected.set(result.content.iter().find(|a| a.id == current.id).cloned());
                    }
                    applications.set(result.content);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status, current_page, navigate_fail);
            loading.set(false);
        }
    });

    let on_status = Callback::new(move |new_status: ApplicationStatus| {
        let Some(current) = selected.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_application_status(current.id, new_status).await {
                Ok(updated) => {
                    crate::state::toast::show_success(toasts, format!("Application {}", new_status.label().to_lowercase()));
                    if new_status == ApplicationStatus::Accepted {
                        if let Err(message) = crate::net::api::send_selection_email(updated.id).await
                        {
                            crate::state::toast::show_error(toasts, message);
                        }
                    }
                    refresh.update(|n| *n += 1);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, new_status);
        }
    });

    let on_interview = Callback::new(move |schedule: InterviewSchedule| {
        let Some(current) = selected.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(message) = crate::net::api::send_interview_email(current.id, &schedule).await
            {
                crate::state::toast::show_error(toasts, message);
                return;
            }
            match crate::net::api::update_application_status(
                current.id,
                ApplicationStatus::Interview,
            )
            .await
            {
                Ok(_) => {
                    crate::state::toast::show_success(toasts, "Interview invite sent");
                    refresh.update(|n| *n += 1);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, schedule);
        }
    });

    view! {
        <div class="page job-applications-page">
            <a href="/employer/jobs" class="back-link">
                "Back to Jobs"
            </a>

            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">
                        {move || {
                            job.get()
                                .map(|job| format!("Applications for {}", job.title))
                                .unwrap_or_else(|| "Applications".to_owned())
                        }}
                    </h1>
                    <p class="page__subtitle">
                        {move || format!("{} applications on this page", applications.get().len())}
                    </p>
                </div>
                <label class="form-field form-field--inline">
                    "Filter by Status:"
                    <select
                        class="form-field__input"
                        prop:value=move || filter.get()
                        on:change=move |ev| {
                            filter.set(event_target_value(&ev));
                            page.set(0);
                        }
                    >
                        <option value="">"All"</option>
                        {ApplicationStatus::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </header>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading applications..."</p> }
            >
                <Show
                    when=move || !applications.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state card">
                                <h3>"No applications yet"</h3>
                                <p>"Applications will appear here when candidates apply"</p>
                            </div>
                        }
                    }
                >
                    <div class="applications-split">
                        <div class="card applications-split__list">
                            <For
                                each=move || applications.get()
                                key=|app| (app.id, app.status)
                                children=move |app| {
                                    let row = app.clone();
                                    let row_id = app.id;
                                    view! {
                                        <button
                                            class="application-row"
                                            class:application-row--selected=move || {
                                                selected.get().is_some_and(|s| s.id == row_id)
                                            }
                                            on:click=move |_| selected.set(Some(row.clone()))
                                        >
                                            <span class="job-card__logo">
                                                {format::initial(
                                                    app.applicant_name.as_deref().unwrap_or_default(),
                                                )}
                                            </span>
                                            <span class="application-row__info">
                                                <span class="application-row__name">
                                                    {app.applicant_name.clone().unwrap_or_default()}
                                                </span>
                                                <span class="application-row__email">
                                                    {app.applicant_email.clone().unwrap_or_default()}
                                                </span>
                                            </span>
                                            <ApplicationBadge status=app.status />
                                            <span class="application-row__date">
                                                {format::short_date(&app.applied_at)}
                                            </span>
                                        </button>
                                    }
                                }
                            />
                        </div>
                        <div class="applications-split__detail">
                            <Show
                                when=move || selected.get().is_some()
                                fallback=move || {
                                    view! {
                                        <div class="card empty-detail">
                                            <p>"Select an application to view details"</p>
                                        </div>
                                    }
                                }
                            >
                                {move || {
                                    selected.get().map(|application| {
                                        view! {
                                            <ApplicationDetail
                                                application=application
                                                on_status=on_status
                                                on_interview=on_interview
                                            />
                                        }
                                    })
                                }}
                            </Show>
                        </div>
                    </div>
                </Show>
                <Pagination page=page total_pages=Signal::derive(move || total_pages.get()) />
            </Show>
        </div>
    }
}
