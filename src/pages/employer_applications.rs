//! Employer-wide application review across every posting.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::application_detail::ApplicationDetail;
use crate::components::pagination::Pagination;
use crate::components::status_badge::ApplicationBadge;
use crate::net::types::{Application, ApplicationStatus, InterviewSchedule};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

#[cfg(feature = "hydrate")]
const PAGE_SIZE: u32 = 10;

#[component]
pub fn EmployerApplicationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::Employer, navigate);

    let applications = RwSignal::new(Vec::<Application>::new());
    let selected = RwSignal::new(None::<Application>);
    let loading = RwSignal::new(true);
    let page = RwSignal::new(0_u32);
    let total_pages = RwSignal::new(0_u32);
    let filter = RwSignal::new(String::new());
    let refresh = RwSignal::new(0_u32);

    Effect::new(move |_| {
        let status = ApplicationStatus::parse(&filter.get());
        let current_page = page.get();
        refresh.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_employer_applications(current_page, PAGE_SIZE, status)
                .await
            {
                Ok(result) => {
                    total_pages.set(result.total_pages);
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
            let _ = (status, current_page);
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
                    crate::state::toast::show_success(
                        toasts,
                        format!("Application status updated to {}", new_status.label().to_lowercase()),
                    );
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
        <div class="page employer-applications-page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"All Applications"</h1>
                    <p class="page__subtitle">"Candidates across every posting"</p>
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
                                <h3>"No applications found"</h3>
                                <p>"Applications to your postings will appear here"</p>
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
                                                    {app.job_title.clone().unwrap_or_default()}
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
                                                show_job_link=true
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
