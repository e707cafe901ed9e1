//! Seeker's application tracker with status filter and withdraw.

#[cfg(test)]
#[path = "my_applications_test.rs"]
mod my_applications_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::pagination::Pagination;
use crate::components::status_badge::ApplicationBadge;
use crate::net::types::{Application, ApplicationStatus};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

#[cfg(feature = "hydrate")]
const PAGE_SIZE: u32 = 10;

/// Only untouched applications can be withdrawn; once an employer acts
/// the server owns the outcome.
fn can_withdraw(status: ApplicationStatus) -> bool {
    status == ApplicationStatus::Pending
}

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::JobSeeker, navigate);

    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);
    let page = RwSignal::new(0_u32);
    let total_pages = RwSignal::new(0_u32);
    let filter = RwSignal::new(String::new());
    let withdraw_target = RwSignal::new(None::<i64>);
    let refresh = RwSignal::new(0_u32);

    Effect::new(move |_| {
        let status = ApplicationStatus::parse(&filter.get());
        let current_page = page.get();
        refresh.track();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_my_applications(current_page, PAGE_SIZE, status).await {
                Ok(result) => {
                    total_pages.set(result.total_pages);
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

    let on_withdraw_confirm = Callback::new(move |()| {
        let Some(id) = withdraw_target.get_untracked() else {
            return;
        };
        withdraw_target.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::withdraw_application(id).await {
                Ok(()) => {
                    crate::state::toast::show_success(toasts, "Application withdrawn");
                    refresh.update(|n| *n += 1);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="page my-applications-page">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"My Applications"</h1>
                    <p class="page__subtitle">"Track the status of your job applications"</p>
                </div>
                <label class="form-field form-field--inline">
                    "Filter:"
                    <select
                        class="form-field__input"
                        prop:value=move || filter.get()
                        on:change=move |ev| {
                            filter.set(event_target_value(&ev));
                            page.set(0);
                        }
                    >
                        <option value="">"All Applications"</option>
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
                                <p>"Start applying for jobs to see your applications here"</p>
                                <a href="/jobs" class="btn btn--primary">
                                    "Browse Jobs"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="applications-grid">
                        <For
                            each=move || applications.get()
                            key=|app| (app.id, app.status)
                            children=move |app| {
                                let app_id = app.id;
                                let job_href = format!("/jobs/{}", app.job_id);
                                let company = app.company_name.clone().unwrap_or_default();
                                let withdrawable = can_withdraw(app.status);
                                view! {
                                    <div class="card application-card">
                                        <div class="application-card__header">
                                            <div class="job-card__logo">{format::initial(&company)}</div>
                                            <div class="application-card__info">
                                                <h3>{app.job_title.clone().unwrap_or_default()}</h3>
                                                <p class="application-card__company">{company.clone()}</p>
                                            </div>
                                            <ApplicationBadge status=app.status />
                                        </div>
                                        <p class="application-card__meta">
                                            {format!("Applied {}", format::short_date(&app.applied_at))}
                                        </p>
                                        {app.cover_letter.clone().map(|letter| {
                                            view! {
                                                <p class="application-card__cover">
                                                    <strong>"Cover Letter: "</strong>
                                                    {format::preview(&letter, 150)}
                                                </p>
                                            }
                                        })}
                                        <div class="application-card__actions">
                                            <a href=job_href class="btn btn--secondary btn--sm">
                                                "View Job"
                                            </a>
                                            <Show when=move || withdrawable>
                                                <button
                                                    class="btn btn--danger btn--sm"
                                                    on:click=move |_| withdraw_target.set(Some(app_id))
                                                >
                                                    "Withdraw"
                                                </button>
                                            </Show>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
                <Pagination page=page total_pages=Signal::derive(move || total_pages.get()) />
            </Show>

            <Show when=move || withdraw_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| withdraw_target.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Withdraw Application"</h2>
                        <p class="dialog__danger">
                            "Are you sure you want to withdraw this application?"
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| withdraw_target.set(None)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| on_withdraw_confirm.run(())
                            >
                                "Withdraw"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
