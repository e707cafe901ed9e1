//! Job detail page with apply and favorite flows.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{ApplicationDraft, Job};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format;

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let params = use_params_map();

    let job = RwSignal::new(None::<Job>);
    let loading = RwSignal::new(true);
    let is_favorite = RwSignal::new(false);
    let has_applied = RwSignal::new(false);
    let show_apply = RwSignal::new(false);

    let job_id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    // Fetch the posting (and the viewer's applied/favorite flags) whenever
    // the route id changes.
    let navigate_missing = navigate.clone();
    Effect::new(move |_| {
        let Some(id) = job_id.get() else {
            navigate_missing("/jobs", NavigateOptions::default());
            return;
        };
        loading.set(true);
        let navigate_err = navigate_missing.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_job(id).await {
                Ok(fetched) => {
                    is_favorite.set(fetched.is_favorite.unwrap_or(false));
                    let favorite_known = fetched.is_favorite.is_some();
                    job.set(Some(fetched));
                    loading.set(false);

                    let state = auth.get_untracked();
                    if state.is_seeker() {
                        if let Some(applied) = crate::net::api::check_applied(id).await {
                            has_applied.set(applied);
                        }
                        if !favorite_known {
                            if let Some(saved) = crate::net::api::fetch_favorite_status(id).await {
                                is_favorite.set(saved);
                            }
                        }
                    }
                }
                Err(message) => {
                    crate::state::toast::show_error(toasts, message);
                    navigate_err("/jobs", NavigateOptions::default());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, navigate_err);
            loading.set(false);
        }
    });

    let on_favorite = move |_| {
        let state = auth.get_untracked();
        if !state.is_seeker() {
            crate::state::toast::show_info(toasts, "Please login as a job seeker to save jobs");
            return;
        }
        let Some(id) = job_id.get_untracked() else {
            return;
        };
        let currently = is_favorite.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if currently {
                crate::net::api::remove_favorite(id).await
            } else {
                crate::net::api::add_favorite(id).await
            };
            match result {
                Ok(()) => {
                    is_favorite.set(!currently);
                    crate::state::toast::show_success(
                        toasts,
                        if currently { "Removed from saved jobs" } else { "Job saved" },
                    );
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, currently);
        }
    };

    let on_share = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(href) = window.location().href() {
                    let clipboard = window.navigator().clipboard();
                    let promise = clipboard.write_text(&href);
                    leptos::task::spawn_local(async move {
                        if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                            crate::state::toast::show_success(toasts, "Link copied to clipboard");
                        }
                    });
                }
            }
        }
    };

    let navigate_login = navigate.clone();
    let on_login_to_apply = StoredValue::new(move |_| {
        navigate_login("/login", NavigateOptions::default());
    });

    let deadline_view = move || {
        job.get().and_then(|job| job.application_deadline).map(|deadline| {
            let expired = format::is_past(&deadline, format::now_naive());
            view! {
                <p class="job-detail__deadline" class:job-detail__deadline--expired=expired>
                    {format!("Deadline: {}", format::long_date(&deadline))}
                    {expired.then(|| " (Expired)")}
                </p>
            }
        })
    };

    view! {
        <div class="page job-detail-page">
            <Show
                when=move || !loading.get() && job.get().is_some()
                fallback=move || view! { <p class="page__loading">"Loading job..."</p> }
            >
                {move || job.get().map(|job| {
                    let salary = format::salary_range(job.salary_min, job.salary_max);
                    let posted = format::long_date(&job.created_at);
                    view! {
                        <div class="job-detail">
                            <div class="job-detail__main">
                                <div class="card job-detail__header">
                                    <div class="job-detail__heading">
                                        <div class="job-card__logo job-card__logo--lg">
                                            {format::initial(&job.company_name)}
                                        </div>
                                        <div>
                                            <h1 class="job-detail__title">{job.title.clone()}</h1>
                                            <p class="job-detail__company">{job.company_name.clone()}</p>
                                            <div class="job-detail__tags">
                                                <span class="meta-tag">{job.location.clone()}</span>
                                                <span class="meta-tag">{job.job_type.label()}</span>
                                                {job.experience_level.map(|lvl| {
                                                    view! { <span class="meta-tag">{lvl.label()}</span> }
                                                })}
                                            </div>
                                        </div>
                                    </div>
                                    <div class="job-detail__actions">
                                        <Show when=move || auth.get().is_seeker()>
                                            <button
                                                class="btn job-detail__favorite"
                                                class:job-detail__favorite--active=move || is_favorite.get()
                                                on:click=on_favorite
                                            >
                                                {move || if is_favorite.get() { "\u{2665}" } else { "\u{2661}" }}
                                            </button>
                                        </Show>
                                        <button class="btn" title="Share" on:click=on_share>
                                            "Share"
                                        </button>
                                    </div>
                                </div>

                                <div class="card job-detail__body">
                                    <h2>"Job Description"</h2>
                                    <p class="job-detail__description">{job.description.clone()}</p>
                                    {job.requirements.clone().map(|reqs| {
                                        view! {
                                            <h2>"Requirements"</h2>
                                            <p class="job-detail__description">{reqs}</p>
                                        }
                                    })}
                                    <Show when={
                                        let has_skills = !job.skills.is_empty();
                                        move || has_skills
                                    }>
                                        <h2>"Required Skills"</h2>
                                        <div class="skills-list">
                                            {job.skills
                                                .iter()
                                                .map(|skill| {
                                                    view! { <span class="skill-tag">{skill.clone()}</span> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </Show>
                                </div>
                            </div>

                            <aside class="job-detail__sidebar">
                                <div class="card apply-card">
                                    <h3>"Apply for this position"</h3>
                                    <p class="apply-card__salary">{salary}</p>
                                    <p class="apply-card__posted">{format!("Posted {posted}")}</p>
                                    {deadline_view}
                                    {move || {
                                        let state = auth.get();
                                        if has_applied.get() {
                                            view! {
                                                <button class="btn btn--primary" disabled=true>
                                                    "Already Applied"
                                                </button>
                                            }
                                                .into_any()
                                        } else if state.is_seeker() {
                                            view! {
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| show_apply.set(true)
                                                >
                                                    "Apply Now"
                                                </button>
                                            }
                                                .into_any()
                                        } else if state.is_authenticated() {
                                            view! {
                                                <p class="apply-card__note">
                                                    "Sign in as a job seeker to apply"
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <button class="btn btn--primary" on:click=on_login_to_apply.get_value()>
                                                    "Login to Apply"
                                                </button>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                                <div class="card company-card">
                                    <h3>"About the Company"</h3>
                                    <div class="job-card__logo job-card__logo--lg">
                                        {format::initial(&job.company_name)}
                                    </div>
                                    <h4>{job.company_name.clone()}</h4>
                                </div>
                            </aside>
                        </div>
                    }
                })}
            </Show>

            <Show when=move || show_apply.get()>
                {move || {
                    job.get()
                        .zip(job_id.get())
                        .map(|(job, id)| {
                            view! {
                                <ApplyDialog
                                    job_id=id
                                    job_title=job.title
                                    has_applied=has_applied
                                    show=show_apply
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}

/// Modal collecting a resume URL and cover letter for an application.
#[component]
fn ApplyDialog(
    job_id: i64,
    job_title: String,
    has_applied: RwSignal<bool>,
    show: RwSignal<bool>,
) -> impl IntoView {
    let toasts = use_toasts();
    let resume_url = RwSignal::new(String::new());
    let cover_letter = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        submitting.set(true);
        let draft = ApplicationDraft {
            job_id,
            cover_letter: cover_letter.get().trim().to_owned(),
            resume_url: resume_url.get().trim().to_owned(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::apply(&draft).await {
                Ok(_) => {
                    crate::state::toast::show_success(toasts, "Application submitted successfully!");
                    has_applied.set(true);
                    show.set(false);
                }
                Err(message) => crate::state::toast::show_error(toasts, message),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| show.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Apply for {job_title}")}</h2>
                <form on:submit=on_submit>
                    <label class="form-field">
                        "Resume URL"
                        <input
                            class="form-field__input"
                            type="url"
                            placeholder="https://example.com/your-resume.pdf"
                            prop:value=move || resume_url.get()
                            on:input=move |ev| resume_url.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Cover Letter"
                        <textarea
                            class="form-field__input"
                            rows=6
                            placeholder="Tell us why you're a great fit for this role..."
                            prop:value=move || cover_letter.get()
                            on:input=move |ev| cover_letter.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| show.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
