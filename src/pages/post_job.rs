//! Create/edit form for a job posting (the route with an id edits).

#[cfg(test)]
#[path = "post_job_test.rs"]
mod post_job_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{ExperienceLevel, JobDraft, JobStatus, JobType};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;
use crate::util::format::split_skills;

/// Raw form values as typed by the employer.
#[derive(Clone, Debug, Default)]
struct JobForm {
    title: String,
    company_name: String,
    location: String,
    job_type: String,
    experience_level: String,
    status: String,
    deadline: String,
    salary_min: String,
    salary_max: String,
    description: String,
    requirements: String,
    skills: String,
}

fn parse_salary(raw: &str) -> Result<Option<f64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| "Enter salary amounts as plain numbers.")
}

/// Superficial checks mirroring the posting form, then the full payload.
/// `editing` controls whether a status is sent.
fn build_draft(form: &JobForm, editing: bool) -> Result<JobDraft, &'static str> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Job title is required.");
    }
    if title.len() < 3 {
        return Err("Job title must be at least 3 characters.");
    }
    let description = form.description.trim();
    if description.is_empty() {
        return Err("Job description is required.");
    }
    if description.len() < 50 {
        return Err("Job description must be at least 50 characters.");
    }
    let location = form.location.trim();
    if location.is_empty() {
        return Err("Location is required.");
    }
    let company_name = form.company_name.trim();
    if company_name.is_empty() {
        return Err("Company name is required.");
    }
    let requirements = form.requirements.trim();
    let deadline = form.deadline.trim();
    Ok(JobDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        company_name: company_name.to_owned(),
        location: location.to_owned(),
        job_type: JobType::parse(&form.job_type).unwrap_or_default(),
        experience_level: ExperienceLevel::parse(&form.experience_level).unwrap_or_default(),
        salary_min: parse_salary(&form.salary_min)?,
        salary_max: parse_salary(&form.salary_max)?,
        salary_currency: "INR".to_owned(),
        requirements: (!requirements.is_empty()).then(|| requirements.to_owned()),
        skills: split_skills(&form.skills),
        // datetime-local inputs yield minute precision; the backend
        // expects seconds.
        application_deadline: (!deadline.is_empty()).then(|| format!("{deadline}:00")),
        status: editing.then(|| JobStatus::parse(&form.status).unwrap_or(JobStatus::Active)),
    })
}

#[component]
pub fn PostJobPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let params = use_params_map();
    crate::util::auth::install_role_redirect(auth, crate::net::types::Role::Employer, navigate.clone());

    let editing_id = Signal::derive(move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let title = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let job_type = RwSignal::new(JobType::FullTime.as_str().to_owned());
    let experience_level = RwSignal::new(ExperienceLevel::Mid.as_str().to_owned());
    let status = RwSignal::new(JobStatus::Active.as_str().to_owned());
    let deadline = RwSignal::new(String::new());
    let salary_min = RwSignal::new(String::new());
    let salary_max = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let requirements = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let known_skills = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);

    // Editing: load the posting and seed the form.
    let navigate_load = navigate.clone();
    Effect::new(move |_| {
        let Some(id) = editing_id.get() else {
            return;
        };
        loading.set(true);
        let navigate_err = navigate_load.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_job(id).await {
                Ok(job) => {
                    title.set(job.title);
                    company_name.set(job.company_name);
                    location.set(job.location);
                    job_type.set(job.job_type.as_str().to_owned());
                    experience_level
                        .set(job.experience_level.unwrap_or_default().as_str().to_owned());
                    status.set(job.status.as_str().to_owned());
                    deadline.set(
                        job.application_deadline
                            .map(|raw| raw.chars().take(16).collect())
                            .unwrap_or_default(),
                    );
                    salary_min.set(job.salary_min.map(|v| v.to_string()).unwrap_or_default());
                    salary_max.set(job.salary_max.map(|v| v.to_string()).unwrap_or_default());
                    description.set(job.description);
                    requirements.set(job.requirements.unwrap_or_default());
                    skills.set(job.skills.join(", "));
                    loading.set(false);
                }
                Err(message) => {
                    crate::state::toast::show_error(toasts, message);
                    navigate_err("/employer/jobs", NavigateOptions::default());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, navigate_err);
        }
    });

    // Skill suggestions for the tags input.
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(tags) = crate::net::api::fetch_skills().await {
                known_skills.set(tags);
            }
        });
    });

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let editing = editing_id.get_untracked();
        let form = JobForm {
            title: title.get(),
            company_name: company_name.get(),
            location: location.get(),
            job_type: job_type.get(),
            experience_level: experience_level.get(),
            status: status.get(),
            deadline: deadline.get(),
            salary_min: salary_min.get(),
            salary_max: salary_max.get(),
            description: description.get(),
            requirements: requirements.get(),
            skills: skills.get(),
        };
        let draft = match build_draft(&form, editing.is_some()) {
            Ok(draft) => draft,
            Err(message) => {
                crate::state::toast::show_error(toasts, message);
                return;
            }
        };
        saving.set(true);
        let navigate_done = navigate_submit.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(id) => crate::net::api::update_job(id, &draft).await.map(|_| "Job updated"),
                None => crate::net::api::create_job(&draft).await.map(|_| "Job posted"),
            };
            match result {
                Ok(message) => {
                    crate::state::toast::show_success(toasts, message);
                    navigate_done("/employer/jobs", NavigateOptions::default());
                }
                Err(message) => {
                    crate::state::toast::show_error(toasts, message);
                    saving.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, navigate_done);
        }
    };

    let navigate_cancel = navigate.clone();
    let on_cancel = move |_| {
        navigate_cancel("/employer/jobs", NavigateOptions::default());
    };

    view! {
        <div class="page post-job-page">
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading job..."</p> }
            >
                <div class="card form-card">
                    <header class="form-card__header">
                        <h1>
                            {move || {
                                if editing_id.get().is_some() { "Edit Job Posting" } else { "Post New Job" }
                            }}
                        </h1>
                        <p>"Fill in the details below; fields marked * are required"</p>
                    </header>

                    <form on:submit=on_submit.clone()>
                        <fieldset class="form-section">
                            <legend>"Basic Information"</legend>
                            <label class="form-field">
                                "Job Title *"
                                <input
                                    class="form-field__input"
                                    type="text"
                                    placeholder="e.g., Senior Software Engineer"
                                    prop:value=move || title.get()
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                "Company Name *"
                                <input
                                    class="form-field__input"
                                    type="text"
                                    placeholder="e.g., Tech Corp Inc."
                                    prop:value=move || company_name.get()
                                    on:input=move |ev| company_name.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="form-row">
                                <label class="form-field">
                                    "Location *"
                                    <input
                                        class="form-field__input"
                                        type="text"
                                        placeholder="e.g., Bengaluru"
                                        prop:value=move || location.get()
                                        on:input=move |ev| location.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form-field">
                                    "Job Type"
                                    <select
                                        class="form-field__input"
                                        prop:value=move || job_type.get()
                                        on:change=move |ev| job_type.set(event_target_value(&ev))
                                    >
                                        {JobType::all()
                                            .into_iter()
                                            .map(|jt| view! { <option value=jt.as_str()>{jt.label()}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                            </div>
                            <div class="form-row">
                                <label class="form-field">
                                    "Experience Level"
                                    <select
                                        class="form-field__input"
                                        prop:value=move || experience_level.get()
                                        on:change=move |ev| experience_level.set(event_target_value(&ev))
                                    >
                                        {ExperienceLevel::all()
                                            .into_iter()
                                            .map(|lvl| {
                                                view! { <option value=lvl.as_str()>{lvl.label()}</option> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                                <Show when=move || editing_id.get().is_some()>
                                    <label class="form-field">
                                        "Status"
                                        <select
                                            class="form-field__input"
                                            prop:value=move || status.get()
                                            on:change=move |ev| status.set(event_target_value(&ev))
                                        >
                                            {JobStatus::editable()
                                                .into_iter()
                                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                </Show>
                            </div>
                            <label class="form-field">
                                "Application Deadline"
                                <input
                                    class="form-field__input"
                                    type="datetime-local"
                                    prop:value=move || deadline.get()
                                    on:input=move |ev| deadline.set(event_target_value(&ev))
                                />
                                <small class="form-field__hint">"Leave empty if there's no deadline"</small>
                            </label>
                        </fieldset>

                        <fieldset class="form-section">
                            <legend>"Salary (\u{20b9} INR)"</legend>
                            <div class="form-row">
                                <label class="form-field">
                                    "Minimum"
                                    <input
                                        class="form-field__input"
                                        type="number"
                                        placeholder="e.g., 500000"
                                        prop:value=move || salary_min.get()
                                        on:input=move |ev| salary_min.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form-field">
                                    "Maximum"
                                    <input
                                        class="form-field__input"
                                        type="number"
                                        placeholder="e.g., 1200000"
                                        prop:value=move || salary_max.get()
                                        on:input=move |ev| salary_max.set(event_target_value(&ev))
                                    />
                                </label>
                            </div>
                        </fieldset>

                        <fieldset class="form-section">
                            <legend>"Job Details"</legend>
                            <label class="form-field">
                                "Job Description *"
                                <textarea
                                    class="form-field__input"
                                    rows=6
                                    placeholder="Describe the role and responsibilities..."
                                    prop:value=move || description.get()
                                    on:input=move |ev| description.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label class="form-field">
                                "Requirements"
                                <textarea
                                    class="form-field__input"
                                    rows=4
                                    placeholder="Qualifications, education, and experience required..."
                                    prop:value=move || requirements.get()
                                    on:input=move |ev| requirements.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <label class="form-field">
                                "Required Skills"
                                <input
                                    class="form-field__input"
                                    type="text"
                                    list="known-skills"
                                    placeholder="e.g., Rust, PostgreSQL, Kubernetes"
                                    prop:value=move || skills.get()
                                    on:input=move |ev| skills.set(event_target_value(&ev))
                                />
                                <datalist id="known-skills">
                                    <For
                                        each=move || known_skills.get()
                                        key=Clone::clone
                                        children=move |tag| view! { <option value=tag></option> }
                                    />
                                </datalist>
                                <small class="form-field__hint">"Separate skills with commas"</small>
                            </label>
                        </fieldset>

                        <div class="form-actions">
                            <button class="btn" type="button" on:click=on_cancel.clone()>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || {
                                    if saving.get() {
                                        "Saving..."
                                    } else if editing_id.get().is_some() {
                                        "Update Job"
                                    } else {
                                        "Post Job"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
