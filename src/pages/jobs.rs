//! Job search page: filters, paginated results, favorite toggles.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::job_card::JobCard;
use crate::components::pagination::Pagination;
use crate::net::api::JobSearchParams;
use crate::net::types::{Job, JobType};
use crate::state::auth::AuthState;
use crate::state::toast::use_toasts;

const PAGE_SIZE: u32 = 10;

/// Build the `/jobs` href carrying non-empty filters, used by the hero
/// search on the home page and for keeping the URL shareable here.
pub(crate) fn search_href(keyword: &str, location: &str, job_type: Option<JobType>) -> String {
    let mut href = "/jobs".to_owned();
    let mut push = {
        let mut first = true;
        move |href: &mut String, key: &str, value: &str| {
            href.push(if std::mem::take(&mut first) { '?' } else { '&' });
            href.push_str(key);
            href.push('=');
            href.push_str(value);
        }
    };
    let keyword = keyword.trim();
    if !keyword.is_empty() {
        push(&mut href, "keyword", keyword);
    }
    let location = location.trim();
    if !location.is_empty() {
        push(&mut href, "location", location);
    }
    if let Some(job_type) = job_type {
        push(&mut href, "jobType", job_type.as_str());
    }
    href
}

/// Flip the favorite flag of one job in a fetched listing, mirroring the
/// server-side toggle without a refetch.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn set_favorite_in(jobs: &mut [Job], job_id: i64, favorite: bool) {
    if let Some(job) = jobs.iter_mut().find(|job| job.id == job_id) {
        job.is_favorite = Some(favorite);
    }
}

#[component]
pub fn JobSearchPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();

    // Seed the filter inputs from the URL once; afterwards the form owns them.
    let initial = query.get_untracked();
    let keyword = RwSignal::new(initial.get("keyword").unwrap_or_default());
    let location = RwSignal::new(initial.get("location").unwrap_or_default());
    let job_type = RwSignal::new(initial.get("jobType").unwrap_or_default());

    let committed = RwSignal::new(JobSearchParams {
        keyword: keyword.get_untracked(),
        location: location.get_untracked(),
        job_type: JobType::parse(&job_type.get_untracked()),
        page: 0,
        size: PAGE_SIZE,
    });

    let page = RwSignal::new(0_u32);
    let jobs = RwSignal::new(Vec::<Job>::new());
    let total_pages = RwSignal::new(0_u32);
    let loading = RwSignal::new(true);
    let show_filters = RwSignal::new(false);
    let locations = RwSignal::new(Vec::<String>::new());

    // Fetch whenever the committed filters or the page change.
    Effect::new(move |_| {
        let mut params = committed.get();
        params.page = page.get();
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_jobs(&params).await {
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
            let _ = params;
        }
    });

    // Location suggestions for the filter input.
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(known) = crate::net::api::fetch_locations().await {
                locations.set(known);
            }
        });
    });

    let navigate_submit = navigate.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let selected_type = JobType::parse(&job_type.get());
        navigate_submit(
            &search_href(&keyword.get(), &location.get(), selected_type),
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
        page.set(0);
        committed.set(JobSearchParams {
            keyword: keyword.get(),
            location: location.get(),
            job_type: selected_type,
            page: 0,
            size: PAGE_SIZE,
        });
    };

    let on_favorite = Callback::new(move |(job_id, currently): (i64, bool)| {
        let state = auth.get_untracked();
        if !state.is_seeker() {
            crate::state::toast::show_info(toasts, "Please login as a job seeker to save jobs");
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = if currently {
                crate::net::api::remove_favorite(job_id).await
            } else {
                crate::net::api::add_favorite(job_id).await
            };
            match result {
                Ok(()) => {
                    jobs.update(|list| set_favorite_in(list, job_id, !currently));
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
            let _ = (job_id, currently);
        }
    });

    view! {
        <div class="page job-search-page">
            <header class="page__header">
                <h1 class="page__title">"Find Your Perfect Job"</h1>
                <p class="page__subtitle">"Browse through open positions"</p>
            </header>

            <form class="search-form card" on:submit=on_search>
                <div class="search-form__inputs">
                    <input
                        class="search-form__input"
                        type="text"
                        placeholder="Job title, keywords..."
                        prop:value=move || keyword.get()
                        on:input=move |ev| keyword.set(event_target_value(&ev))
                    />
                    <input
                        class="search-form__input"
                        type="text"
                        placeholder="Location..."
                        list="known-locations"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <datalist id="known-locations">
                        <For
                            each=move || locations.get()
                            key=Clone::clone
                            children=move |loc| view! { <option value=loc></option> }
                        />
                    </datalist>
                    <button class="btn btn--primary" type="submit">
                        "Search"
                    </button>
                    <button
                        class="btn btn--secondary"
                        type="button"
                        on:click=move |_| show_filters.update(|open| *open = !*open)
                    >
                        "Filters"
                    </button>
                </div>
                <Show when=move || show_filters.get()>
                    <div class="search-form__filters">
                        <label class="form-field">
                            "Job Type"
                            <select
                                class="form-field__input"
                                prop:value=move || job_type.get()
                                on:change=move |ev| job_type.set(event_target_value(&ev))
                            >
                                <option value="">"All Types"</option>
                                {JobType::all()
                                    .into_iter()
                                    .map(|jt| view! { <option value=jt.as_str()>{jt.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>
                </Show>
            </form>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading jobs..."</p> }
            >
                <p class="search-results__count">
                    {move || format!("{} jobs found", jobs.get().len())}
                </p>
                <Show
                    when=move || !jobs.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state card">
                                <h3>"No jobs found"</h3>
                                <p>"Try adjusting your search criteria or browse all jobs"</p>
                            </div>
                        }
                    }
                >
                    <div class="jobs-list">
                        <For
                            each=move || jobs.get()
                            key=|job| (job.id, job.is_favorite)
                            children=move |job| {
                                let show_favorite = auth.get().is_seeker();
                                view! {
                                    <JobCard job=job show_favorite=show_favorite on_favorite=on_favorite />
                                }
                            }
                        />
                    </div>
                </Show>
                <Pagination page=page total_pages=Signal::derive(move || total_pages.get()) />
            </Show>
        </div>
    }
}
