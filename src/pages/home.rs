//! Public landing page: hero search, latest openings, how-it-works.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::job_card::JobCard;
use crate::net::types::Job;

/// How many postings the "Latest Job Openings" section shows.
#[cfg(feature = "hydrate")]
const LATEST_JOBS_COUNT: u32 = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    let keyword = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let latest = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(jobs) = crate::net::api::fetch_latest_jobs(LATEST_JOBS_COUNT).await {
                latest.set(jobs);
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        loading.set(false);
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(
            &super::jobs::search_href(&keyword.get(), &location.get(), None),
            NavigateOptions::default(),
        );
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Find Your Dream Job Today"</h1>
                <p class="hero__subtitle">
                    "Connect with top employers and discover opportunities that match your skills."
                </p>
                <form class="hero__search" on:submit=on_search>
                    <input
                        class="hero__search-input"
                        type="text"
                        placeholder="Job title, keywords, or company"
                        prop:value=move || keyword.get()
                        on:input=move |ev| keyword.set(event_target_value(&ev))
                    />
                    <input
                        class="hero__search-input"
                        type="text"
                        placeholder="City or location"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary btn--lg" type="submit">
                        "Search Jobs"
                    </button>
                </form>
            </section>

            <section class="latest-jobs">
                <div class="section-header">
                    <div>
                        <h2 class="section-header__title">"Latest Job Openings"</h2>
                        <p class="section-header__subtitle">
                            "The most recent opportunities from top companies"
                        </p>
                    </div>
                    <a href="/jobs" class="btn btn--secondary">
                        "View All Jobs"
                    </a>
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p class="page__loading">"Loading jobs..."</p> }
                >
                    <div class="jobs-grid">
                        <For
                            each=move || latest.get()
                            key=|job| job.id
                            children=move |job| view! { <JobCard job=job /> }
                        />
                    </div>
                </Show>
            </section>

            <section class="how-it-works">
                <h2 class="section-header__title">"How It Works"</h2>
                <div class="steps">
                    <div class="step">
                        <span class="step__number">"1"</span>
                        <h3 class="step__title">"Create Account"</h3>
                        <p class="step__text">"Sign up as a job seeker or employer to get started"</p>
                    </div>
                    <div class="step">
                        <span class="step__number">"2"</span>
                        <h3 class="step__title">"Find or Post Jobs"</h3>
                        <p class="step__text">"Search for jobs or post openings to find the right match"</p>
                    </div>
                    <div class="step">
                        <span class="step__number">"3"</span>
                        <h3 class="step__title">"Connect & Succeed"</h3>
                        <p class="step__text">"Apply for jobs or review applications and hire talent"</p>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2 class="cta__title">"Ready to Take the Next Step?"</h2>
                <div class="cta__buttons">
                    <a href="/register" class="btn btn--primary btn--lg">
                        "Get Started Free"
                    </a>
                    <a href="/jobs" class="btn btn--secondary btn--lg">
                        "Browse Jobs"
                    </a>
                </div>
            </section>
        </div>
    }
}
