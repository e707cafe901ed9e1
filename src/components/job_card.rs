//! Reusable card for job listings.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent between home, search, and the
//! saved-jobs page while centralizing the favorite-toggle affordance.

use leptos::prelude::*;

use crate::net::types::Job;
use crate::util::format;

/// A job listing card. The favorite heart renders only when
/// `show_favorite` is set and a toggle callback is provided; the callback
/// receives `(job_id, currently_favorite)`.
#[component]
pub fn JobCard(
    job: Job,
    #[prop(optional)] show_favorite: bool,
    #[prop(optional)] on_favorite: Option<Callback<(i64, bool)>>,
) -> impl IntoView {
    let job_id = job.id;
    let is_favorite = job.is_favorite.unwrap_or(false);
    let detail_href = format!("/jobs/{job_id}");
    let posted = format::relative_age(&job.created_at, format::now_naive());
    let salary = format::salary_range(job.salary_min, job.salary_max);

    view! {
        <div class="job-card">
            <div class="job-card__header">
                <div class="job-card__logo">{format::initial(&job.company_name)}</div>
                <div class="job-card__heading">
                    <h3 class="job-card__title">
                        <a href=detail_href.clone()>{job.title.clone()}</a>
                    </h3>
                    <span class="job-card__company">{job.company_name.clone()}</span>
                </div>
                <Show when=move || show_favorite && on_favorite.is_some()>
                    <button
                        class="job-card__favorite"
                        class:job-card__favorite--active=is_favorite
                        title=if is_favorite { "Remove from saved jobs" } else { "Save job" }
                        on:click=move |_| {
                            if let Some(on_favorite) = on_favorite {
                                on_favorite.run((job_id, is_favorite));
                            }
                        }
                    >
                        {if is_favorite { "\u{2665}" } else { "\u{2661}" }}
                    </button>
                </Show>
            </div>

            <div class="job-card__meta">
                <span class="job-card__meta-item">{job.location.clone()}</span>
                <span class="job-card__meta-item">{salary}</span>
                <span class="job-card__meta-item">{posted}</span>
            </div>

            <p class="job-card__description">{format::preview(&job.description, 150)}</p>

            <div class="job-card__footer">
                <div class="job-card__tags">
                    <span class="badge badge--primary">{job.job_type.label()}</span>
                    {job.experience_level.map(|lvl| {
                        view! { <span class="badge badge--gray">{lvl.label()}</span> }
                    })}
                </div>
                <a href=detail_href class="btn btn--primary btn--sm">
                    "View Details"
                </a>
            </div>
        </div>
    }
}
