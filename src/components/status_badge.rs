//! Status pill for applications and postings.
//!
//! DESIGN
//! ======
//! Status colors must read identically everywhere a lifecycle label shows
//! up (tables, cards, detail panes), so the class mapping lives here.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::{ApplicationStatus, JobStatus};

/// CSS classes for an application-status pill.
pub(crate) fn application_status_class(status: ApplicationStatus) -> String {
    format!(
        "status-badge status-badge--{}",
        status.as_str().to_ascii_lowercase()
    )
}

/// CSS classes for a posting-status pill.
pub(crate) fn job_status_class(status: JobStatus) -> String {
    format!(
        "status-badge status-badge--{}",
        status.as_str().to_ascii_lowercase()
    )
}

/// Lifecycle pill for an application.
#[component]
pub fn ApplicationBadge(status: ApplicationStatus) -> impl IntoView {
    view! {
        <span class=application_status_class(status)>{status.label()}</span>
    }
}

/// Lifecycle pill for a posting.
#[component]
pub fn JobBadge(status: JobStatus) -> impl IntoView {
    view! {
        <span class=job_status_class(status)>{status.label()}</span>
    }
}
