//! Detail pane for one application, with the status-workflow buttons.
//!
//! DESIGN
//! ======
//! The buttons only mirror the server-owned lifecycle
//! (PENDING → REVIEWED → SHORTLISTED → INTERVIEW → ACCEPTED/REJECTED);
//! which transitions actually apply is decided by the backend when the
//! request lands. Shared between the per-job and all-applications pages
//! so the matrix cannot drift between them.

#[cfg(test)]
#[path = "application_detail_test.rs"]
mod application_detail_test;

use leptos::prelude::*;

use super::status_badge::ApplicationBadge;
use crate::net::types::{Application, ApplicationStatus, InterviewSchedule};
use crate::state::toast::use_toasts;
use crate::util::format;

/// One available workflow button for the current status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusAction {
    pub status: ApplicationStatus,
    pub label: &'static str,
    pub class: &'static str,
}

/// The workflow buttons offered for an application in `status`. Terminal
/// states (accepted, rejected, withdrawn, offered) get no buttons.
pub(crate) fn next_actions(status: ApplicationStatus) -> Vec<StatusAction> {
    use ApplicationStatus as S;
    let mut actions = Vec::new();
    if status == S::Pending {
        actions.push(StatusAction {
            status: S::Reviewed,
            label: "Mark as Reviewed",
            class: "btn btn--primary",
        });
    }
    if matches!(status, S::Pending | S::Reviewed) {
        actions.push(StatusAction {
            status: S::Shortlisted,
            label: "Shortlist",
            class: "btn btn--warning",
        });
    }
    if status == S::Shortlisted {
        actions.push(StatusAction {
            status: S::Interview,
            label: "Schedule Interview",
            class: "btn btn--info",
        });
    }
    if matches!(status, S::Pending | S::Reviewed | S::Shortlisted | S::Interview) {
        actions.push(StatusAction {
            status: S::Accepted,
            label: "Accept",
            class: "btn btn--success",
        });
        actions.push(StatusAction {
            status: S::Rejected,
            label: "Reject",
            class: "btn btn--danger",
        });
    }
    actions
}

/// Detail pane with applicant info, cover letter, resume link, and the
/// workflow buttons. `on_status` fires with the requested new status;
/// the interview button opens a schedule dialog first and passes its
/// details through `on_interview`.
#[component]
pub fn ApplicationDetail(
    application: Application,
    #[prop(optional)] show_job_link: bool,
    on_status: Callback<ApplicationStatus>,
    on_interview: Callback<InterviewSchedule>,
) -> impl IntoView {
    let show_schedule = RwSignal::new(false);
    let status = application.status;
    let applicant_name = application.applicant_name.clone().unwrap_or_default();
    let message_href = format!("/messages?userId={}", application.applicant_id);

    view! {
        <div class="card application-detail">
            <div class="application-detail__header">
                <span class="job-card__logo job-card__logo--lg">
                    {format::initial(&applicant_name)}
                </span>
                <div>
                    <h2>{applicant_name.clone()}</h2>
                    <p>{application.applicant_email.clone().unwrap_or_default()}</p>
                </div>
            </div>

            <Show when=move || show_job_link>
                <section class="application-detail__section">
                    <h3>"Position"</h3>
                    <a href=format!("/jobs/{}", application.job_id)>
                        {application.job_title.clone().unwrap_or_default()}
                    </a>
                </section>
            </Show>

            <section class="application-detail__section">
                <h3>"Status"</h3>
                <ApplicationBadge status=status />
            </section>

            <section class="application-detail__section">
                <h3>"Applied On"</h3>
                <p>{format::short_date(&application.applied_at)}</p>
            </section>

            {application.resume_url.clone().map(|url| {
                view! {
                    <section class="application-detail__section">
                        <h3>"Resume"</h3>
                        <a href=url target="_blank" rel="noopener noreferrer" class="resume-link">
                            "View Resume"
                        </a>
                    </section>
                }
            })}

            {application.cover_letter.clone().map(|letter| {
                view! {
                    <section class="application-detail__section">
                        <h3>"Cover Letter"</h3>
                        <p class="application-detail__cover">{letter}</p>
                    </section>
                }
            })}

            <div class="application-detail__actions">
                {next_actions(status)
                    .into_iter()
                    .map(|action| {
                        let opens_dialog = action.status == ApplicationStatus::Interview;
                        view! {
                            <button
                                class=action.class
                                on:click=move |_| {
                                    if opens_dialog {
                                        show_schedule.set(true);
                                    } else {
                                        on_status.run(action.status);
                                    }
                                }
                            >
                                {action.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a href=message_href class="btn btn--secondary">
                    "Send Message"
                </a>
            </div>
        </div>

        <Show when=move || show_schedule.get()>
            <InterviewDialog show=show_schedule on_submit=on_interview />
        </Show>
    }
}

/// Modal collecting interview details before the INTERVIEW transition.
#[component]
fn InterviewDialog(show: RwSignal<bool>, on_submit: Callback<InterviewSchedule>) -> impl IntoView {
    let toasts = use_toasts();
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let kind = RwSignal::new("Online".to_owned());
    let link = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if date.get().is_empty() || time.get().is_empty() {
            crate::state::toast::show_error(toasts, "Pick an interview date and time.");
            return;
        }
        let meeting_link = link.get().trim().to_owned();
        let extra_notes = notes.get().trim().to_owned();
        on_submit.run(InterviewSchedule {
            interview_date: date.get(),
            interview_time: time.get(),
            interview_type: kind.get(),
            interview_link: (!meeting_link.is_empty()).then_some(meeting_link),
            additional_notes: (!extra_notes.is_empty()).then_some(extra_notes),
        });
        show.set(false);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| show.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Schedule Interview"</h2>
                <form on:submit=submit>
                    <div class="form-row">
                        <label class="form-field">
                            "Date"
                            <input
                                class="form-field__input"
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Time"
                            <input
                                class="form-field__input"
                                type="time"
                                prop:value=move || time.get()
                                on:input=move |ev| time.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="form-field">
                        "Interview Type"
                        <select
                            class="form-field__input"
                            prop:value=move || kind.get()
                            on:change=move |ev| kind.set(event_target_value(&ev))
                        >
                            <option value="Online">"Online"</option>
                            <option value="In-Person">"In-Person"</option>
                            <option value="Phone">"Phone"</option>
                        </select>
                    </label>
                    <label class="form-field">
                        "Meeting Link"
                        <input
                            class="form-field__input"
                            type="url"
                            placeholder="https://meet.example.com/..."
                            prop:value=move || link.get()
                            on:input=move |ev| link.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        "Additional Notes"
                        <textarea
                            class="form-field__input"
                            rows=3
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| show.set(false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Send Invite"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
