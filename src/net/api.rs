//! REST API helpers for communicating with the job-board backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from the persisted session attached to every request.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade to inline notifications without crashing hydration.
//! A 401 from any endpoint clears the stored session and redirects the
//! browser to `/login`; there is no retry or recovery beyond that.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Application, ApplicationDraft, ApplicationStatus, AuthResponse, Conversation,
    InterviewSchedule, Job, JobDraft, JobStatus, JobType, Message, MessageDraft, Page,
    ProfileUpdate, RegisterRequest, User,
};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Base URL of the backend, baked in at build time. Empty means same-origin
/// relative paths.
#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("JOBDECK_API_URL").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn job_endpoint(job_id: i64) -> String {
    format!("/api/jobs/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn page_query(page: u32, size: u32) -> String {
    format!("?page={page}&size={size}")
}

/// Query string for paginated application listings with an optional
/// status filter.
#[cfg(any(test, feature = "hydrate"))]
fn application_query(page: u32, size: u32, status: Option<ApplicationStatus>) -> String {
    let mut query = page_query(page, size);
    if let Some(status) = status {
        query.push_str("&status=");
        query.push_str(status.as_str());
    }
    query
}

/// Search filters for the public job search endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobSearchParams {
    pub keyword: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub page: u32,
    pub size: u32,
}

impl JobSearchParams {
    /// Render the query string the search endpoint expects. Blank filters
    /// are omitted so the server applies no constraint for them.
    #[cfg(any(test, feature = "hydrate"))]
    fn to_query(&self) -> String {
        let mut query = page_query(self.page, self.size);
        if !self.keyword.trim().is_empty() {
            query.push_str("&keyword=");
            query.push_str(self.keyword.trim());
        }
        if !self.location.trim().is_empty() {
            query.push_str("&location=");
            query.push_str(self.location.trim());
        }
        if let Some(job_type) = self.job_type {
            query.push_str("&jobType=");
            query.push_str(job_type.as_str());
        }
        query
    }
}

/// Build a full-update draft from an existing posting with only the status
/// changed. The update endpoint expects the complete record.
pub fn draft_from_job(job: &Job, status: JobStatus) -> JobDraft {
    JobDraft {
        title: job.title.clone(),
        description: job.description.clone(),
        company_name: job.company_name.clone(),
        location: job.location.clone(),
        job_type: job.job_type,
        experience_level: job.experience_level.unwrap_or_default(),
        salary_min: job.salary_min,
        salary_max: job.salary_max,
        salary_currency: job
            .salary_currency
            .clone()
            .unwrap_or_else(|| "INR".to_owned()),
        requirements: job.requirements.clone(),
        skills: job.skills.clone(),
        application_deadline: job.application_deadline.clone(),
        status: Some(status),
    }
}

/// Error body shape the backend uses for rejected requests.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    validation_errors: Option<Vec<String>>,
}

/// Pick the most specific failure text available from an error response.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: Option<ErrorBody>) -> String {
    if let Some(body) = body {
        if let Some(errors) = body.validation_errors {
            if !errors.is_empty() {
                return errors.join(", ");
            }
        }
        if let Some(message) = body.message {
            if !message.is_empty() {
                return message;
            }
        }
    }
    format!("request failed: {status}")
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Attach the stored bearer token, send, and enforce the forced-logout
/// rule: any 401 clears the session and bounces to `/login`.
#[cfg(feature = "hydrate")]
async fn send(req: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, String> {
    let req = match crate::util::session::token() {
        Some(token) => req.header("Authorization", &bearer_header(&token)),
        None => req,
    };
    let resp = req.send().await.map_err(|e| e.to_string())?;
    guard_unauthorized(&resp)?;
    Ok(resp)
}

/// Same as [`send`] but with a JSON body.
#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize>(
    req: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, String> {
    let req = match crate::util::session::token() {
        Some(token) => req.header("Authorization", &bearer_header(&token)),
        None => req,
    };
    let resp = req
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    guard_unauthorized(&resp)?;
    Ok(resp)
}

#[cfg(feature = "hydrate")]
fn guard_unauthorized(resp: &gloo_net::http::Response) -> Result<(), String> {
    if resp.status() == 401 {
        crate::util::session::clear();
        redirect_to_login();
        return Err("session expired".to_owned());
    }
    Ok(())
}

/// Decode a success body, or extract the backend's failure text.
#[cfg(feature = "hydrate")]
async fn parse_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.json::<ErrorBody>().await.ok();
        return Err(failure_message(resp.status(), body));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Check for success on endpoints whose body we discard.
#[cfg(feature = "hydrate")]
async fn parse_unit(resp: gloo_net::http::Response) -> Result<(), String> {
    if !resp.ok() {
        let body = resp.json::<ErrorBody>().await.ok();
        return Err(failure_message(resp.status(), body));
    }
    Ok(())
}

// =============================================================
// Auth
// =============================================================

/// Authenticate with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = send_json(
            gloo_net::http::Request::post(&api_url("/api/auth/login")),
            &payload,
        )
        .await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(
            gloo_net::http::Request::post(&api_url("/api/auth/register")),
            request,
        )
        .await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

/// Fetch the full record of the current user from `GET /api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_me() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&api_url("/api/auth/me")))
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save profile edits via `PUT /api/auth/me` and return the updated record.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(
            gloo_net::http::Request::put(&api_url("/api/auth/me")),
            update,
        )
        .await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Jobs
// =============================================================

/// Fetch the most recent active postings from `GET /api/jobs/public/latest`.
pub async fn fetch_latest_jobs(limit: u32) -> Option<Vec<Job>> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/jobs/public/latest?limit={limit}"));
        let resp = send(gloo_net::http::Request::get(&url)).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Job>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        None
    }
}

/// Search active postings via `GET /api/jobs/search`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn search_jobs(params: &JobSearchParams) -> Result<Page<Job>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/jobs/search{}", params.to_query()));
        let resp = send(gloo_net::http::Request::get(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err("not available on server".to_owned())
    }
}

/// Fetch one posting via `GET /api/jobs/{id}`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_job(job_id: i64) -> Result<Job, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&api_url(&job_endpoint(job_id)))).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in employer's postings via
/// `GET /api/jobs/employer/my-jobs`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_my_jobs(page: u32, size: u32) -> Result<Page<Job>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!(
            "/api/jobs/employer/my-jobs{}",
            page_query(page, size)
        ));
        let resp = send(gloo_net::http::Request::get(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size);
        Err("not available on server".to_owned())
    }
}

/// Create a posting via `POST /api/jobs`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn create_job(draft: &JobDraft) -> Result<Job, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(gloo_net::http::Request::post(&api_url("/api/jobs")), draft).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Update a posting via `PUT /api/jobs/{id}`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn update_job(job_id: i64, draft: &JobDraft) -> Result<Job, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(
            gloo_net::http::Request::put(&api_url(&job_endpoint(job_id))),
            draft,
        )
        .await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (job_id, draft);
        Err("not available on server".to_owned())
    }
}

/// Known locations for search suggestions, from
/// `GET /api/jobs/public/locations`.
pub async fn fetch_locations() -> Option<Vec<String>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&api_url(
            "/api/jobs/public/locations",
        )))
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<String>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Known skill tags for form suggestions, from `GET /api/jobs/public/skills`.
pub async fn fetch_skills() -> Option<Vec<String>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&api_url(
            "/api/jobs/public/skills",
        )))
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<String>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

// =============================================================
// Favorites
// =============================================================

/// Fetch the seeker's saved jobs via `GET /api/jobs/favorites`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_favorites(page: u32, size: u32) -> Result<Page<Job>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/jobs/favorites{}", page_query(page, size)));
        let resp = send(gloo_net::http::Request::get(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size);
        Err("not available on server".to_owned())
    }
}

/// Save a job via `POST /api/jobs/favorites/{jobId}`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn add_favorite(job_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/jobs/favorites/{job_id}"));
        let resp = send(gloo_net::http::Request::post(&url)).await?;
        parse_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err("not available on server".to_owned())
    }
}

/// Remove a saved job via `DELETE /api/jobs/favorites/{jobId}`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn remove_favorite(job_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/jobs/favorites/{job_id}"));
        let resp = send(gloo_net::http::Request::delete(&url)).await?;
        parse_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err("not available on server".to_owned())
    }
}

/// Whether the signed-in seeker has saved a job, from
/// `GET /api/jobs/favorites/{jobId}/status`.
pub async fn fetch_favorite_status(job_id: i64) -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/jobs/favorites/{job_id}/status"));
        let resp = send(gloo_net::http::Request::get(&url)).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<bool>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        None
    }
}

// =============================================================
// Applications
// =============================================================

/// Submit an application via `POST /api/applications`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn apply(draft: &ApplicationDraft) -> Result<Application, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(
            gloo_net::http::Request::post(&api_url("/api/applications")),
            draft,
        )
        .await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Fetch the seeker's applications via
/// `GET /api/applications/my-applications`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_my_applications(
    page: u32,
    size: u32,
    status: Option<ApplicationStatus>,
) -> Result<Page<Application>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!(
            "/api/applications/my-applications{}",
            application_query(page, size, status)
        ));
        let resp = send(gloo_net::http::Request::get(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size, status);
        Err("not available on server".to_owned())
    }
}

/// Fetch applications across all of the employer's postings via
/// `GET /api/applications/employer/applications`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_employer_applications(
    page: u32,
    size: u32,
    status: Option<ApplicationStatus>,
) -> Result<Page<Application>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!(
            "/api/applications/employer/applications{}",
            application_query(page, size, status)
        ));
        let resp = send(gloo_net::http::Request::get(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, size, status);
        Err("not available on server".to_owned())
    }
}

/// Fetch applications for one posting via `GET /api/applications/job/{id}`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_job_applications(
    job_id: i64,
    page: u32,
    size: u32,
    status: Option<ApplicationStatus>,
) -> Result<Page<Application>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!(
            "/api/applications/job/{job_id}{}",
            application_query(page, size, status)
        ));
        let resp = send(gloo_net::http::Request::get(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (job_id, page, size, status);
        Err("not available on server".to_owned())
    }
}

/// Request a status change via `PUT /api/applications/{id}/status`. The
/// server owns the lifecycle and may reject the transition.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn update_application_status(
    application_id: i64,
    status: ApplicationStatus,
) -> Result<Application, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/applications/{application_id}/status"));
        let payload = serde_json::json!({ "status": status.as_str() });
        let resp = send_json(gloo_net::http::Request::put(&url), &payload).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (application_id, status);
        Err("not available on server".to_owned())
    }
}

/// Withdraw an application via `DELETE /api/applications/{id}/withdraw`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn withdraw_application(application_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/applications/{application_id}/withdraw"));
        let resp = send(gloo_net::http::Request::delete(&url)).await?;
        parse_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = application_id;
        Err("not available on server".to_owned())
    }
}

/// Whether the signed-in seeker already applied to a posting, from
/// `GET /api/applications/check/{jobId}`.
pub async fn check_applied(job_id: i64) -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/applications/check/{job_id}"));
        let resp = send(gloo_net::http::Request::get(&url)).await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<bool>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        None
    }
}

/// Forward interview details to the applicant via
/// `POST /api/applications/{id}/send-interview-email`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn send_interview_email(
    application_id: i64,
    schedule: &InterviewSchedule,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!(
            "/api/applications/{application_id}/send-interview-email"
        ));
        let resp = send_json(gloo_net::http::Request::post(&url), schedule).await?;
        parse_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (application_id, schedule);
        Err("not available on server".to_owned())
    }
}

/// Notify the applicant of acceptance via
/// `POST /api/applications/{id}/send-selection-email`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn send_selection_email(application_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!(
            "/api/applications/{application_id}/send-selection-email"
        ));
        let resp = send_json(
            gloo_net::http::Request::post(&url),
            &serde_json::json!({}),
        )
        .await?;
        parse_unit(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = application_id;
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Messages
// =============================================================

/// Fetch the signed-in user's inbox via `GET /api/messages/conversations`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_conversations() -> Result<Vec<Conversation>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&api_url(
            "/api/messages/conversations",
        )))
        .await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the message history with one partner via
/// `GET /api/messages/conversation/{partnerId}`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn fetch_conversation_messages(partner_id: i64) -> Result<Vec<Message>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/messages/conversation/{partner_id}"));
        let resp = send(gloo_net::http::Request::get(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = partner_id;
        Err("not available on server".to_owned())
    }
}

/// Open (or fetch) a conversation with a user via
/// `POST /api/messages/conversations/{userId}`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn start_conversation(user_id: i64) -> Result<Conversation, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/messages/conversations/{user_id}"));
        let resp = send(gloo_net::http::Request::post(&url)).await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Send a message via `POST /api/messages`.
///
/// # Errors
///
/// Returns the backend's failure text, or a generic status message.
pub async fn send_message(draft: &MessageDraft) -> Result<Message, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send_json(
            gloo_net::http::Request::post(&api_url("/api/messages")),
            draft,
        )
        .await?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}

/// Mark all messages from a sender as read via
/// `POST /api/messages/mark-read/{senderId}`.
pub async fn mark_read(sender_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/api/messages/mark-read/{sender_id}"));
        let _ = send(gloo_net::http::Request::post(&url)).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = sender_id;
    }
}

/// Total unread messages for the navbar badge, from
/// `GET /api/messages/unread-count`.
pub async fn fetch_unread_count() -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&api_url(
            "/api/messages/unread-count",
        )))
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<i64>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
