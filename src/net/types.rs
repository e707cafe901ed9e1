//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON verbatim (camelCase fields,
//! SCREAMING_SNAKE_CASE enums) so serde round-trips stay lossless. The
//! client never owns or validates these records; it renders what the
//! server sends and echoes edits back.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The two user roles distinguishing available actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "JOB_SEEKER")]
    JobSeeker,
    #[serde(rename = "EMPLOYER")]
    Employer,
}

/// An authenticated user record as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Login/registration response carrying the bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub message: Option<String>,
}

/// Employment type of a posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Remote,
    Hybrid,
}

impl JobType {
    /// Human-readable label for badges and dropdowns.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
        }
    }

    /// The wire value, for query strings and form `<option>` values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "FULL_TIME",
            Self::PartTime => "PART_TIME",
            Self::Contract => "CONTRACT",
            Self::Internship => "INTERNSHIP",
            Self::Remote => "REMOTE",
            Self::Hybrid => "HYBRID",
        }
    }

    /// All variants, in dropdown order.
    pub fn all() -> [Self; 6] {
        [
            Self::FullTime,
            Self::PartTime,
            Self::Contract,
            Self::Internship,
            Self::Remote,
            Self::Hybrid,
        ]
    }

    /// Parse a wire value, e.g. from a `<select>` or query string.
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|jt| jt.as_str() == value)
    }
}

/// Seniority band of a posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    Executive,
}

impl ExperienceLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry Level",
            Self::Junior => "Junior",
            Self::Mid => "Mid Level",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
            Self::Executive => "Executive",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "ENTRY",
            Self::Junior => "JUNIOR",
            Self::Mid => "MID",
            Self::Senior => "SENIOR",
            Self::Lead => "LEAD",
            Self::Executive => "EXECUTIVE",
        }
    }

    pub fn all() -> [Self; 6] {
        [
            Self::Entry,
            Self::Junior,
            Self::Mid,
            Self::Senior,
            Self::Lead,
            Self::Executive,
        ]
    }

    /// Parse a wire value, e.g. from a `<select>` or query string.
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|lvl| lvl.as_str() == value)
    }
}

/// Posting lifecycle state, owned by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Active,
    Inactive,
    Closed,
    Draft,
}

impl JobStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Closed => "Closed",
            Self::Draft => "Draft",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Closed => "CLOSED",
            Self::Draft => "DRAFT",
        }
    }

    /// Statuses an employer can pick when editing a posting.
    pub fn editable() -> [Self; 3] {
        [Self::Active, Self::Closed, Self::Draft]
    }

    /// Parse a wire value, e.g. from the edit form's `<select>`.
    pub fn parse(value: &str) -> Option<Self> {
        [Self::Active, Self::Inactive, Self::Closed, Self::Draft]
            .into_iter()
            .find(|s| s.as_str() == value)
    }
}

/// A job posting as represented on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub job_type: JobType,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub employer_id: Option<i64>,
    pub status: JobStatus,
    #[serde(default)]
    pub application_deadline: Option<String>,
    #[serde(default)]
    pub views_count: Option<i32>,
    #[serde(default)]
    pub applications_count: Option<i32>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Whether the requesting seeker has saved this job; absent for
    /// anonymous requests.
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

/// Payload for creating or updating a posting.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: String,
    pub requirements: Option<String>,
    pub skills: Vec<String>,
    pub application_deadline: Option<String>,
    /// Only sent when editing; omitted on create so the server assigns
    /// the initial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl Default for JobType {
    fn default() -> Self {
        Self::FullTime
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        Self::Mid
    }
}

/// Application lifecycle label, displayed and requested to change but never
/// enforced locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Interview,
    Accepted,
    Offered,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Shortlisted => "Shortlisted",
            Self::Interview => "Interview",
            Self::Accepted => "Accepted",
            Self::Offered => "Offered",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Reviewed => "REVIEWED",
            Self::Shortlisted => "SHORTLISTED",
            Self::Interview => "INTERVIEW",
            Self::Accepted => "ACCEPTED",
            Self::Offered => "OFFERED",
            Self::Rejected => "REJECTED",
            Self::Withdrawn => "WITHDRAWN",
        }
    }

    /// All variants, in filter-dropdown order.
    pub fn all() -> [Self; 8] {
        [
            Self::Pending,
            Self::Reviewed,
            Self::Shortlisted,
            Self::Interview,
            Self::Offered,
            Self::Accepted,
            Self::Rejected,
            Self::Withdrawn,
        ]
    }

    /// Parse a wire value, e.g. from a filter `<select>`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.as_str() == value)
    }
}

/// A job application as represented on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub applicant_id: i64,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_email: Option<String>,
    #[serde(default)]
    pub employer_id: Option<i64>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub applied_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for submitting an application to a posting.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDraft {
    pub job_id: i64,
    pub cover_letter: String,
    pub resume_url: String,
}

/// Interview details forwarded to the applicant by email.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSchedule {
    pub interview_date: String,
    pub interview_time: String,
    /// "Online", "In-Person" or "Phone".
    pub interview_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// One inbox row: the other participant plus last-message preview.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub partner_id: i64,
    pub partner_name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_time: Option<String>,
    #[serde(default)]
    pub unread_count: i64,
}

/// A chat message between two users.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    #[serde(default)]
    pub sender_name: Option<String>,
    pub receiver_id: i64,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub application_id: Option<i64>,
    #[serde(default)]
    pub job_id: Option<i64>,
    pub content: String,
    #[serde(default)]
    pub is_read: Option<bool>,
    pub sent_at: String,
}

/// Payload for sending a message.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDraft {
    pub receiver_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<i64>,
    pub content: String,
}

/// The backend's page envelope for every paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
            number: 0,
            size: 0,
        }
    }
}

/// Profile fields the profile page may edit; email is server-owned.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Payload for registering a new account.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}
