use super::*;

// =============================================================
// Enum wire values
// =============================================================

#[test]
fn role_serializes_to_screaming_snake() {
    assert_eq!(serde_json::to_string(&Role::JobSeeker).unwrap(), "\"JOB_SEEKER\"");
    assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"EMPLOYER\"");
}

#[test]
fn job_type_round_trips_wire_values() {
    for jt in JobType::all() {
        let json = serde_json::to_string(&jt).unwrap();
        assert_eq!(json, format!("\"{}\"", jt.as_str()));
        let back: JobType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, jt);
    }
}

#[test]
fn experience_level_round_trips_wire_values() {
    for lvl in ExperienceLevel::all() {
        let json = serde_json::to_string(&lvl).unwrap();
        assert_eq!(json, format!("\"{}\"", lvl.as_str()));
        let back: ExperienceLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lvl);
    }
}

#[test]
fn application_status_round_trips_wire_values() {
    for status in ApplicationStatus::all() {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.as_str()));
        let back: ApplicationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn job_status_wire_values() {
    assert_eq!(serde_json::to_string(&JobStatus::Active).unwrap(), "\"ACTIVE\"");
    assert_eq!(serde_json::to_string(&JobStatus::Inactive).unwrap(), "\"INACTIVE\"");
    assert_eq!(serde_json::to_string(&JobStatus::Draft).unwrap(), "\"DRAFT\"");
    assert_eq!(serde_json::to_string(&JobStatus::Closed).unwrap(), "\"CLOSED\"");
}

#[test]
fn job_type_labels_are_human_readable() {
    assert_eq!(JobType::FullTime.label(), "Full Time");
    assert_eq!(JobType::Internship.label(), "Internship");
    assert_eq!(ExperienceLevel::Entry.label(), "Entry Level");
    assert_eq!(ApplicationStatus::Shortlisted.label(), "Shortlisted");
}

// =============================================================
// Record field names (camelCase)
// =============================================================

#[test]
fn job_deserializes_backend_camel_case() {
    let raw = r#"{
        "id": 7,
        "title": "Platform Engineer",
        "description": "Build things.",
        "companyName": "Acme",
        "location": "Pune",
        "jobType": "FULL_TIME",
        "experienceLevel": "SENIOR",
        "salaryMin": 1500000,
        "salaryMax": 2500000,
        "salaryCurrency": "INR",
        "skills": ["rust", "postgres"],
        "status": "ACTIVE",
        "applicationDeadline": "2025-12-01T00:00:00",
        "createdAt": "2025-06-01T09:30:00",
        "isFavorite": true
    }"#;
    let job: Job = serde_json::from_str(raw).unwrap();
    assert_eq!(job.company_name, "Acme");
    assert_eq!(job.job_type, JobType::FullTime);
    assert_eq!(job.experience_level, Some(ExperienceLevel::Senior));
    assert_eq!(job.salary_min, Some(1_500_000.0));
    assert_eq!(job.skills.len(), 2);
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.is_favorite, Some(true));
}

#[test]
fn job_tolerates_missing_optional_fields() {
    let raw = r#"{
        "id": 1,
        "title": "T",
        "description": "D",
        "companyName": "C",
        "location": "L",
        "jobType": "REMOTE",
        "status": "DRAFT",
        "createdAt": "2025-01-01T00:00:00"
    }"#;
    let job: Job = serde_json::from_str(raw).unwrap();
    assert_eq!(job.salary_min, None);
    assert!(job.skills.is_empty());
    assert_eq!(job.is_favorite, None);
}

#[test]
fn application_deserializes_backend_camel_case() {
    let raw = r#"{
        "id": 3,
        "jobId": 7,
        "jobTitle": "Platform Engineer",
        "companyName": "Acme",
        "applicantId": 11,
        "applicantName": "Priya",
        "applicantEmail": "priya@example.com",
        "coverLetter": "Hello",
        "status": "PENDING",
        "appliedAt": "2025-06-02T10:00:00"
    }"#;
    let app: Application = serde_json::from_str(raw).unwrap();
    assert_eq!(app.job_id, 7);
    assert_eq!(app.applicant_name.as_deref(), Some("Priya"));
    assert_eq!(app.status, ApplicationStatus::Pending);
}

#[test]
fn auth_response_deserializes_token_fields() {
    let raw = r#"{
        "token": "abc.def.ghi",
        "tokenType": "Bearer",
        "userId": 42,
        "name": "Ravi",
        "email": "ravi@example.com",
        "role": "EMPLOYER"
    }"#;
    let auth: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(auth.token, "abc.def.ghi");
    assert_eq!(auth.user_id, 42);
    assert_eq!(auth.role, Role::Employer);
}

#[test]
fn conversation_defaults_unread_to_zero() {
    let raw = r#"{ "partnerId": 5, "partnerName": "Asha" }"#;
    let conv: Conversation = serde_json::from_str(raw).unwrap();
    assert_eq!(conv.unread_count, 0);
    assert_eq!(conv.last_message, None);
}

#[test]
fn page_envelope_deserializes_spring_shape() {
    let raw = r#"{
        "content": [{ "partnerId": 5, "partnerName": "Asha" }],
        "totalPages": 3,
        "totalElements": 25,
        "number": 0,
        "size": 10
    }"#;
    let page: Page<Conversation> = serde_json::from_str(raw).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_elements, 25);
}

#[test]
fn page_default_is_empty() {
    let page: Page<Job> = Page::default();
    assert!(page.content.is_empty());
    assert_eq!(page.total_pages, 0);
}

// =============================================================
// Request payload shapes
// =============================================================

#[test]
fn job_draft_create_omits_status() {
    let draft = JobDraft {
        title: "T".to_owned(),
        description: "D".to_owned(),
        company_name: "C".to_owned(),
        location: "L".to_owned(),
        salary_currency: "INR".to_owned(),
        ..JobDraft::default()
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert!(json.get("status").is_none());
    assert_eq!(json["jobType"], "FULL_TIME");
    assert_eq!(json["experienceLevel"], "MID");
}

#[test]
fn job_draft_edit_includes_status() {
    let draft = JobDraft {
        status: Some(JobStatus::Inactive),
        salary_currency: "INR".to_owned(),
        ..JobDraft::default()
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["status"], "INACTIVE");
}

#[test]
fn register_request_skips_absent_company() {
    let req = RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.c".to_owned(),
        password: "secret1".to_owned(),
        role: Role::JobSeeker,
        company_name: None,
        phone_number: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("companyName").is_none());
    assert_eq!(json["role"], "JOB_SEEKER");
}

#[test]
fn message_draft_serializes_receiver() {
    let draft = MessageDraft {
        receiver_id: 9,
        application_id: None,
        job_id: None,
        content: "hi".to_owned(),
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["receiverId"], 9);
    assert!(json.get("applicationId").is_none());
}

#[test]
fn interview_schedule_serializes_camel_case() {
    let sched = InterviewSchedule {
        interview_date: "2025-07-01".to_owned(),
        interview_time: "14:30".to_owned(),
        interview_type: "Online".to_owned(),
        interview_link: Some("https://meet.example.com/x".to_owned()),
        additional_notes: None,
    };
    let json = serde_json::to_value(&sched).unwrap();
    assert_eq!(json["interviewDate"], "2025-07-01");
    assert_eq!(json["interviewType"], "Online");
    assert!(json.get("additionalNotes").is_none());
}
