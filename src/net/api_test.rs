use super::*;

#[test]
fn api_url_defaults_to_same_origin() {
    assert_eq!(api_url("/api/auth/me"), "/api/auth/me");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn job_endpoint_formats_expected_path() {
    assert_eq!(job_endpoint(42), "/api/jobs/42");
}

#[test]
fn page_query_formats_page_and_size() {
    assert_eq!(page_query(0, 10), "?page=0&size=10");
    assert_eq!(page_query(3, 5), "?page=3&size=5");
}

#[test]
fn application_query_without_status() {
    assert_eq!(application_query(1, 10, None), "?page=1&size=10");
}

#[test]
fn application_query_appends_status_filter() {
    assert_eq!(
        application_query(0, 10, Some(ApplicationStatus::Shortlisted)),
        "?page=0&size=10&status=SHORTLISTED"
    );
}

#[test]
fn search_query_omits_blank_filters() {
    let params = JobSearchParams {
        page: 0,
        size: 10,
        ..JobSearchParams::default()
    };
    assert_eq!(params.to_query(), "?page=0&size=10");
}

#[test]
fn search_query_includes_trimmed_filters() {
    let params = JobSearchParams {
        keyword: "  rust engineer ".to_owned(),
        location: "Bengaluru".to_owned(),
        job_type: Some(JobType::Remote),
        page: 2,
        size: 10,
    };
    assert_eq!(
        params.to_query(),
        "?page=2&size=10&keyword=rust engineer&location=Bengaluru&jobType=REMOTE"
    );
}

#[test]
fn failure_message_prefers_validation_errors() {
    let body = ErrorBody {
        message: Some("Bad request".to_owned()),
        validation_errors: Some(vec!["title required".to_owned(), "salary invalid".to_owned()]),
    };
    assert_eq!(failure_message(400, Some(body)), "title required, salary invalid");
}

#[test]
fn failure_message_falls_back_to_message() {
    let body = ErrorBody {
        message: Some("Email already registered".to_owned()),
        validation_errors: None,
    };
    assert_eq!(failure_message(409, Some(body)), "Email already registered");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(500, None), "request failed: 500");
    let empty = ErrorBody {
        message: None,
        validation_errors: Some(Vec::new()),
    };
    assert_eq!(failure_message(502, Some(empty)), "request failed: 502");
}

#[test]
fn draft_from_job_preserves_fields_and_sets_status() {
    let job = crate::net::types::Job {
        id: 9,
        title: "Backend Engineer".to_owned(),
        description: "desc".to_owned(),
        company_name: "Acme".to_owned(),
        location: "Pune".to_owned(),
        job_type: JobType::Hybrid,
        experience_level: Some(crate::net::types::ExperienceLevel::Lead),
        salary_min: Some(100.0),
        salary_max: None,
        salary_currency: None,
        skills: vec!["rust".to_owned()],
        requirements: Some("reqs".to_owned()),
        benefits: None,
        employer_id: Some(1),
        status: crate::net::types::JobStatus::Active,
        application_deadline: None,
        views_count: None,
        applications_count: None,
        created_at: "2025-01-01T00:00:00".to_owned(),
        updated_at: None,
        is_favorite: None,
    };
    let draft = draft_from_job(&job, crate::net::types::JobStatus::Inactive);
    assert_eq!(draft.title, "Backend Engineer");
    assert_eq!(draft.job_type, JobType::Hybrid);
    assert_eq!(draft.status, Some(crate::net::types::JobStatus::Inactive));
    // Missing currency falls back to the backend default.
    assert_eq!(draft.salary_currency, "INR");
    assert_eq!(draft.skills, vec!["rust".to_owned()]);
}
