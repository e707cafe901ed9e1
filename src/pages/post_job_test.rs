use super::*;

fn valid_form() -> JobForm {
    JobForm {
        title: "Senior Rust Engineer".to_owned(),
        company_name: "Acme".to_owned(),
        location: "Pune".to_owned(),
        job_type: "REMOTE".to_owned(),
        experience_level: "SENIOR".to_owned(),
        status: "ACTIVE".to_owned(),
        deadline: String::new(),
        salary_min: "500000".to_owned(),
        salary_max: String::new(),
        description: "Build and operate the storage layer powering our job platform at scale."
            .to_owned(),
        requirements: String::new(),
        skills: "rust, tokio".to_owned(),
    }
}

#[test]
fn valid_form_builds_draft() {
    let draft = build_draft(&valid_form(), false).unwrap();
    assert_eq!(draft.title, "Senior Rust Engineer");
    assert_eq!(draft.job_type, JobType::Remote);
    assert_eq!(draft.experience_level, ExperienceLevel::Senior);
    assert_eq!(draft.salary_min, Some(500_000.0));
    assert_eq!(draft.salary_max, None);
    assert_eq!(draft.salary_currency, "INR");
    assert_eq!(draft.skills, vec!["rust".to_owned(), "tokio".to_owned()]);
    assert_eq!(draft.requirements, None);
    // Creating never sends a status.
    assert_eq!(draft.status, None);
}

#[test]
fn editing_includes_status() {
    let draft = build_draft(&valid_form(), true).unwrap();
    assert_eq!(draft.status, Some(JobStatus::Active));
}

#[test]
fn title_is_required_and_min_length() {
    let form = JobForm {
        title: "  ".to_owned(),
        ..valid_form()
    };
    assert_eq!(build_draft(&form, false), Err("Job title is required."));

    let form = JobForm {
        title: "ab".to_owned(),
        ..valid_form()
    };
    assert_eq!(
        build_draft(&form, false),
        Err("Job title must be at least 3 characters.")
    );
}

#[test]
fn description_is_required_and_min_length() {
    let form = JobForm {
        description: String::new(),
        ..valid_form()
    };
    assert_eq!(build_draft(&form, false), Err("Job description is required."));

    let form = JobForm {
        description: "too short".to_owned(),
        ..valid_form()
    };
    assert_eq!(
        build_draft(&form, false),
        Err("Job description must be at least 50 characters.")
    );
}

#[test]
fn location_and_company_are_required() {
    let form = JobForm {
        location: " ".to_owned(),
        ..valid_form()
    };
    assert_eq!(build_draft(&form, false), Err("Location is required."));

    let form = JobForm {
        company_name: String::new(),
        ..valid_form()
    };
    assert_eq!(build_draft(&form, false), Err("Company name is required."));
}

#[test]
fn bad_salary_is_rejected() {
    let form = JobForm {
        salary_min: "five lakh".to_owned(),
        ..valid_form()
    };
    assert_eq!(
        build_draft(&form, false),
        Err("Enter salary amounts as plain numbers.")
    );
}

#[test]
fn deadline_gains_seconds_suffix() {
    let form = JobForm {
        deadline: "2025-12-01T18:30".to_owned(),
        ..valid_form()
    };
    let draft = build_draft(&form, false).unwrap();
    assert_eq!(
        draft.application_deadline.as_deref(),
        Some("2025-12-01T18:30:00")
    );
}

#[test]
fn unknown_selects_fall_back_to_defaults() {
    let form = JobForm {
        job_type: String::new(),
        experience_level: String::new(),
        ..valid_form()
    };
    let draft = build_draft(&form, false).unwrap();
    assert_eq!(draft.job_type, JobType::FullTime);
    assert_eq!(draft.experience_level, ExperienceLevel::Mid);
}
