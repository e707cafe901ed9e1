use super::*;

#[test]
fn application_status_classes_follow_wire_value() {
    assert_eq!(
        application_status_class(ApplicationStatus::Pending),
        "status-badge status-badge--pending"
    );
    assert_eq!(
        application_status_class(ApplicationStatus::Shortlisted),
        "status-badge status-badge--shortlisted"
    );
    assert_eq!(
        application_status_class(ApplicationStatus::Withdrawn),
        "status-badge status-badge--withdrawn"
    );
}

#[test]
fn job_status_classes_follow_wire_value() {
    assert_eq!(job_status_class(JobStatus::Active), "status-badge status-badge--active");
    assert_eq!(job_status_class(JobStatus::Draft), "status-badge status-badge--draft");
}
