use super::*;

#[test]
fn only_pending_applications_can_be_withdrawn() {
    assert!(can_withdraw(ApplicationStatus::Pending));
    for status in [
        ApplicationStatus::Reviewed,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Interview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Offered,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ] {
        assert!(!can_withdraw(status), "{status:?} should not be withdrawable");
    }
}
