use super::*;

#[test]
fn dashboard_path_by_role() {
    assert_eq!(dashboard_path(Role::Employer), "/employer/dashboard");
    assert_eq!(dashboard_path(Role::JobSeeker), "/seeker/dashboard");
}
