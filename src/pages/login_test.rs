use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(
        validate_credentials("", "secret"),
        Err("Enter your email and password.")
    );
    assert_eq!(
        validate_credentials("user@example.com", ""),
        Err("Enter your email and password.")
    );
    assert_eq!(validate_credentials("   ", "x"), Err("Enter your email and password."));
}

#[test]
fn destination_prefers_guarded_origin() {
    assert_eq!(
        post_login_destination(Some("/messages"), Role::JobSeeker),
        "/messages"
    );
}

#[test]
fn destination_falls_back_to_role_dashboard() {
    assert_eq!(post_login_destination(None, Role::Employer), "/employer/dashboard");
    assert_eq!(post_login_destination(None, Role::JobSeeker), "/seeker/dashboard");
    // Unsafe or external origins are ignored.
    assert_eq!(
        post_login_destination(Some("https://evil.example"), Role::JobSeeker),
        "/seeker/dashboard"
    );
}
