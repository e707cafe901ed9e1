use super::*;

fn seeker_form() -> RegisterForm {
    RegisterForm {
        name: "Priya".to_owned(),
        email: "priya@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        role_employer: false,
        company_name: String::new(),
        phone_number: String::new(),
    }
}

#[test]
fn valid_seeker_form_builds_request() {
    let request = validate_register(&seeker_form()).unwrap();
    assert_eq!(request.role, Role::JobSeeker);
    assert_eq!(request.company_name, None);
    assert_eq!(request.phone_number, None);
}

#[test]
fn rejects_password_mismatch() {
    let form = RegisterForm {
        confirm_password: "different".to_owned(),
        ..seeker_form()
    };
    assert_eq!(validate_register(&form), Err("Passwords do not match."));
}

#[test]
fn rejects_short_password() {
    let form = RegisterForm {
        password: "abc".to_owned(),
        confirm_password: "abc".to_owned(),
        ..seeker_form()
    };
    assert_eq!(
        validate_register(&form),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn employer_requires_company_name() {
    let form = RegisterForm {
        role_employer: true,
        ..seeker_form()
    };
    assert_eq!(validate_register(&form), Err("Enter your company name."));

    let form = RegisterForm {
        role_employer: true,
        company_name: "  Acme  ".to_owned(),
        ..seeker_form()
    };
    let request = validate_register(&form).unwrap();
    assert_eq!(request.role, Role::Employer);
    assert_eq!(request.company_name.as_deref(), Some("Acme"));
}

#[test]
fn seeker_never_sends_company_name() {
    let form = RegisterForm {
        company_name: "Stray".to_owned(),
        ..seeker_form()
    };
    let request = validate_register(&form).unwrap();
    assert_eq!(request.company_name, None);
}

#[test]
fn optional_phone_is_trimmed_or_dropped() {
    let form = RegisterForm {
        phone_number: " 98765 ".to_owned(),
        ..seeker_form()
    };
    let request = validate_register(&form).unwrap();
    assert_eq!(request.phone_number.as_deref(), Some("98765"));
}
