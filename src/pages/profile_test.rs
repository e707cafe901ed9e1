use super::*;

#[test]
fn name_is_required() {
    assert_eq!(
        build_update("  ", "", "", "", false),
        Err("Name cannot be empty.")
    );
}

#[test]
fn blank_optionals_are_dropped() {
    let update = build_update("Priya", " ", "", "  ", false).unwrap();
    assert_eq!(update.name, "Priya");
    assert_eq!(update.phone_number, None);
    assert_eq!(update.company_name, None);
    assert_eq!(update.bio, None);
}

#[test]
fn company_only_sent_for_employers() {
    let update = build_update("Ravi", "98765", "Acme", "Hiring.", true).unwrap();
    assert_eq!(update.company_name.as_deref(), Some("Acme"));

    let update = build_update("Priya", "", "Acme", "", false).unwrap();
    assert_eq!(update.company_name, None);
}

#[test]
fn fields_are_trimmed() {
    let update = build_update(" Ravi ", " 98765 ", " Acme ", " Hi ", true).unwrap();
    assert_eq!(update.name, "Ravi");
    assert_eq!(update.phone_number.as_deref(), Some("98765"));
    assert_eq!(update.company_name.as_deref(), Some("Acme"));
    assert_eq!(update.bio.as_deref(), Some("Hi"));
}
