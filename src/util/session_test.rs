use super::*;
use crate::net::types::Role;

// Outside a browser the storage helpers must behave as an absent session
// rather than panic; the SSR render path relies on this.

#[test]
fn token_absent_without_browser_storage() {
    assert_eq!(token(), None);
}

#[test]
fn load_user_absent_without_browser_storage() {
    assert!(load_user().is_none());
}

#[test]
fn store_and_clear_are_inert_without_browser_storage() {
    let user = SessionUser {
        user_id: 1,
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role: Role::JobSeeker,
    };
    store("tok", &user);
    update_user(&user);
    clear();
    assert_eq!(token(), None);
}
