use super::*;

fn seeker() -> SessionUser {
    SessionUser {
        user_id: 11,
        name: "Priya".to_owned(),
        email: "priya@example.com".to_owned(),
        role: Role::JobSeeker,
    }
}

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_employer());
    assert!(!state.is_seeker());
    assert_eq!(state.user_id(), None);
}

#[test]
fn role_helpers_distinguish_roles() {
    let state = AuthState {
        user: Some(seeker()),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert!(state.is_seeker());
    assert!(!state.is_employer());
    assert_eq!(state.user_id(), Some(11));

    let employer = AuthState {
        user: Some(SessionUser {
            role: Role::Employer,
            ..seeker()
        }),
        loading: false,
    };
    assert!(employer.is_employer());
    assert!(!employer.is_seeker());
}

#[test]
fn session_user_projects_auth_response() {
    let auth = AuthResponse {
        token: "jwt".to_owned(),
        token_type: Some("Bearer".to_owned()),
        user_id: 7,
        name: "Ravi".to_owned(),
        email: "ravi@example.com".to_owned(),
        role: Role::Employer,
        message: None,
    };
    let user = SessionUser::from_auth(&auth);
    assert_eq!(user.user_id, 7);
    assert_eq!(user.role, Role::Employer);
    assert_eq!(user.name, "Ravi");
}

#[test]
fn session_user_round_trips_json() {
    let user = seeker();
    let raw = serde_json::to_string(&user).unwrap();
    let back: SessionUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, user);
}
