use super::*;
use crate::state::auth::Session;

#[test]
fn identity_line_shows_name_and_role_label() {
    let state = AuthState {
        session: Some(Session::mock("admin@company.com")),
        loading: false,
    };
    assert_eq!(identity_line(&state), Some(("Admin User".to_owned(), "admin")));
}

#[test]
fn identity_line_uses_agent_label_for_field_agents() {
    let state = AuthState {
        session: Some(Session::mock("agent@company.com")),
        loading: false,
    };
    assert_eq!(identity_line(&state), Some(("Field Agent".to_owned(), "agent")));
}

#[test]
fn identity_line_empty_when_signed_out() {
    let state = AuthState { session: None, loading: false };
    assert_eq!(identity_line(&state), None);
}
