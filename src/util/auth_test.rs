use super::*;
use crate::state::auth::{AuthState, Role, Session};
use crate::util::session_store::MemorySessionStore;

#[test]
fn validate_credentials_trims_and_accepts_non_empty_pair() {
    assert_eq!(
        validate_credentials("  agent@company.com  ", "secret"),
        Ok("agent@company.com".to_owned())
    );
}

#[test]
fn validate_credentials_rejects_empty_email() {
    assert_eq!(validate_credentials("", "x"), Err("Please fill in all fields"));
    assert_eq!(validate_credentials("   ", "x"), Err("Please fill in all fields"));
}

#[test]
fn validate_credentials_rejects_empty_password() {
    assert_eq!(validate_credentials("x@y.com", ""), Err("Please fill in all fields"));
}

#[test]
fn login_attempt_persists_the_session_it_returns() {
    let store = MemorySessionStore::default();
    let session = login_attempt(&store, "admin@company.com", "any").unwrap();
    assert_eq!(store.load(), Some(session.clone()));
    assert_eq!(session.role, Role::Administrator);
}

#[test]
fn login_attempt_accepts_any_non_empty_password() {
    let store = MemorySessionStore::default();
    let session = login_attempt(&store, "agent@company.com", "x").unwrap();
    assert_eq!(session.role, Role::FieldAgent);
    assert_eq!(session.name, "Field Agent");
}

#[test]
fn login_attempt_with_empty_email_writes_nothing() {
    let store = MemorySessionStore::default();
    assert_eq!(login_attempt(&store, "", "x"), None);
    assert!(!store.is_populated());
}

#[test]
fn login_attempt_with_empty_password_writes_nothing() {
    let store = MemorySessionStore::default();
    assert_eq!(login_attempt(&store, "x@y.com", ""), None);
    assert!(!store.is_populated());
}

#[test]
fn should_redirect_unauth_when_loaded_and_no_session() {
    let state = AuthState { session: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { session: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState {
        session: Some(Session::mock("agent@company.com")),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn admin_redirect_applies_to_field_agents() {
    let state = AuthState {
        session: Some(Session::mock("agent@company.com")),
        loading: false,
    };
    assert!(should_redirect_non_admin(&state));
}

#[test]
fn admin_redirect_applies_when_signed_out() {
    let state = AuthState { session: None, loading: false };
    assert!(should_redirect_non_admin(&state));
}

#[test]
fn admin_redirect_skips_administrators_and_loading() {
    let admin = AuthState {
        session: Some(Session::mock("admin@company.com")),
        loading: false,
    };
    assert!(!should_redirect_non_admin(&admin));
    let loading = AuthState { session: None, loading: true };
    assert!(!should_redirect_non_admin(&loading));
}
