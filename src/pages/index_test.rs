use super::*;
use crate::state::auth::Session;

#[test]
fn initial_restore_window_shows_the_spinner() {
    let state = AuthState::default();
    assert_eq!(choose_view(&state), ViewChoice::Loading);
}

#[test]
fn signed_out_visitors_get_the_login_form() {
    let state = AuthState { session: None, loading: false };
    assert_eq!(choose_view(&state), ViewChoice::Login);
}

#[test]
fn a_session_selects_the_shell() {
    let state = AuthState {
        session: Some(Session::mock("agent@company.com")),
        loading: false,
    };
    assert_eq!(choose_view(&state), ViewChoice::Shell);
}

#[test]
fn a_restored_session_wins_even_mid_load() {
    // Restore found a session before loading was cleared; show the shell.
    let state = AuthState {
        session: Some(Session::mock("admin@company.com")),
        loading: true,
    };
    assert_eq!(choose_view(&state), ViewChoice::Shell);
}
