//! The auth gate: login, logout, session restore, and route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only state machine in the app. All transitions of the shared
//! `AuthState` signal funnel through this module; views never touch the
//! session store directly.
//!
//! TRADE-OFFS
//! ==========
//! Authentication is a frank mock: any non-empty credential pair is
//! accepted after a fixed simulated delay, and the role comes from the
//! email text. The failure arm of `login` is still honored (validation and
//! overlap refusals return `false`) so the contract survives a future real
//! credential check.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, Role, Session};
use crate::util::session_store::{LocalSessionStore, SessionStore};

/// Check a credential pair before the gate starts authenticating.
///
/// The gate performs presence checks only; there is no format validation.
/// Returns the trimmed email on success.
pub fn validate_credentials(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok(email.to_owned())
}

/// Run one login attempt against a store: validate, fabricate the session,
/// persist it. `None` means the attempt was refused and nothing was written.
pub fn login_attempt<S: SessionStore>(store: &S, email: &str, password: &str) -> Option<Session> {
    let email = validate_credentials(email, password).ok()?;
    let session = Session::mock(&email);
    store.save(&session);
    Some(session)
}

/// Whether a route should bounce to the login view: auth has finished
/// loading and no session is present.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.session.is_none()
}

/// Whether an administrator-only route should bounce to the dashboard.
pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    if state.loading {
        return false;
    }
    state
        .session
        .as_ref()
        .is_none_or(|session| session.role != Role::Administrator)
}

/// Redirect to `/` whenever auth has loaded and no admin session is present.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_non_admin(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// One-time restore of a previously persisted session.
///
/// Runs before any login; a well-formed stored record moves the gate
/// straight to the authenticated state. Always clears `loading`.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let session = LocalSessionStore.load();
    auth.update(|state| {
        state.session = session;
        state.loading = false;
    });
}

/// Asynchronous login against the browser-backed store.
///
/// Refuses (returns `false`) on empty credentials or when another login is
/// already in flight; neither refusal enters the authenticating state or
/// touches storage. Otherwise suspends behind a fixed simulated network
/// delay and always succeeds, persisting the fabricated session before the
/// shared state observes it.
pub async fn login(auth: RwSignal<AuthState>, email: String, password: String) -> bool {
    if auth.get_untracked().loading {
        return false;
    }
    if validate_credentials(&email, &password).is_err() {
        return false;
    }

    auth.update(|state| state.loading = true);
    simulated_network_delay().await;

    match login_attempt(&LocalSessionStore, &email, &password) {
        Some(session) => {
            auth.update(|state| {
                state.session = Some(session);
                state.loading = false;
            });
            true
        }
        None => {
            auth.update(|state| state.loading = false);
            false
        }
    }
}

/// Synchronous logout: clears the store and the in-memory session.
/// Safe to call repeatedly.
pub fn logout(auth: RwSignal<AuthState>) {
    LocalSessionStore.clear();
    auth.update(|state| {
        state.session = None;
        state.loading = false;
    });
}

// Stands in for a future auth round trip; resolves immediately on the host.
async fn simulated_network_delay() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(1000)).await;
}
