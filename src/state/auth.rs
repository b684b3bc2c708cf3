//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and role-dependent rendering. The session record mirrors the
//! layout persisted to localStorage, so serde round-trips stay lossless.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Coarse authorization category gating which views are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Back-office administrator: sees the data-management tables.
    #[serde(rename = "admin")]
    Administrator,
    /// Field agent: sees the assigned-customers view on the dashboard.
    #[serde(rename = "agent")]
    FieldAgent,
}

impl Role {
    /// Short label used in the shell chrome next to the user's name.
    pub fn label(self) -> &'static str {
        match self {
            Role::Administrator => "admin",
            Role::FieldAgent => "agent",
        }
    }
}

/// The authenticated-user record held for the duration of a browser visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user identifier.
    pub id: String,
    /// Email the user signed in with.
    pub email: String,
    /// Authorization role derived at login time.
    pub role: Role,
    /// Display name shown in the shell and dashboard greeting.
    pub name: String,
}

impl Session {
    /// Fabricate a session record from an email address.
    ///
    /// Stand-in for a real credential lookup: the role is selected by a
    /// case-sensitive `"admin"` substring test on the email, and the
    /// display name follows from the role. Any caller-supplied password
    /// has already been checked for presence only.
    pub fn mock(email: &str) -> Session {
        let is_admin = email.contains("admin");
        Session {
            id: "1".to_owned(),
            email: email.to_owned(),
            role: if is_admin { Role::Administrator } else { Role::FieldAgent },
            name: if is_admin { "Admin User" } else { "Field Agent" }.to_owned(),
        }
    }
}

/// Lifecycle phase of the auth gate, derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// No session; login form should be shown.
    Unauthenticated,
    /// A login or the one-time storage restore is in flight.
    Authenticating,
    /// A session is active.
    Authenticated,
}

/// Authentication state tracking the current session and loading status.
///
/// Shared via Leptos context as `RwSignal<AuthState>`. Starts with
/// `loading` set so routes hold on a spinner until the one-time
/// restore-from-storage check has run.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        if self.session.is_some() {
            AuthPhase::Authenticated
        } else if self.loading {
            AuthPhase::Authenticating
        } else {
            AuthPhase::Unauthenticated
        }
    }
}
