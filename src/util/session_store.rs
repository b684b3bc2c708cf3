//! Durable persistence of the single session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate owns exactly one persisted record under a fixed key. The trait
//! seam exists so tests can run the full login/restore/logout cycle against
//! an in-memory store instead of browser localStorage.
//!
//! ERROR HANDLING
//! ==============
//! `load` never fails its caller: a missing, unreadable, or corrupt stored
//! value is reported as no session.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::state::auth::Session;

/// Fixed localStorage key for the serialized session record.
pub const SESSION_KEY: &str = "insurance_user";

/// Key-value persistence of at most one session record.
pub trait SessionStore {
    /// The previously stored session, if present and well-formed.
    fn load(&self) -> Option<Session>;
    /// Overwrite the single stored record.
    fn save(&self, session: &Session);
    /// Remove the stored record.
    fn clear(&self);
}

/// Browser-backed store over `localStorage`. No-ops outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(SESSION_KEY).ok().flatten()?;
            match serde_json::from_str(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    // Treat corrupt data as absent rather than surfacing it.
                    log::warn!("discarding unreadable stored session: {err}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, session: &Session) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let Ok(raw) = serde_json::to_string(session) else {
                return;
            };
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}

/// In-memory store for unit tests and host-side rendering.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    record: std::cell::RefCell<Option<String>>,
}

impl MemorySessionStore {
    /// Seed the store with a raw string, well-formed or not.
    pub fn with_raw(raw: &str) -> MemorySessionStore {
        MemorySessionStore {
            record: std::cell::RefCell::new(Some(raw.to_owned())),
        }
    }

    /// Whether any record is currently stored.
    pub fn is_populated(&self) -> bool {
        self.record.borrow().is_some()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        let raw = self.record.borrow().clone()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(session) {
            *self.record.borrow_mut() = Some(raw);
        }
    }

    fn clear(&self) {
        *self.record.borrow_mut() = None;
    }
}
