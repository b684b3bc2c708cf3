//! Shared state structs provided to the component tree via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct is wrapped in an `RwSignal` by the `App` root so pages and
//! components read and update one explicit object instead of ambient
//! globals.

pub mod auth;
pub mod toast;
pub mod ui;
