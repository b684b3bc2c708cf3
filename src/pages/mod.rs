//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (auth gating, toast wiring)
//! and delegates rendering details to `components`.

pub mod data_tables;
pub mod index;
pub mod register;
