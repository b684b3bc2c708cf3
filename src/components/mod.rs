//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and entity views while reading shared state
//! from Leptos context providers; data-changing actions are emitted as
//! notification commands, never performed inline.

pub mod agents_table;
pub mod assigned_customers_table;
pub mod claims_table;
pub mod customers_table;
pub mod dashboard;
pub mod layout;
pub mod login_form;
pub mod notification_dropdown;
pub mod policies_table;
pub mod policy_modal;
pub mod routes_table;
pub mod toast_host;
