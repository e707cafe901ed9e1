//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and listing surfaces while reading
//! shared state from Leptos context providers; pages own the fetching.

pub mod application_detail;
pub mod job_card;
pub mod navbar;
pub mod pagination;
pub mod status_badge;
pub mod toast_stack;
