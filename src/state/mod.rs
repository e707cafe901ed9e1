//! Process-wide state shared through Leptos context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the authenticated-user record (the only cross-page domain
//! state); `toast` holds the notification queue. Both are `RwSignal`s
//! installed once at the app root.

pub mod auth;
pub mod toast;
