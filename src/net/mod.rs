//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every HTTP call (token attach, 401 forced logout), and
//! `types` defines the wire schema the backend owns.

pub mod api;
pub mod types;
