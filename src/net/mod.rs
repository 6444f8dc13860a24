//! Networking modules for the blog API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` is the failure taxonomy surfaced to
//! forms, and `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
