//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading shared
//! state from Leptos context providers; `guard` holds the wrappers the route
//! table uses for protected subtrees.

pub mod footer;
pub mod guard;
pub mod header;
pub mod post_card;
