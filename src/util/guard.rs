//! Route guard predicates and redirect installation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards re-read the session store on every render pass; no decision is
//! cached across a session change, so a sign-out is visible to the very next
//! navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionStore};

/// Entry point unauthenticated and unauthorized visitors are sent to.
///
/// Non-admin and anonymous visitors land on the same page on purpose: the
/// redirect must not reveal which routes require elevated privilege.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Outcome of evaluating a guard predicate against a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped view.
    Allow,
    /// Send the visitor to [`SIGN_IN_PATH`].
    Redirect,
}

/// Allow any signed-in principal.
pub fn authenticated(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect
    }
}

/// Allow only administrator principals.
pub fn administrator(session: &Session) -> GuardDecision {
    if session.is_admin() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect
    }
}

/// Navigate to [`SIGN_IN_PATH`] whenever `decide` blocks the current session.
pub fn install_guard_redirect<F>(
    store: SessionStore,
    decide: fn(&Session) -> GuardDecision,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if decide(&store.get()) == GuardDecision::Redirect {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });
}
