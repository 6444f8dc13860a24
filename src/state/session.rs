//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is provided via context at the application root. Route
//! guards and the navigation header read it through the signal graph, so
//! every mutation is visible to all subscribers on the next render pass.
//!
//! TRADE-OFFS
//! ==========
//! The persisted copy in `localStorage` mirrors the last confirmed sign-in;
//! the server remains the authority, and a stale principal simply fails its
//! next authenticated request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::Principal;
use crate::util::persist;

const STORAGE_KEY: &str = "quill_session";

/// Authentication state: the current principal, or anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<Principal>,
}

impl Session {
    /// Session with nobody signed in.
    pub fn anonymous() -> Self {
        Self { current: None }
    }

    /// Session bound to `principal`.
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            current: Some(principal),
        }
    }

    /// The signed-in principal, if any.
    pub fn principal(&self) -> Option<&Principal> {
        self.current.as_ref()
    }

    /// Whether any principal is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the signed-in principal is an administrator.
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|p| p.is_admin)
    }
}

/// Injectable handle over the single current [`Session`].
///
/// Copyable so components and callbacks can capture it freely; all copies
/// share one underlying signal. Only sign-in success, sign-up-triggered
/// sign-in, profile update, and confirmed sign-out mutate it.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl SessionStore {
    /// Fresh anonymous store.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::anonymous()),
        }
    }

    /// Store rehydrated from the persisted principal, when one exists.
    ///
    /// Persistence is browser-only; native builds always start anonymous.
    pub fn restore() -> Self {
        let session = persist::load_json::<Principal>(STORAGE_KEY)
            .map_or_else(Session::anonymous, Session::authenticated);
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Current session; reactive when read inside a tracking context.
    pub fn get(&self) -> Session {
        self.session.get()
    }

    /// Current session without subscribing the caller.
    pub fn get_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    /// Replace the current session with `principal`.
    ///
    /// Used on sign-in success and profile update alike: an account update
    /// replaces the principal wholesale.
    pub fn set_session(&self, principal: Principal) {
        persist::save_json(STORAGE_KEY, &principal);
        self.session.set(Session::authenticated(principal));
    }

    /// Reset to anonymous and drop the persisted copy. Idempotent.
    pub fn clear_session(&self) {
        persist::remove(STORAGE_KEY);
        self.session.set(Session::anonymous());
    }

    /// Apply the outcome of a sign-out request.
    ///
    /// Only a confirmed sign-out clears the session: after a failure the
    /// server still considers the session active, and dropping the principal
    /// locally would desynchronize the two.
    pub fn apply_signout(&self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.clear_session(),
            Err(_err) => {
                #[cfg(feature = "csr")]
                log::warn!("sign-out request failed: {_err}");
            }
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
