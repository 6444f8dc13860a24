//! Higher-order wrappers gating protected route subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route table wraps each protected view in exactly one of these. The
//! wrapper evaluates its predicate against the session store on every render
//! pass: render the children on allow, navigate to the sign-in entry point
//! otherwise.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;
use crate::util::guard::{self, GuardDecision};

/// Render `children` only for signed-in visitors; everyone else is sent to
/// the sign-in page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    guard::install_guard_redirect(store, guard::authenticated, use_navigate());

    view! {
        <Show when=move || guard::authenticated(&store.get()) == GuardDecision::Allow>
            {children()}
        </Show>
    }
}

/// Render `children` only for administrators.
///
/// Anonymous and ordinary visitors get the same sign-in redirect; there is
/// deliberately no separate forbidden page.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    guard::install_guard_redirect(store, guard::administrator, use_navigate());

    view! {
        <Show when=move || guard::administrator(&store.get()) == GuardDecision::Allow>
            {children()}
        </Show>
    }
}
