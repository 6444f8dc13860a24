use super::*;
use crate::net::types::Principal;

fn principal(admin: bool) -> Principal {
    Principal {
        id: "u-1".to_owned(),
        username: "sarah".to_owned(),
        email: "sarah@example.com".to_owned(),
        is_admin: admin,
        profile_picture: None,
    }
}

// =============================================================
// Authenticated guard
// =============================================================

#[test]
fn authenticated_redirects_anonymous_sessions() {
    assert_eq!(authenticated(&Session::anonymous()), GuardDecision::Redirect);
}

#[test]
fn authenticated_allows_any_principal() {
    assert_eq!(
        authenticated(&Session::authenticated(principal(false))),
        GuardDecision::Allow
    );
    assert_eq!(
        authenticated(&Session::authenticated(principal(true))),
        GuardDecision::Allow
    );
}

// =============================================================
// Administrator guard
// =============================================================

#[test]
fn administrator_redirects_anonymous_sessions() {
    assert_eq!(administrator(&Session::anonymous()), GuardDecision::Redirect);
}

#[test]
fn administrator_redirects_ordinary_principals() {
    assert_eq!(
        administrator(&Session::authenticated(principal(false))),
        GuardDecision::Redirect
    );
}

#[test]
fn administrator_allows_admin_principals() {
    assert_eq!(
        administrator(&Session::authenticated(principal(true))),
        GuardDecision::Allow
    );
}

#[test]
fn both_rejections_share_the_same_destination() {
    // An ordinary visitor and an anonymous one must be indistinguishable:
    // both end up at the sign-in entry point.
    assert_eq!(SIGN_IN_PATH, "/sign-in");
    assert_eq!(
        administrator(&Session::anonymous()),
        administrator(&Session::authenticated(principal(false)))
    );
}

// =============================================================
// Decisions are derived fresh from the session
// =============================================================

#[test]
fn decision_follows_session_changes() {
    let store = SessionStore::new();
    assert_eq!(authenticated(&store.get_untracked()), GuardDecision::Redirect);

    store.set_session(principal(false));
    assert_eq!(authenticated(&store.get_untracked()), GuardDecision::Allow);

    store.clear_session();
    assert_eq!(authenticated(&store.get_untracked()), GuardDecision::Redirect);
}
