use super::*;

fn principal(name: &str, admin: bool) -> Principal {
    Principal {
        id: format!("u-{name}"),
        username: name.to_owned(),
        email: format!("{name}@example.com"),
        is_admin: admin,
        profile_picture: None,
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert!(session.principal().is_none());
    assert_eq!(session, Session::anonymous());
}

#[test]
fn authenticated_session_exposes_principal() {
    let session = Session::authenticated(principal("sarah", false));
    assert!(session.is_authenticated());
    assert_eq!(session.principal().unwrap().username, "sarah");
}

#[test]
fn is_admin_requires_both_principal_and_flag() {
    assert!(!Session::anonymous().is_admin());
    assert!(!Session::authenticated(principal("tom", false)).is_admin());
    assert!(Session::authenticated(principal("sarah", true)).is_admin());
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_anonymous() {
    let store = SessionStore::new();
    assert_eq!(store.get_untracked(), Session::anonymous());
}

#[test]
fn set_session_is_visible_immediately() {
    let store = SessionStore::new();
    let sarah = principal("sarah", false);
    store.set_session(sarah.clone());
    assert_eq!(store.get_untracked(), Session::authenticated(sarah));
}

#[test]
fn set_session_replaces_the_previous_principal() {
    let store = SessionStore::new();
    store.set_session(principal("sarah", true));
    store.set_session(principal("tom", false));

    let session = store.get_untracked();
    assert_eq!(session.principal().unwrap().username, "tom");
    assert!(!session.is_admin());
}

#[test]
fn clear_session_is_idempotent() {
    let store = SessionStore::new();
    store.set_session(principal("sarah", false));

    store.clear_session();
    let once = store.get_untracked();
    store.clear_session();
    let twice = store.get_untracked();

    assert_eq!(once, Session::anonymous());
    assert_eq!(once, twice);
}

#[test]
fn clear_on_anonymous_store_is_a_noop() {
    let store = SessionStore::new();
    store.clear_session();
    assert_eq!(store.get_untracked(), Session::anonymous());
}

// =============================================================
// Sign-out outcomes
// =============================================================

#[test]
fn confirmed_signout_clears_the_session() {
    let store = SessionStore::new();
    store.set_session(principal("sarah", false));

    store.apply_signout(Ok(()));

    assert_eq!(store.get_untracked(), Session::anonymous());
}

#[test]
fn failed_signout_keeps_the_current_principal() {
    let store = SessionStore::new();
    store.set_session(principal("sarah", false));

    store.apply_signout(Err(ApiError::Application("session busy".to_owned())));

    let session = store.get_untracked();
    assert_eq!(session.principal().unwrap().username, "sarah");
}

#[test]
fn failed_signout_on_network_error_keeps_the_current_principal() {
    let store = SessionStore::new();
    store.set_session(principal("sarah", true));

    store.apply_signout(Err(ApiError::Network("connection refused".to_owned())));

    assert!(store.get_untracked().is_admin());
}
