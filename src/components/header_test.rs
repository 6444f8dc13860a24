use super::*;

#[test]
fn home_link_active_only_at_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/about", "/"));
    assert!(!is_active("/dashboard", "/"));
}

#[test]
fn about_link_active_on_exact_match() {
    assert!(is_active("/about", "/about"));
    assert!(!is_active("/", "/about"));
}
