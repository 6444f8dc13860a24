use super::*;

fn current() -> Principal {
    Principal {
        id: "u-1".to_owned(),
        username: "sarah".to_owned(),
        email: "sarah@example.com".to_owned(),
        is_admin: false,
        profile_picture: None,
    }
}

#[test]
fn blank_fields_fall_back_to_current_values() {
    let request = build_update_request(&current(), "  ", "", "");
    assert_eq!(request.username, "sarah");
    assert_eq!(request.email, "sarah@example.com");
    assert_eq!(request.password, None);
}

#[test]
fn changed_fields_are_trimmed_and_sent() {
    let request = build_update_request(&current(), " sarah2 ", " new@example.com ", " hunter2 ");
    assert_eq!(request.username, "sarah2");
    assert_eq!(request.email, "new@example.com");
    assert_eq!(request.password.as_deref(), Some("hunter2"));
}
