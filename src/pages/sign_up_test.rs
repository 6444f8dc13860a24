use super::*;

#[test]
fn validate_trims_and_accepts_complete_forms() {
    let request = validate_sign_up("  sarah  ", " sarah@example.com ", " hunter2 ").unwrap();
    assert_eq!(request.username, "sarah");
    assert_eq!(request.email, "sarah@example.com");
    assert_eq!(request.password, "hunter2");
}

#[test]
fn validate_rejects_empty_password() {
    let err = validate_sign_up("sarah", "sarah@example.com", "").unwrap_err();
    assert_eq!(err, ApiError::Validation(MISSING_FIELDS.to_owned()));
    assert_eq!(err.to_string(), "Please fill out all fields.");
}

#[test]
fn validate_rejects_whitespace_only_fields() {
    assert!(validate_sign_up("   ", "sarah@example.com", "hunter2").is_err());
    assert!(validate_sign_up("sarah", "   ", "hunter2").is_err());
    assert!(validate_sign_up("sarah", "sarah@example.com", "   ").is_err());
}
