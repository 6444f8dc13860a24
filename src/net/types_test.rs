use super::*;

// =============================================================
// Principal
// =============================================================

#[test]
fn principal_deserializes_camel_case_fields() {
    let principal: Principal = serde_json::from_str(
        r#"{
            "_id": "66f0a1",
            "username": "sarah",
            "email": "sarah@example.com",
            "isAdmin": true,
            "profilePicture": "https://cdn.example.com/sarah.png"
        }"#,
    )
    .unwrap();

    assert_eq!(principal.id, "66f0a1");
    assert_eq!(principal.username, "sarah");
    assert_eq!(principal.email, "sarah@example.com");
    assert!(principal.is_admin);
    assert_eq!(
        principal.profile_picture.as_deref(),
        Some("https://cdn.example.com/sarah.png")
    );
}

#[test]
fn principal_admin_flag_defaults_to_ordinary() {
    let principal: Principal = serde_json::from_str(
        r#"{"_id": "66f0a2", "username": "tom", "email": "tom@example.com"}"#,
    )
    .unwrap();

    assert!(!principal.is_admin);
    assert_eq!(principal.profile_picture, None);
}

#[test]
fn principal_round_trips_through_json() {
    let principal = Principal {
        id: "66f0a3".to_owned(),
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        is_admin: false,
        profile_picture: None,
    };
    let raw = serde_json::to_string(&principal).unwrap();
    let back: Principal = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, principal);
}

// =============================================================
// ApiAck
// =============================================================

#[test]
fn ack_with_explicit_false_is_failure() {
    let ack: ApiAck =
        serde_json::from_str(r#"{"success": false, "message": "Email already in use"}"#).unwrap();
    assert!(ack.is_failure());
    assert_eq!(ack.message.as_deref(), Some("Email already in use"));
}

#[test]
fn ack_without_success_key_is_not_failure() {
    let ack: ApiAck = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
    assert!(!ack.is_failure());
}

#[test]
fn ack_with_success_true_is_not_failure() {
    let ack: ApiAck = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(!ack.is_failure());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn update_request_omits_unchanged_password() {
    let request = UpdateProfileRequest {
        username: "sarah".to_owned(),
        email: "sarah@example.com".to_owned(),
        password: None,
    };
    let raw = serde_json::to_string(&request).unwrap();
    assert!(!raw.contains("password"));
}

#[test]
fn update_request_includes_new_password() {
    let request = UpdateProfileRequest {
        username: "sarah".to_owned(),
        email: "sarah@example.com".to_owned(),
        password: Some("hunter2".to_owned()),
    };
    let value: serde_json::Value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["password"], "hunter2");
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_deserializes_with_defaults() {
    let post: Post = serde_json::from_str(
        r#"{"_id": "p-1", "title": "Hello", "slug": "hello"}"#,
    )
    .unwrap();

    assert_eq!(post.category, "uncategorized");
    assert_eq!(post.image, None);
    assert_eq!(post.content, "");
    assert_eq!(post.created_at, None);
}

#[test]
fn post_list_defaults_to_empty() {
    let list: PostListResponse = serde_json::from_str("{}").unwrap();
    assert!(list.posts.is_empty());
}

#[test]
fn post_list_deserializes_posts_array() {
    let list: PostListResponse = serde_json::from_str(
        r#"{"posts": [{"_id": "p-1", "title": "Hello", "slug": "hello", "category": "writing"}]}"#,
    )
    .unwrap();
    assert_eq!(list.posts.len(), 1);
    assert_eq!(list.posts[0].category, "writing");
}
