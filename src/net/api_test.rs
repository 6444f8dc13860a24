use super::*;

#[test]
fn update_profile_endpoint_formats_expected_path() {
    assert_eq!(update_profile_endpoint("66f0a1"), "/api/user/update/66f0a1");
}

#[test]
fn post_by_slug_endpoint_formats_expected_query() {
    assert_eq!(
        post_by_slug_endpoint("hello-world"),
        "/api/post/getposts?slug=hello-world"
    );
}

#[test]
fn recent_posts_endpoint_formats_limit() {
    assert_eq!(recent_posts_endpoint(9), "/api/post/getposts?limit=9");
}
