//! Wire DTOs for the blog API boundary.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON with Mongo-style `_id` keys; every DTO
//! pins its serde names so the Rust side can be renamed freely without
//! drifting from the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the sign-in and profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Administrator flag; absent on the wire means an ordinary account.
    #[serde(default)]
    pub is_admin: bool,
    /// Avatar image URL, if the account has one.
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Acknowledgement body used by mutation endpoints.
///
/// The API reports rejections as `{"success": false, "message": "..."}`;
/// plain 2xx bodies may omit both keys, which is not a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiAck {
    /// Whether the body explicitly marks the request as rejected.
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }
}

/// Body for `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body for `PUT /api/user/update/{id}`. A `None` password keeps the
/// current one; the key is omitted rather than sent as null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Body for `POST /api/post/create`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub category: String,
    pub content: String,
}

/// A published post as returned by the post endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Post title.
    pub title: String,
    /// URL slug the post is served under.
    pub slug: String,
    /// Category label; the backend defaults it when the author picks none.
    #[serde(default = "default_category")]
    pub category: String,
    /// Cover image URL, if set.
    #[serde(default)]
    pub image: Option<String>,
    /// Post body as markdown source.
    #[serde(default)]
    pub content: String,
    /// ISO 8601 creation timestamp, if the endpoint includes it.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_category() -> String {
    "uncategorized".to_owned()
}

/// Envelope for post-listing responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PostListResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}
