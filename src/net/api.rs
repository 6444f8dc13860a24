//! REST client for the blog API.
//!
//! Browser builds (`csr`) issue real HTTP calls via `gloo-net`; native builds
//! get inert stubs so state and form logic stay testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Mutations return typed `Result`s so callers can run the synchronous
//! store-update step after the request settles. Read endpoints degrade to
//! `Option`: a failed fetch renders as an empty view, never a crash.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    CreatePostRequest, Post, Principal, SignInRequest, SignUpRequest, UpdateProfileRequest,
};
#[cfg(feature = "csr")]
use super::types::{ApiAck, PostListResponse};

#[cfg(any(test, feature = "csr"))]
fn update_profile_endpoint(user_id: &str) -> String {
    format!("/api/user/update/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn post_by_slug_endpoint(slug: &str) -> String {
    format!("/api/post/getposts?slug={slug}")
}

#[cfg(any(test, feature = "csr"))]
fn recent_posts_endpoint(limit: usize) -> String {
    format!("/api/post/getposts?limit={limit}")
}

#[cfg(feature = "csr")]
async fn failure_message(resp: &gloo_net::http::Response) -> String {
    match resp.json::<ApiAck>().await {
        Ok(ack) => ack
            .message
            .unwrap_or_else(|| format!("request failed: {}", resp.status())),
        Err(_) => format!("request failed: {}", resp.status()),
    }
}

/// Register a new account via `POST /api/auth/signup`.
///
/// # Errors
///
/// `Application` when the API rejects the registration (taken email, weak
/// password, ...), `Network` when the request cannot be completed.
pub async fn sign_up(request: &SignUpRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let ack = resp.json::<ApiAck>().await.unwrap_or_default();
        if ack.is_failure() || !resp.ok() {
            let message = ack
                .message
                .unwrap_or_else(|| format!("request failed: {}", resp.status()));
            return Err(ApiError::Application(message));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Authenticate via `POST /api/auth/signin`, returning the signed-in
/// principal on success.
///
/// # Errors
///
/// `Application` when the credentials are rejected, `Network` when the
/// request or response handling fails.
pub async fn sign_in(request: &SignInRequest) -> Result<Principal, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signin")
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Application(failure_message(&resp).await));
        }
        resp.json::<Principal>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// End the server session via `POST /api/user/signout`.
///
/// Callers must leave the local session untouched when this fails: the
/// server still considers the session active.
///
/// # Errors
///
/// `Application` on a non-2xx answer, `Network` when unreachable.
pub async fn sign_out() -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/user/signout")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Application(failure_message(&resp).await));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Update the account via `PUT /api/user/update/{id}`, returning the
/// replacement principal.
///
/// # Errors
///
/// `Application` when the API rejects the update, `Network` otherwise.
pub async fn update_profile(
    user_id: &str,
    request: &UpdateProfileRequest,
) -> Result<Principal, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&update_profile_endpoint(user_id))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Application(failure_message(&resp).await));
        }
        resp.json::<Principal>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user_id, request);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Publish a post via `POST /api/post/create`, returning the stored post
/// (including its server-assigned slug).
///
/// # Errors
///
/// `Application` when the API rejects the post, `Network` otherwise.
pub async fn create_post(request: &CreatePostRequest) -> Result<Post, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post("/api/post/create")
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Application(failure_message(&resp).await));
        }
        resp.json::<Post>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Fetch the most recent posts for the home grid.
/// Returns `None` on any failure or outside the browser.
pub async fn fetch_recent_posts() -> Option<Vec<Post>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&recent_posts_endpoint(9))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: PostListResponse = resp.json().await.ok()?;
        Some(body.posts)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch a single post by slug.
/// Returns `None` when the post does not exist, on failure, or outside the
/// browser.
pub async fn fetch_post_by_slug(slug: &str) -> Option<Post> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&post_by_slug_endpoint(slug))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: PostListResponse = resp.json().await.ok()?;
        body.posts.into_iter().next()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = slug;
        None
    }
}
