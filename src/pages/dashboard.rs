//! Dashboard page with the profile panel for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, reached only through the auth
//! guard. A successful profile update replaces the session's principal, so
//! the header and guards pick up the new identity on the next render pass.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{Principal, UpdateProfileRequest};
use crate::state::session::SessionStore;

/// Build the profile-update payload from the form fields.
///
/// Blank username/email fall back to the current values; a blank password
/// means "keep the current one".
pub(crate) fn build_update_request(
    current: &Principal,
    username: &str,
    email: &str,
    password: &str,
) -> UpdateProfileRequest {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();
    UpdateProfileRequest {
        username: if username.is_empty() {
            current.username.clone()
        } else {
            username.to_owned()
        },
        email: if email.is_empty() {
            current.email.clone()
        } else {
            email.to_owned()
        },
        password: if password.is_empty() {
            None
        } else {
            Some(password.to_owned())
        },
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let initial = store.get_untracked();
    let username = RwSignal::new(
        initial
            .principal()
            .map(|p| p.username.clone())
            .unwrap_or_default(),
    );
    let email = RwSignal::new(
        initial
            .principal()
            .map(|p| p.email.clone())
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let avatar = move || {
        store
            .get()
            .principal()
            .and_then(|p| p.profile_picture.clone())
            .unwrap_or_else(|| "/public/default-avatar.svg".to_owned())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(current) = store.get_untracked().principal().cloned() else {
            return;
        };
        let request = build_update_request(&current, &username.get(), &email.get(), &password.get());
        busy.set(true);
        message.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&current.id, &request).await {
                Ok(principal) => {
                    store.set_session(principal);
                    password.set(String::new());
                    message.set(Some("Profile updated.".to_owned()));
                }
                Err(err) => message.set(Some(err.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, request);
            busy.set(false);
        }
    };

    let on_signout = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::sign_out().await;
            store.apply_signout(result);
        });
    };

    view! {
        <div class="dash-page">
            <h1>"Profile"</h1>
            <form class="dash-profile" on:submit=on_submit>
                <img class="dash-profile__avatar" src=avatar alt="user"/>
                <input
                    class="auth-form__input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="New password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Update" }}
                </button>
                <button class="btn dash-profile__signout" type="button" on:click=on_signout>
                    "Sign Out"
                </button>
            </form>
            <Show when=move || message.get().is_some()>
                <p class="dash-profile__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
