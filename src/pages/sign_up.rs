//! Sign-up page with username, email, and password fields.
//!
//! ERROR HANDLING
//! ==============
//! Validation, network, and API failures all land in the same inline message
//! slot; the form stays interactive and resubmittable throughout.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::SignUpRequest;
use crate::pages::MISSING_FIELDS;

/// Validate and normalize the sign-up form. No request is sent unless every
/// field carries a value.
pub(crate) fn validate_sign_up(
    username: &str,
    email: &str,
    password: &str,
) -> Result<SignUpRequest, ApiError> {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(MISSING_FIELDS.to_owned()));
    }
    Ok(SignUpRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_sign_up(&username.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_up(&request).await {
                    Ok(()) => navigate("/sign-in", leptos_router::NavigateOptions::default()),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Your username"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Your email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="name@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Your password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__alt">
                    "Have an account? " <a href="/sign-in">"Sign In"</a>
                </p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
