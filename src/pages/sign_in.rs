//! Sign-in page.
//!
//! The async sign-in call and the synchronous store update are separate
//! steps: the request returns a typed result, and only a success mutates the
//! session store before navigating home.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::SignInRequest;
use crate::pages::MISSING_FIELDS;
use crate::state::session::SessionStore;

/// Validate and normalize the sign-in form.
pub(crate) fn validate_sign_in(email: &str, password: &str) -> Result<SignInRequest, ApiError> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(MISSING_FIELDS.to_owned()));
    }
    Ok(SignInRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
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
        let request = match validate_sign_in(&email.get(), &password.get()) {
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
                match crate::net::api::sign_in(&request).await {
                    Ok(principal) => {
                        store.set_session(principal);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &store);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                        {move || if busy.get() { "Loading..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__alt">
                    "New here? " <a href="/sign-up">"Sign Up"</a>
                </p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
