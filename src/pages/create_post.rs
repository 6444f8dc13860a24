//! Post composer, reachable only through the administrator guard.

#[cfg(test)]
#[path = "create_post_test.rs"]
mod create_post_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::CreatePostRequest;

pub(crate) const MISSING_POST_FIELDS: &str = "Please provide a title and some content.";
pub(crate) const DEFAULT_CATEGORY: &str = "uncategorized";

/// Validate and normalize the composer form. An empty category falls back
/// to the backend's default label.
pub(crate) fn validate_post(
    title: &str,
    category: &str,
    content: &str,
) -> Result<CreatePostRequest, ApiError> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(ApiError::Validation(MISSING_POST_FIELDS.to_owned()));
    }
    let category = category.trim();
    Ok(CreatePostRequest {
        title: title.to_owned(),
        category: if category.is_empty() {
            DEFAULT_CATEGORY.to_owned()
        } else {
            category.to_owned()
        },
        content: content.to_owned(),
    })
}

#[component]
pub fn CreatePostPage() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let category = RwSignal::new(DEFAULT_CATEGORY.to_owned());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_post(&title.get(), &category.get(), &content.get()) {
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
                match crate::net::api::create_post(&request).await {
                    Ok(post) => navigate(
                        &format!("/post/{}", post.slug),
                        leptos_router::NavigateOptions::default(),
                    ),
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
        <div class="compose-page">
            <h1>"Create a post"</h1>
            <form class="compose-form" on:submit=on_submit>
                <div class="compose-form__row">
                    <input
                        class="auth-form__input compose-form__title"
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-form__input compose-form__category"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="uncategorized">"Select a category"</option>
                        <option value="technology">"Technology"</option>
                        <option value="writing">"Writing"</option>
                        <option value="life">"Life"</option>
                    </select>
                </div>
                <textarea
                    class="compose-form__content"
                    placeholder="Write something... (markdown)"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Publishing..." } else { "Publish" }}
                </button>
            </form>
            <Show when=move || error.get().is_some()>
                <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
