//! Public post view resolved from the `:slug` route parameter.

#[cfg(test)]
#[path = "post_test.rs"]
mod post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Render post markdown to HTML for display.
pub(crate) fn render_markdown(source: &str) -> String {
    let parser = pulldown_cmark::Parser::new(source);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    // Refetches whenever the slug param changes.
    let post = LocalResource::new(move || {
        let slug = slug();
        async move { crate::net::api::fetch_post_by_slug(&slug).await }
    });

    view! {
        <Suspense fallback=move || view! { <p class="post-page__loading">"Loading..."</p> }>
            {move || {
                post.get()
                    .map(|found| match found {
                        Some(post) => {
                            let body = render_markdown(&post.content);
                            view! {
                                <article class="post-page">
                                    <h1 class="post-page__title">{post.title.clone()}</h1>
                                    <span class="post-page__category">{post.category.clone()}</span>
                                    {post
                                        .image
                                        .clone()
                                        .map(|src| {
                                            view! { <img class="post-page__image" src=src alt=""/> }
                                        })}
                                    <div class="post-page__content" inner_html=body></div>
                                </article>
                            }
                                .into_any()
                        }
                        None => view! { <p class="post-page__missing">"Post not found."</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
