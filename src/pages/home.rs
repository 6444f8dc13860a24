//! Landing page with the recent-posts grid.

use leptos::prelude::*;

use crate::components::post_card::PostCard;

#[component]
pub fn HomePage() -> impl IntoView {
    // Recent posts resource, fetched on mount.
    let posts = LocalResource::new(|| crate::net::api::fetch_recent_posts());

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Welcome to Quill"</h1>
                <p>
                    "Essays and notes on technology, writing, and whatever else "
                    "catches our attention."
                </p>
                <a class="home-page__cta" href="/about">"About this blog"</a>
            </section>

            <section class="home-page__recent">
                <h2>"Recent Posts"</h2>
                <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                    {move || {
                        posts
                            .get()
                            .map(|list| match list {
                                Some(list) if !list.is_empty() => {
                                    view! {
                                        <div class="home-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|post| view! { <PostCard post=post/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                _ => {
                                    view! { <p class="home-page__empty">"No posts yet."</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
