//! Card for a post summary on the home grid.

use leptos::prelude::*;

use crate::net::types::Post;

/// A clickable card linking to the full post view.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/post/{}", post.slug);
    let image = post.image.clone();

    view! {
        <a class="post-card" href=href>
            {image.map(|src| view! { <img class="post-card__image" src=src alt=""/> })}
            <span class="post-card__title">{post.title.clone()}</span>
            <span class="post-card__category">{post.category.clone()}</span>
        </a>
    }
}
