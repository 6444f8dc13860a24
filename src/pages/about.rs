//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Quill"</h1>
            <p>
                "Quill is a small community blog. Anyone can read, registered "
                "members manage their profile from the dashboard, and the "
                "editors publish new posts."
            </p>
            <p>
                "If you want to join the conversation, "
                <a href="/sign-up">"create an account"</a> " and say hello."
            </p>
        </div>
    }
}
