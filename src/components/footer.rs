//! Page footer with section links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <a class="footer__brand" href="/">
                <span class="footer__badge">"Quill"</span>
            </a>
            <div class="footer__links">
                <a class="footer__link" href="/">"Home"</a>
                <a class="footer__link" href="/about">"About"</a>
                <a class="footer__link" href="/sign-up">"Sign Up"</a>
            </div>
            <span class="footer__copyright">"© Quill"</span>
        </footer>
    }
}
