//! Top navigation bar with session-aware affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header subscribes to the session store: it swaps between the sign-in
//! button and the account dropdown the moment the session changes, and it is
//! the primary sign-out entry point.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types::Principal;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Whether `href` is the active nav link for the current `path`.
pub(crate) fn is_active(path: &str, href: &str) -> bool {
    path == href
}

#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let path = move || pathname.get();

    let on_toggle_theme = move |_| {
        ui.update(|s| s.dark_mode = dark_mode::toggle(s.dark_mode));
    };

    let on_toggle_nav = move |_| ui.update(|s| s.nav_open = !s.nav_open);

    let on_signout = Callback::new(move |()| {
        menu_open.set(false);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::sign_out().await;
            store.apply_signout(result);
        });
    });

    view! {
        <nav class="header">
            <a class="header__brand" href="/">
                <span class="header__badge">"Quill"</span>
            </a>

            <div class="header__links" class=("header__links--open", move || ui.get().nav_open)>
                <a
                    class="header__link"
                    class=("header__link--active", move || is_active(&path(), "/"))
                    href="/"
                >
                    "Home"
                </a>
                <a
                    class="header__link"
                    class=("header__link--active", move || is_active(&path(), "/about"))
                    href="/about"
                >
                    "About"
                </a>
            </div>

            <div class="header__actions">
                <button class="btn btn--icon" on:click=on_toggle_theme title="Toggle dark mode">
                    {move || if ui.get().dark_mode { "☾" } else { "☀" }}
                </button>

                {move || {
                    store
                        .get()
                        .principal()
                        .cloned()
                        .map_or_else(
                            || {
                                view! {
                                    <a class="btn btn--primary" href="/sign-in">
                                        "Sign In"
                                    </a>
                                }
                                    .into_any()
                            },
                            |principal| {
                                view! {
                                    <AccountMenu
                                        principal=principal
                                        open=menu_open
                                        on_signout=on_signout
                                    />
                                }
                                    .into_any()
                            },
                        )
                }}

                <button class="btn btn--icon header__toggle" on:click=on_toggle_nav title="Menu">
                    "☰"
                </button>
            </div>
        </nav>
    }
}

/// Avatar button with the account dropdown (identity, profile link, sign out).
#[component]
fn AccountMenu(
    principal: Principal,
    open: RwSignal<bool>,
    on_signout: Callback<()>,
) -> impl IntoView {
    let avatar = principal
        .profile_picture
        .clone()
        .unwrap_or_else(|| "/public/default-avatar.svg".to_owned());
    let username = principal.username.clone();
    let email = principal.email.clone();

    view! {
        <div class="account-menu">
            <button
                class="account-menu__avatar"
                on:click=move |_| open.update(|o| *o = !*o)
                title="Account"
            >
                <img src=avatar alt="user"/>
            </button>
            <Show when=move || open.get()>
                <div class="account-menu__dropdown">
                    <div class="account-menu__identity">
                        <span class="account-menu__name">"@" {username.clone()}</span>
                        <span class="account-menu__email">{email.clone()}</span>
                    </div>
                    <a
                        class="account-menu__item"
                        href="/dashboard"
                        on:click=move |_| open.set(false)
                    >
                        "Profile"
                    </a>
                    <div class="account-menu__divider"></div>
                    <button class="account-menu__item" on:click=move |_| on_signout.run(())>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
