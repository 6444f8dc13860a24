//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::guard::{RequireAdmin, RequireAuth};
use crate::components::header::Header;
use crate::pages::{
    about::AboutPage, create_post::CreatePostPage, dashboard::DashboardPage, home::HomePage,
    post::PostPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the session store and UI state contexts, and declares the static
/// route table. Protected subtrees are wrapped by exactly one guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::restore();
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::read_preference(),
        nav_open: false,
    });
    dark_mode::apply(ui.get_untracked().dark_mode);

    provide_context(store);
    provide_context(ui);

    view! {
        <Title text="Quill"/>

        <Router>
            <Header/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route path=StaticSegment("sign-up") view=SignUpPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <DashboardPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("create-post")
                        view=|| {
                            view! {
                                <RequireAdmin>
                                    <CreatePostPage/>
                                </RequireAdmin>
                            }
                        }
                    />
                    <Route path=(StaticSegment("post"), ParamSegment("slug")) view=PostPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
