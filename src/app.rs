//! Animal Care Frontend App
//!
//! Root component: navigation shell, routes and footer.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Nav};
use crate::context::AppContext;
use crate::pages::{
    AboutPage, DonatePage, HomePage, LoginPage, NotFoundPage, PetDetailPage, PetsPage, SignupPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Mobile menu state lives above the router so any view can collapse it
    let menu_open = signal(false);
    provide_context(AppContext::new(menu_open));

    view! {
        <Router>
            // Fixed background layer
            <div class="page-backdrop" aria-hidden="true"></div>

            <Nav />

            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/donate") view=DonatePage />
                    <Route path=path!("/pets") view=PetsPage />
                    <Route path=path!("/pets/:id") view=PetDetailPage />
                    // Older card links used the singular form
                    <Route path=path!("/pet/:id") view=PetDetailPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                </Routes>
            </main>

            <Footer />
        </Router>
    }
}
