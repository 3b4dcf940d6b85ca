use leptos::prelude::*;
use leptos_router::components::A;

use super::set_page_title;

/// Fallback for unknown routes
#[component]
pub fn NotFoundPage() -> impl IntoView {
    set_page_title(Some("Not Found"));

    view! {
        <div class="page not-found">
            <h1 class="not-found-title">"Nothing here 🐾"</h1>
            <p>"The page you were looking for has wandered off."</p>
            <A href="/" attr:class="outline-button">"Back home"</A>
        </div>
    }
}
