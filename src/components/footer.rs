use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{NAV_LINKS, SITE_DESCRIPTION, SITE_TITLE};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="footer-brand">{SITE_TITLE}</p>
            <p class="footer-tagline">{SITE_DESCRIPTION}</p>
            <ul class="footer-links">
                {NAV_LINKS.iter().map(|(label, href)| view! {
                    <li><A href=*href>{*label}</A></li>
                }).collect_view()}
                <li><A href="/login">"Log in"</A></li>
                <li><A href="/signup">"Sign up"</A></li>
            </ul>
        </footer>
    }
}
