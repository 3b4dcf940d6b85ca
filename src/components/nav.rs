//! Navigation Shell Component
//!
//! Floating top bar with desktop links and a collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::config::NAV_LINKS;
use crate::context::use_app_context;

/// Class for the hamburger button / mobile panel, `open` appended while expanded
fn with_open(base: &str, open: bool) -> String {
    if open {
        format!("{} open", base)
    } else {
        base.to_string()
    }
}

/// Site navigation bar
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_app_context();
    let location = use_location();

    // Any route change collapses the mobile menu
    Effect::new(move |_| {
        let path = location.pathname.get();
        log::debug!("[NAV] route {}", path);
        ctx.close_menu();
    });

    view! {
        <div class="nav-wrapper">
            <nav class="site-nav">
                <div class="nav-bar">
                    <A href="/" attr:class="nav-logo">
                        <img src="/nav-logo.png" width="140" height="43" alt="Logo" />
                    </A>

                    // Desktop links
                    <ul class="nav-links">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <li class="nav-item">
                                <A href=*href attr:class="nav-link">{*label}</A>
                                <span class="nav-underline"></span>
                            </li>
                        }).collect_view()}
                    </ul>

                    <div class="nav-cta">
                        <A href="/pets" attr:class="cta-button">"find a friend"</A>
                    </div>

                    // Mobile hamburger
                    <button
                        class=move || with_open("hamburger", ctx.menu_open.get())
                        aria-label="Toggle menu"
                        aria-expanded=move || ctx.menu_open.get().to_string()
                        on:click=move |_| ctx.toggle_menu()
                    >
                        <span class="hamburger-bar top"></span>
                        <span class="hamburger-bar middle"></span>
                        <span class="hamburger-bar bottom"></span>
                    </button>
                </div>

                // Mobile menu: only max-height and opacity animate
                <div class=move || with_open("mobile-menu", ctx.menu_open.get())>
                    <ul class="mobile-links">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <li class="mobile-item" on:click=move |_| ctx.close_menu()>
                                <A href=*href attr:class="mobile-link">{*label}</A>
                            </li>
                        }).collect_view()}
                    </ul>
                    <A href="/pets" attr:class="cta-button wide">"find a friend"</A>
                </div>
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_open() {
        assert_eq!(with_open("mobile-menu", false), "mobile-menu");
        assert_eq!(with_open("mobile-menu", true), "mobile-menu open");
    }
}
