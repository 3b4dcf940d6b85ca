//! Landing Page
//!
//! Hero section. The heading and main image animate with pure CSS so they
//! paint immediately; only the floating card waits for the reveal flag.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::{use_reveal, DEFAULT_REVEAL_THRESHOLD};
use leptos_router::components::A;

use super::set_page_title;
use crate::components::Squiggle;

/// Number of avatars in the social-proof stack
const AVATAR_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    set_page_title(None);
    let hero = use_reveal::<html::Div>(DEFAULT_REVEAL_THRESHOLD);

    view! {
        <div node_ref=hero.node_ref class="hero">
            // Background decoration
            <div class="hero-blob left" aria-hidden="true"></div>
            <div class="hero-blob right" aria-hidden="true"></div>

            <div class="hero-grid">
                // Text
                <div class="hero-text">
                    <div class="pill-badge css-fade-up delay-1">
                        <span class="pulse-dot"></span>
                        "Over 500+ pets adopted this month"
                    </div>

                    <h1 class="hero-title css-fade-up">
                        "Find your " <br />
                        <span class="accent-word">
                            "soulmate."
                            <Squiggle />
                        </span>
                    </h1>

                    <p class="hero-lead css-fade-up delay-2">
                        "They aren't just looking for a home. They are looking for you. "
                        "Browse hundreds of profiles and find the one that clicks."
                    </p>

                    <div class="hero-actions css-fade-up delay-3">
                        <A href="/pets" attr:class="dark-button">
                            "Start Adoption"
                            <svg class="arrow-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3"></path>
                            </svg>
                        </A>

                        <div class="avatar-stack">
                            <div class="avatars">
                                {(0..AVATAR_COUNT).map(|i| view! {
                                    <img
                                        class="avatar"
                                        src=format!("https://i.pravatar.cc/100?img={}", i + 10)
                                        alt="User"
                                    />
                                }).collect_view()}
                            </div>
                            <div class="avatar-caption">
                                <span class="avatar-count">"2k+ Families"</span>
                                "Trust us"
                            </div>
                        </div>
                    </div>
                </div>

                // Image
                <div class="hero-media css-fade-in-scale">
                    <div class="hero-glow" aria-hidden="true"></div>
                    <div class="hero-image-frame">
                        <img src="/pets.png" alt="Main Hero" width="800" height="800" class="hero-image" />
                    </div>

                    <div class=hero.class("floating-card reveal fade-up slow")>
                        <div class="floating-card-row">
                            <div class="check-bubble">
                                <svg class="check-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
                                </svg>
                            </div>
                            <div>
                                <p class="floating-card-kicker">"Just Adopted"</p>
                                <p class="floating-card-text">"Milo found a home!"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
