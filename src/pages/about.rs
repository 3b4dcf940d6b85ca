//! About Page
//!
//! Mission hero, story with a parallax image, impact stats and a closing call to action.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::{use_parallax, use_reveal, DEFAULT_REVEAL_THRESHOLD};
use leptos_router::components::A;

use super::set_page_title;
use crate::components::{Squiggle, StatCard};
use crate::config::REVEAL_GRID;

/// Headline numbers (value, label, delay class)
const STATS: &[(&str, &str, &str)] = &[
    ("5,200+", "Lives Saved", "delay-100"),
    ("4,850+", "Forever Homes Found", "delay-200"),
    ("120+", "Community Heroes", "delay-300"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    set_page_title(Some("About"));

    view! {
        <div class="page about-page">
            <div class="page-inner">
                <HeroSection />
                <StorySection />
                <StatsSection />
                <CtaSection />
            </div>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    let text = use_reveal::<html::Div>(DEFAULT_REVEAL_THRESHOLD);
    let image = use_reveal::<html::Div>(REVEAL_GRID);

    view! {
        <section class="about-hero">
            <div node_ref=text.node_ref class=text.class("about-hero-text reveal fade-up")>
                <span class="pill-badge">"🐾 Our Mission"</span>

                <h1 class="about-title">
                    "We don't just rescue. " <br />
                    <span class="accent-word">
                        "We rewrite stories."
                        <Squiggle stroke_width=3 />
                    </span>
                </h1>

                <p class="about-lead">
                    "From the moment they enter our care to the second they find their forever home, "
                    "we provide the medical attention, rehabilitation, and unconditional love that "
                    "every living being deserves."
                </p>

                <A href="/donate" attr:class="outline-button">
                    "See our impact " <span class="arrow">"→"</span>
                </A>
            </div>

            // Clip-path wipe from the bottom edge
            <div node_ref=image.node_ref class="about-hero-media">
                <div class=image.class("clip-reveal")>
                    <img src="/about-hero-1.png" alt="A volunteer holding a happy dog" class="cover-image" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StorySection() -> impl IntoView {
    let text = use_reveal::<html::Div>(DEFAULT_REVEAL_THRESHOLD);
    let layer = use_parallax::<html::Div>();

    view! {
        <section class="about-story">
            <div class="story-media">
                <div class="story-frame">
                    <div node_ref=layer class="parallax-layer">
                        <img src="/about-story-1.png" alt="A veterinarian treating a cat" class="cover-image" />
                    </div>
                </div>
            </div>

            <div node_ref=text.node_ref class=text.class("story-text reveal fade-up")>
                <div class="story-block">
                    <h2>"A sanctuary for the forgotten."</h2>
                    <p>
                        "What began as a small community effort has evolved into a state-of-the-art facility. "
                        "We focus on the \"unadoptables\", the seniors, the injured and the traumatized, "
                        "giving them the time they need to heal."
                    </p>
                </div>

                <div class="story-block">
                    <h2>"A promise kept to every tail."</h2>
                    <p>
                        "We are a strict no-kill organization. Once an animal enters our doors, they are family. "
                        "Whether it takes two weeks or two years to find their perfect match, they are safe with us."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatsSection() -> impl IntoView {
    let section = use_reveal::<html::Section>(DEFAULT_REVEAL_THRESHOLD);

    view! {
        <section node_ref=section.node_ref class="about-stats">
            <div class="section-heading">
                <h2>"Proof of Compassion"</h2>
                <p>"Numbers don't lie, but they can't capture the purrs and tail wags behind them."</p>
            </div>

            <div class="stats-grid">
                {STATS.iter().map(|(number, label, delay)| view! {
                    <StatCard number=*number label=*label visible=section.visible delay=*delay />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    let section = use_reveal::<html::Section>(DEFAULT_REVEAL_THRESHOLD);

    view! {
        <section node_ref=section.node_ref class=section.class("about-cta reveal zoom-in")>
            <div class="cta-arc" aria-hidden="true"></div>

            <h2 class="cta-title">
                "Their future starts " <br class="desktop-only" /> "with you."
            </h2>
            <p class="cta-lead">
                "Every donation feeds a hungry belly. Every volunteer hour comforts a lonely soul. "
                "Join the movement today."
            </p>
            <A href="/pets" attr:class="light-button">"Adopt a Best Friend"</A>
        </section>
    }
}
