//! Small Presentational Cards
//!
//! Impact, stat and info badge cards used by the about, donate and pet pages.

use leptos::prelude::*;

/// Donation impact card (icon + title + description)
#[component]
pub fn ImpactCard(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="impact-card">
            <div class="impact-icon">{icon}</div>
            <div>
                <h3 class="impact-title">{title}</h3>
                <p class="impact-desc">{desc}</p>
            </div>
        </div>
    }
}

/// Headline number that pops in once its section is revealed
#[component]
pub fn StatCard(
    number: &'static str,
    label: &'static str,
    visible: ReadSignal<bool>,
    /// Delay modifier class, e.g. "delay-100"
    delay: &'static str,
) -> impl IntoView {
    let class = move || {
        let state = if visible.get() { " is-visible" } else { "" };
        format!("stat-card reveal pop-in {}{}", delay, state)
    };

    view! {
        <div class=class>
            <h3 class="stat-number">{number}</h3>
            <p class="stat-label">{label}</p>
        </div>
    }
}

/// Label/value pill on the pet detail page
#[component]
pub fn InfoBadge(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="info-badge">
            <p class="info-badge-label">{label}</p>
            <p class="info-badge-value">{value}</p>
        </div>
    }
}

/// Hand-drawn underline under hero headings
#[component]
pub fn Squiggle(#[prop(default = 4)] stroke_width: u8) -> impl IntoView {
    view! {
        <svg class="squiggle" viewBox="0 0 200 9" fill="none" preserveAspectRatio="none" aria-hidden="true">
            <path
                d="M2.00025 6.99997C2.00025 6.99997 101 -0.500003 198 2.49997"
                stroke="currentColor"
                stroke-width=stroke_width.to_string()
                stroke-linecap="round"
            />
        </svg>
    }
}
