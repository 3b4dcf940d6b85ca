//! Donate Page
//!
//! Story column with staggered impact cards, plus a sticky donation form
//! driven by the donation store.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::use_reveal;
use reactive_stores::Store;

use super::set_page_title;
use crate::components::ImpactCard;
use crate::config::{stagger_style, PRESET_AMOUNTS, REVEAL_BLOCK, REVEAL_GRID};
use crate::models::DonationFrequency;
use crate::store::{
    donate_label, format_amount, is_preset_selected, parse_custom_amount, settled_draft,
    store_apply_custom, store_select_preset, store_set_frequency, use_donation_store,
    DonationState, DonationStateStoreFields, DonationStore,
};

/// What each gift buys (icon, title, description)
const IMPACT: &[(&str, &str, &str)] = &[
    ("💊", "Medical Care", "$50 provides essential vaccinations for one rescue puppy."),
    ("🍲", "Nutritious Food", "$25 feeds a large dog for two full weeks."),
    ("🏠", "Safe Shelter", "$100 keeps our heating running for the entire winter month."),
    ("🎾", "Rehabilitation", "$10 buys toys and treats to help traumatized pets learn to trust."),
];

/// Frequency tabs (value, label)
const FREQUENCIES: &[(DonationFrequency, &str)] = &[
    (DonationFrequency::OneTime, "Give Once"),
    (DonationFrequency::Monthly, "Monthly ❤️"),
];

#[component]
pub fn DonatePage() -> impl IntoView {
    set_page_title(Some("Donate"));

    let store: DonationStore = Store::new(DonationState::default());
    provide_context(store);

    let story = use_reveal::<html::Div>(REVEAL_BLOCK);
    let grid = use_reveal::<html::Div>(REVEAL_GRID);

    view! {
        <div class="page donate-page">
            <div class="donate-layout">
                // Left: story and impact
                <div class="donate-story">
                    <div node_ref=story.node_ref class=story.class("reveal fade-up")>
                        <div class="donate-intro">
                            <span class="eyebrow">"Make a Difference"</span>
                            <h1 class="donate-title">
                                "Help us save " <br />
                                <span class="accent-word">"more lives."</span>
                            </h1>
                            <p class="donate-lead">
                                "We rely 100% on donations from people like you. Your contribution provides "
                                "medical care, food, and shelter for animals who have nowhere else to go."
                            </p>
                        </div>

                        <div class="donate-photo">
                            <img src="/milo.png" alt="Happy dog" class="cover-image" />
                            <div class="donate-photo-caption">
                                <p>"Milo found his home thanks to donors like you."</p>
                            </div>
                        </div>
                    </div>

                    <div node_ref=grid.node_ref class="impact-grid">
                        {IMPACT.iter().enumerate().map(|(index, (icon, title, desc))| view! {
                            <div style=stagger_style(index) class=grid.class("reveal rise")>
                                <ImpactCard icon=*icon title=*title desc=*desc />
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                // Right: sticky form
                <div class="donate-form-column">
                    <DonationForm />
                </div>
            </div>
        </div>
    }
}

/// Frequency tabs, preset grid, custom amount and total
#[component]
fn DonationForm() -> impl IntoView {
    let store = use_donation_store();
    let panel = use_reveal::<html::Div>(REVEAL_BLOCK);

    let label = move || donate_label(store.amount().get(), store.frequency().get());

    let on_donate = move |_| {
        // No payment backend: record the intent locally only
        log::info!("[DONATE] {} ({})", label(), store.frequency().get_untracked().as_str());
    };

    view! {
        <div node_ref=panel.node_ref class=panel.class("donate-panel reveal slide-in")>
            <div class="frequency-tabs">
                {FREQUENCIES.iter().map(|(frequency, text)| {
                    let frequency = *frequency;
                    let class = move || {
                        if store.frequency().get() == frequency {
                            format!("frequency-tab active {}", frequency.as_str())
                        } else {
                            "frequency-tab".to_string()
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            on:click=move |_| store_set_frequency(&store, frequency)
                        >
                            {*text}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="preset-grid">
                {PRESET_AMOUNTS.iter().copied().map(|preset| {
                    let class = move || {
                        if is_preset_selected(store.amount().get(), preset) {
                            "preset-button selected"
                        } else {
                            "preset-button"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            on:click=move |_| store_select_preset(&store, preset)
                        >
                            "$" {preset}
                        </button>
                    }
                }).collect_view()}
            </div>

            <CustomAmount />

            <button type="button" class="donate-button" on:click=on_donate>
                {label}
            </button>

            <div class="trust-footer">
                <svg class="lock-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"></path>
                </svg>
                "Secure SSL Payment"
            </div>
        </div>
    }
}

/// Free-form amount field
///
/// Keeps its own text so partially typed numbers are not rewritten under the
/// cursor; preset clicks are mirrored into it and clamped input is settled on blur.
#[component]
fn CustomAmount() -> impl IntoView {
    let store = use_donation_store();
    let (draft, set_draft) = signal(format_amount(store.amount().get_untracked()));

    Effect::new(move |_| {
        let amount = store.amount().get();
        if parse_custom_amount(&draft.get_untracked()) != Some(amount) {
            set_draft.set(format_amount(amount));
        }
    });

    view! {
        <div class="custom-amount">
            <span class="currency">"$"</span>
            <input
                type="number"
                min="0"
                step="any"
                class="custom-amount-input"
                placeholder="Custom Amount"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    set_draft.set(raw.clone());
                    store_apply_custom(&store, &raw);
                }
                on:blur=move |_| {
                    let settled = settled_draft(&draft.get_untracked(), store.amount().get_untracked());
                    set_draft.set(settled);
                }
            />
        </div>
    }
}
