//! Pets Listing Page
//!
//! Header plus a staggered grid of pet cards.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::use_reveal;

use super::set_page_title;
use crate::catalog::PETS;
use crate::components::PetCard;
use crate::config::{stagger_style, REVEAL_BLOCK};

#[component]
pub fn PetsPage() -> impl IntoView {
    set_page_title(Some("Pets"));

    // Separate reveals so the grid staggers after the header
    let header = use_reveal::<html::Div>(REVEAL_BLOCK);
    let grid = use_reveal::<html::Div>(REVEAL_BLOCK);

    view! {
        <div class="page pets-page">
            <div class="page-inner">
                <div node_ref=header.node_ref class=header.class("pets-header reveal fade-up")>
                    <span class="eyebrow">"Waiting for Love"</span>
                    <h2 class="pets-title">
                        "Meet the " <span class="accent-word">"New Arrivals"</span>
                    </h2>
                    <p class="pets-lead">
                        "These cuties are waiting for a loving home. "
                        "Browse their profiles and find your perfect match today."
                    </p>
                </div>

                <div node_ref=grid.node_ref class="pet-grid">
                    {PETS.iter().enumerate().map(|(index, pet)| view! {
                        <div style=stagger_style(index) class=grid.class("reveal rise-far")>
                            <PetCard pet=pet />
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
