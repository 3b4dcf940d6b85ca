//! Pet Card Component
//!
//! Clickable adoption card linking to the pet's detail page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Pet;

/// Card for one pet in the listing grid
///
/// The whole card is a link. The heart control toggles a local favourite flag
/// and stops the click from following the link.
#[component]
pub fn PetCard(pet: &'static Pet) -> impl IntoView {
    let (liked, set_liked) = signal(false);

    let toggle_like = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_liked.update(|v| *v = !*v);
    };

    view! {
        <A href=pet.href() attr:class="pet-card">
            // Image
            <div class="pet-card-media">
                <img src=pet.image alt=pet.name class="pet-card-image" />

                <div
                    role="button"
                    class=move || if liked.get() { "like-button liked" } else { "like-button" }
                    aria-pressed=move || liked.get().to_string()
                    on:click=toggle_like
                >
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
                    </svg>
                </div>

                <div class="pet-card-gender">
                    <span class=pet.gender.badge_class()>{pet.gender.as_str()}</span>
                </div>
            </div>

            // Content
            <div class="pet-card-body">
                <div>
                    <div class="pet-card-title">
                        <h3>{pet.name}</h3>
                        <span class="pet-card-age">{pet.age}</span>
                    </div>
                    <p class="pet-card-breed">{pet.breed}</p>
                </div>

                <div class="pet-card-action">
                    "Meet " {pet.name}
                    <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M5 12h14" />
                        <path d="m12 5 7 7-7 7" />
                    </svg>
                </div>
            </div>
        </A>
    }
}
