//! Pet Detail Page
//!
//! Resolves `:id` against the catalog; unknown ids get a fallback view.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::set_page_title;
use crate::catalog::find_pet;
use crate::components::InfoBadge;
use crate::models::Pet;

#[component]
pub fn PetDetailPage() -> impl IntoView {
    let params = use_params_map();
    let lookup = Memo::new(move |_| {
        let raw = params.with(|p| p.get("id")).unwrap_or_default();
        find_pet(&raw)
    });

    move || match lookup.get() {
        Ok(pet) => {
            set_page_title(Some(pet.name));
            view! { <PetDetails pet=pet /> }.into_any()
        }
        Err(err) => {
            log::warn!("[PET] {}", err);
            set_page_title(Some("Pet Not Found"));
            view! { <PetNotFound /> }.into_any()
        }
    }
}

#[component]
fn PetDetails(pet: &'static Pet) -> impl IntoView {
    let on_adopt = move |_| {
        log::info!("[PET] adoption interest in #{} {}", pet.id, pet.name);
    };

    view! {
        <div class="page pet-detail-page">
            <div class="pet-detail">
                // Image
                <div class="pet-detail-media">
                    <img src=pet.image alt=pet.name class="cover-image" />
                </div>

                // Details
                <div class="pet-detail-body">
                    <div>
                        <A href="/pets" attr:class="back-link">
                            <span>"←"</span> " Back to Pets"
                        </A>
                        <h1 class="pet-detail-name">{pet.name}</h1>
                        <p class="pet-detail-breed">{pet.breed}</p>
                    </div>

                    <div class="pet-detail-badges">
                        <InfoBadge label="Age" value=pet.age />
                        <InfoBadge label="Gender" value=pet.gender.as_str() />
                    </div>

                    <p class="pet-detail-bio">{pet.bio}</p>

                    <button type="button" class="adopt-button" on:click=on_adopt>
                        "Adopt " {pet.name} " Now"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PetNotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1 class="not-found-title">"Pet Not Found 😕"</h1>
            <A href="/pets" attr:class="outline-button">"Go Back to Pets"</A>
        </div>
    }
}
