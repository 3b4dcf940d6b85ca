//! UI Components
//!
//! Reusable Leptos components.

mod cards;
mod footer;
mod form_field;
mod nav;
mod pet_card;

pub use cards::{ImpactCard, InfoBadge, Squiggle, StatCard};
pub use footer::Footer;
pub use form_field::FormField;
pub use nav::Nav;
pub use pet_card::PetCard;
