//! Leptos Reveal Utilities
//!
//! Scroll-driven presentation helpers for Leptos.
//! - `use_reveal`: one-shot "has been seen" flag backed by IntersectionObserver
//! - `use_parallax`: scroll-linked vertical offset for decorative layers
//!
//! The decision logic of both hooks lives in plain functions/structs so it can
//! be tested without a browser.

mod parallax;
mod reveal;

pub use parallax::{
    parallax_enabled, parallax_offset, use_parallax, PARALLAX_MIN_VIEWPORT_PX, PARALLAX_SPEED,
};
pub use reveal::{
    normalize_threshold, reveal_class, use_reveal, Reveal, RevealLatch, RevealStep,
    DEFAULT_REVEAL_THRESHOLD,
};
