//! Site Configuration
//!
//! Compile-time settings shared across pages.

pub const SITE_TITLE: &str = "Animal Care";
pub const SITE_DESCRIPTION: &str = "create unforgettable bonds with your perfect pet match";

/// Main navigation (label, href)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Pets", "/pets"),
    ("Donate", "/donate"),
];

/// Preset donation buttons, in dollars
pub const PRESET_AMOUNTS: &[u32] = &[10, 25, 50, 100];

/// Amount selected when the donate page opens
pub const DEFAULT_DONATION: f64 = 25.0;

/// Reveal thresholds used by the pages
pub const REVEAL_BLOCK: f64 = 0.1;
pub const REVEAL_GRID: f64 = 0.2;

/// Delay between consecutive cards in a staggered reveal
pub const STAGGER_STEP_MS: u32 = 150;

/// Inline style for the `index`-th card of a staggered grid
pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms", index as u32 * STAGGER_STEP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0), "transition-delay: 0ms");
        assert_eq!(stagger_style(2), "transition-delay: 300ms");
    }

    #[test]
    fn test_nav_links_cover_main_routes() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(_, href)| *href).collect();
        assert_eq!(hrefs, vec!["/", "/about", "/pets", "/donate"]);
    }

    #[test]
    fn test_default_donation_is_a_preset() {
        assert!(PRESET_AMOUNTS.iter().any(|p| f64::from(*p) == DEFAULT_DONATION));
    }
}
