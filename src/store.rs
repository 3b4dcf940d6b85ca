//! Donation State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the donate page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::DEFAULT_DONATION;
use crate::models::DonationFrequency;

/// Current donation selection
#[derive(Clone, Debug, PartialEq, Store)]
pub struct DonationState {
    /// Amount in dollars
    pub amount: f64,
    /// One-time or monthly
    pub frequency: DonationFrequency,
}

impl Default for DonationState {
    fn default() -> Self {
        Self {
            amount: DEFAULT_DONATION,
            frequency: DonationFrequency::OneTime,
        }
    }
}

/// Parse the custom amount field.
///
/// Empty means 0, negatives clamp to 0, anything non-numeric or non-finite is rejected.
pub fn parse_custom_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(value.max(0.0))
}

pub fn is_preset_selected(amount: f64, preset: u32) -> bool {
    amount == f64::from(preset)
}

/// Whole dollars print without decimals, anything else with cents
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Text the custom field settles to once it loses focus.
///
/// Clamped or rejected input is replaced by the amount actually in the store;
/// an empty field stays empty.
pub fn settled_draft(raw: &str, amount: f64) -> String {
    if raw.trim().is_empty() {
        String::new()
    } else {
        format_amount(amount)
    }
}

/// Donate button text, e.g. `Donate $50 / month`
pub fn donate_label(amount: f64, frequency: DonationFrequency) -> String {
    let suffix = frequency.suffix();
    if suffix.is_empty() {
        format!("Donate ${}", format_amount(amount))
    } else {
        format!("Donate ${} {}", format_amount(amount), suffix)
    }
}

/// Type alias for the store
pub type DonationStore = Store<DonationState>;

/// Get the donation store from context
pub fn use_donation_store() -> DonationStore {
    expect_context::<DonationStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select one of the preset buttons
pub fn store_select_preset(store: &DonationStore, preset: u32) {
    log::debug!("[DONATE] preset ${} selected", preset);
    *store.amount().write() = f64::from(preset);
}

/// Apply raw input from the custom amount field
pub fn store_apply_custom(store: &DonationStore, raw: &str) {
    match parse_custom_amount(raw) {
        Some(amount) => *store.amount().write() = amount,
        None => log::debug!("[DONATE] ignoring non-numeric amount {:?}", raw),
    }
}

/// Switch between one-time and monthly
pub fn store_set_frequency(store: &DonationStore, frequency: DonationFrequency) {
    *store.frequency().write() = frequency;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PRESET_AMOUNTS;

    fn highlighted(amount: f64) -> Vec<u32> {
        PRESET_AMOUNTS
            .iter()
            .copied()
            .filter(|p| is_preset_selected(amount, *p))
            .collect()
    }

    #[test]
    fn test_default_state() {
        let state = DonationState::default();
        assert_eq!(state.amount, 25.0);
        assert_eq!(state.frequency, DonationFrequency::OneTime);
        assert_eq!(highlighted(state.amount), vec![25]);
    }

    #[test]
    fn test_select_preset_sets_exact_amount() {
        let store = Store::new(DonationState::default());
        store_select_preset(&store, 50);
        let amount = store.amount().get_untracked();
        assert_eq!(amount, 50.0);
        assert_eq!(highlighted(amount), vec![50]);
        assert_eq!(donate_label(amount, DonationFrequency::OneTime), "Donate $50");
    }

    #[test]
    fn test_custom_amount_clears_presets() {
        let store = Store::new(DonationState::default());
        store_apply_custom(&store, "75");
        let amount = store.amount().get_untracked();
        assert_eq!(amount, 75.0);
        assert!(highlighted(amount).is_empty());
        assert_eq!(donate_label(amount, DonationFrequency::OneTime), "Donate $75");
    }

    #[test]
    fn test_rejected_input_keeps_amount() {
        let store = Store::new(DonationState::default());
        store_select_preset(&store, 10);
        store_apply_custom(&store, "abc");
        assert_eq!(store.amount().get_untracked(), 10.0);

        store_apply_custom(&store, "-20");
        assert_eq!(store.amount().get_untracked(), 0.0);
    }

    #[test]
    fn test_frequency_changes_only_suffix() {
        let store = Store::new(DonationState::default());
        store_select_preset(&store, 100);
        store_set_frequency(&store, DonationFrequency::Monthly);
        assert_eq!(store.amount().get_untracked(), 100.0);
        assert_eq!(store.frequency().get_untracked(), DonationFrequency::Monthly);
        assert_eq!(donate_label(100.0, DonationFrequency::Monthly), "Donate $100 / month");

        store_set_frequency(&store, DonationFrequency::OneTime);
        assert_eq!(store.amount().get_untracked(), 100.0);
        assert_eq!(donate_label(100.0, DonationFrequency::OneTime), "Donate $100");
    }

    #[test]
    fn test_parse_custom_amount() {
        assert_eq!(parse_custom_amount("75"), Some(75.0));
        assert_eq!(parse_custom_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_custom_amount(""), Some(0.0));
        assert_eq!(parse_custom_amount("-20"), Some(0.0));
        assert_eq!(parse_custom_amount("abc"), None);
        assert_eq!(parse_custom_amount("NaN"), None);
        assert_eq!(parse_custom_amount("inf"), None);
    }

    #[test]
    fn test_large_amount_label_matches_input() {
        let amount = parse_custom_amount("100000000000000000000").unwrap();
        assert_eq!(
            donate_label(amount, DonationFrequency::OneTime),
            "Donate $100000000000000000000"
        );
    }

    #[test]
    fn test_settled_draft() {
        assert_eq!(settled_draft("-5", 0.0), "0");
        assert_eq!(settled_draft("12.5", 12.5), "12.50");
        assert_eq!(settled_draft("abc", 25.0), "25");
        assert_eq!(settled_draft("  ", 0.0), "");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(12.5), "12.50");
    }
}
