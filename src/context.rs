//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether the mobile menu is expanded - read
    pub menu_open: ReadSignal<bool>,
    /// Whether the mobile menu is expanded - write
    set_menu_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(menu_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            menu_open: menu_open.0,
            set_menu_open: menu_open.1,
        }
    }

    /// Flip the mobile menu
    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = !*open);
    }

    /// Collapse the mobile menu (link clicked or route changed)
    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.set_menu_open.set(false);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
