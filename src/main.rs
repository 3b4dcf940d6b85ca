//! Animal Care Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod error;
mod models;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("[APP] starting {}", config::SITE_TITLE);
    mount_to_body(App);
}
