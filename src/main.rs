//! Pastry Cart Frontend Entry Point

mod app;
mod assets;
mod components;
mod context;
mod storage;
mod store;
mod view_mode;

use app::App;
use cart_core::CartConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = CartConfig::default();
    let logs = match web_logger::init_logger(config.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            web_sys::console::warn_1(&format!("[APP] logger already set: {}", e).into());
            None
        }
    };

    mount_to_body(move || view! { <App config=config logs=logs /> });
}
