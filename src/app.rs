//! Pastry Cart Frontend App
//!
//! Picks the page once at startup and renders it under the shared header.

use std::sync::Arc;

use cart_core::{CartConfig, CartService, Catalog};
use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;
use web_logger::LogHandle;

use crate::components::{CartPage, LogPanel, ProductListing, SiteHeader};
use crate::context::CartContext;
use crate::storage::LocalStorage;
use crate::store::AppState;
use crate::view_mode::{debug_requested, page_location, ViewMode};

#[component]
pub fn App(config: CartConfig, logs: Option<LogHandle>) -> impl IntoView {
    let (pathname, search) = page_location();
    let view_mode = ViewMode::detect(&pathname, &search);
    let log_panel = logs.filter(|_| debug_requested(&search));

    let catalog = Catalog::pastry_shop().unwrap_or_else(|e| {
        log::error!("built-in catalog rejected: {}", e);
        Catalog::default()
    });
    let service = CartService::new(LocalStorage, Arc::new(catalog), config);

    // Initial render reads the stored cart once; handlers reload on every event
    let store = Store::new(AppState::new(service.load(), view_mode));
    provide_context(store);
    let ctx = CartContext::new(store, service);
    provide_context(ctx);

    // Another tab saved the cart
    let _storage_listener = window_event_listener(ev::storage, move |_| ctx.reload());

    log::info!("rendering {:?} view", view_mode);

    view! {
        <div class="app-layout">
            <SiteHeader />
            <main class="main-content">
                {match view_mode {
                    ViewMode::Listing => view! { <ProductListing /> }.into_any(),
                    ViewMode::Cart => view! { <CartPage /> }.into_any(),
                }}
            </main>
            {log_panel.map(|logs| view! { <LogPanel logs=logs /> })}
        </div>
    }
}
