//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Mirrors the last saved cart for rendering; handlers never mutate it directly.

use cart_core::Cart;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::view_mode::ViewMode;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cart as last loaded from or saved to storage
    pub cart: Cart,
    /// Page selected at startup
    pub view_mode: ViewMode,
}

impl AppState {
    pub fn new(cart: Cart, view_mode: ViewMode) -> Self {
        Self { cart, view_mode }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the displayed cart, re-rendering every view that reads it
pub fn store_set_cart(store: &AppStore, cart: Cart) {
    *store.cart().write() = cart;
}
