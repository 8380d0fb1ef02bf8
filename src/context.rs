//! Application Context
//!
//! Cart handlers shared with every component via the Leptos Context API.

use cart_core::{Cart, CartService, CartView, Product, ProductId};
use leptos::prelude::*;

use crate::storage::LocalStorage;
use crate::store::{store_set_cart, AppStore};

#[derive(Clone, Copy)]
pub struct CartContext {
    store: AppStore,
    service: StoredValue<CartService<LocalStorage>>,
}

impl CartContext {
    pub fn new(store: AppStore, service: CartService<LocalStorage>) -> Self {
        Self {
            store,
            service: StoredValue::new(service),
        }
    }

    /// "Add to Cart" handler; the count badge refreshes from the saved cart
    pub fn add_item(&self, id: ProductId) {
        let change = self.service.with_value(|svc| svc.add_item(id));
        store_set_cart(&self.store, change.cart);
    }

    /// +/- handler on the cart page
    pub fn update_quantity(&self, id: ProductId, delta: i32) {
        let change = self.service.with_value(|svc| svc.update_quantity(id, delta));
        if change.applied {
            store_set_cart(&self.store, change.cart);
        }
    }

    /// Re-read storage into the store
    pub fn reload(&self) {
        let cart = self.service.with_value(|svc| svc.load());
        store_set_cart(&self.store, cart);
    }

    /// Catalog products in display order
    pub fn products(&self) -> Vec<Product> {
        self.service
            .with_value(|svc| svc.catalog().iter().cloned().collect())
    }

    pub fn cart_view(&self, cart: &Cart) -> CartView {
        self.service
            .with_value(|svc| CartView::build(svc.catalog(), cart))
    }

    /// Price with the configured currency label
    pub fn format_price(&self, amount: u64) -> String {
        self.service.with_value(|svc| svc.config().format_price(amount))
    }
}

/// Get the cart context
pub fn use_cart_context() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}
