//! Cart Count Badge Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Total units in the cart
#[component]
pub fn CartCountBadge() -> impl IntoView {
    let store = use_app_store();
    let count = move || store.cart().read().total_quantity();

    view! {
        <span id="cart-count" class="cart-count">{count}</span>
    }
}
