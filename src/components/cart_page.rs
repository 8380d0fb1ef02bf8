//! Cart Page Component
//!
//! Rebuilt in full from the current cart whenever it changes.

use leptos::prelude::*;

use crate::components::{CartItemRow, CartSummaryPanel};
use crate::context::use_cart_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_cart_context();
    let store = use_app_store();

    let cart_view = Memo::new(move |_| ctx.cart_view(&store.cart().read()));

    view! {
        <section class="cart-page">
            <h1>"Your Cart"</h1>
            <div id="cart-container" class="cart-items">
                {move || {
                    let current = cart_view.get();
                    if current.is_empty() {
                        view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
                    } else {
                        current
                            .lines
                            .into_iter()
                            .map(|line| view! { <CartItemRow line=line /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <div id="summary" class="cart-summary">
                {move || {
                    cart_view
                        .get()
                        .summary
                        .map(|summary| view! { <CartSummaryPanel summary=summary /> })
                }}
            </div>
        </section>
    }
}
