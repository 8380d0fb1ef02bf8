//! Cart Item Row Component
//!
//! One cart line with unit price and -/+ quantity controls.

use cart_core::CartLine;
use leptos::prelude::*;

use crate::assets::asset_url;
use crate::context::use_cart_context;

#[component]
pub fn CartItemRow(line: CartLine) -> impl IntoView {
    let ctx = use_cart_context();
    let id = line.product.id;
    let image = asset_url(&line.product.image);
    let alt = line.product.name.clone();
    let unit_price = ctx.format_price(u64::from(line.product.price));

    view! {
        <div class="cart-item">
            <img src=image alt=alt />
            <div class="cart-details">
                <h3>{line.product.name}</h3>
                <p>"Price: " {unit_price}</p>
                <div class="qty-controls">
                    <button
                        class="qty-btn"
                        title="Remove one"
                        on:click=move |_| ctx.update_quantity(id, -1)
                    >
                        "−"
                    </button>
                    <span class="qty">{line.quantity}</span>
                    <button
                        class="qty-btn"
                        title="Add one"
                        on:click=move |_| ctx.update_quantity(id, 1)
                    >
                        "+"
                    </button>
                </div>
            </div>
        </div>
    }
}
