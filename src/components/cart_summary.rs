//! Cart Summary Component

use cart_core::CartSummary;
use leptos::prelude::*;

use crate::context::use_cart_context;

/// Total quantity and total price
#[component]
pub fn CartSummaryPanel(summary: CartSummary) -> impl IntoView {
    let ctx = use_cart_context();
    let total_price = ctx.format_price(summary.total_price);

    view! {
        <p><strong>"Total Quantity:"</strong> " " {summary.total_quantity}</p>
        <p><strong>"Total Price:"</strong> " " {total_price}</p>
    }
}
