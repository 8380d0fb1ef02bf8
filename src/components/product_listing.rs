//! Product Listing Component
//!
//! Shop page: one card per catalog product, in catalog order.

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::context::use_cart_context;

#[component]
pub fn ProductListing() -> impl IntoView {
    let ctx = use_cart_context();
    let products = ctx.products();

    view! {
        <section class="shop-page">
            <h1>"Our Pastries"</h1>
            <div id="product-container" class="product-grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
        </section>
    }
}
