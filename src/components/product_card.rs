//! Product Card Component

use cart_core::Product;
use leptos::prelude::*;

use crate::assets::asset_url;
use crate::context::use_cart_context;

/// Image, name and an "Add to Cart" button for one product
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_cart_context();
    let id = product.id;
    let image = asset_url(&product.image);
    let alt = product.name.clone();

    view! {
        <div class="card">
            <div class="card-img">
                <img src=image alt=alt />
            </div>
            <div class="card-details">
                <h3>{product.name}</h3>
                <button class="add-btn" on:click=move |_| ctx.add_item(id)>
                    "Add to Cart"
                </button>
            </div>
        </div>
    }
}
