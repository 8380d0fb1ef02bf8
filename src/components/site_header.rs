//! Site Header Component
//!
//! Brand, navigation between the two pages and the cart count.

use leptos::prelude::*;

use crate::components::CartCountBadge;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_mode::ViewMode;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let store = use_app_store();

    let nav_class = move |mode: ViewMode| {
        if store.view_mode().get() == mode { "nav-link active" } else { "nav-link" }
    };

    view! {
        <header class="site-header">
            <a class="brand" href=ViewMode::Listing.href()>"Pastry Shop"</a>
            <nav class="site-nav">
                <a class=move || nav_class(ViewMode::Listing) href=ViewMode::Listing.href()>
                    "Shop"
                </a>
                <a class=move || nav_class(ViewMode::Cart) href=ViewMode::Cart.href()>
                    "Cart "
                    <CartCountBadge />
                </a>
            </nav>
        </header>
    }
}
