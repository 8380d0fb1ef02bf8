//! UI Components
//!
//! Header, product listing and cart page components.

mod site_header;
mod cart_count_badge;
mod product_card;
mod product_listing;
mod cart_item_row;
mod cart_summary;
mod cart_page;
mod log_panel;

pub use site_header::SiteHeader;
pub use cart_count_badge::CartCountBadge;
pub use product_card::ProductCard;
pub use product_listing::ProductListing;
pub use cart_item_row::CartItemRow;
pub use cart_summary::CartSummaryPanel;
pub use cart_page::CartPage;
pub use log_panel::LogPanel;
