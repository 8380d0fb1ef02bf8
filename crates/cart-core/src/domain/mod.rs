//! Domain Layer
//!
//! Products, the static catalog, the cart and the cart view model.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod product;
mod catalog;
mod cart;
mod cart_view;

pub use entity::{Entity, DomainError, DomainResult};
pub use product::{Product, ProductId};
pub use catalog::Catalog;
pub use cart::{Cart, CartEntry};
pub use cart_view::{CartLine, CartSummary, CartView};
