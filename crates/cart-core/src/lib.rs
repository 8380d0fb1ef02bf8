//! Pastry Cart Core
//!
//! Layered architecture:
//! - domain: Products, catalog, cart and the cart view model
//! - repository: Key-value persistence abstractions and implementations
//! - service: Cart operations (load, add, update quantity)

pub mod config;
pub mod domain;
pub mod repository;
pub mod service;

pub use config::CartConfig;
pub use domain::{
    Cart, CartEntry, CartLine, CartSummary, CartView, Catalog, DomainError, DomainResult, Entity,
    Product, ProductId,
};
pub use repository::{CartRepository, KeyValueStore, MemoryStore, StorageError, StorageResult};
pub use service::{CartChange, CartService};
