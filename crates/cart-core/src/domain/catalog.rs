//! Product Catalog
//!
//! Fixed, ordered list of products. Built once at startup, never mutated.

use std::collections::HashSet;

use super::entity::{DomainError, DomainResult, Entity};
use super::product::{Product, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::InvalidInput(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The shop's built-in pastry catalog
    pub fn pastry_shop() -> DomainResult<Self> {
        Self::new(vec![
            Product::new(1, "Berries Pestry", 1200, "assets/beries pestry.jpg"),
            Product::new(2, "Chocolate Pestry", 1000, "assets/brown pestry.jpg"),
            Product::new(3, "Chees Pestry", 800, "assets/chees mint pestry.jpg"),
            Product::new(4, "Berries Cake", 2000, "assets/berries cake.jpg"),
        ])
    }

    /// Resolve a product id. `None` means the caller should skip the entry.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Products in display order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
