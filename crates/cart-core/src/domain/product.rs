//! Product Entity
//!
//! An immutable catalog entry.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Product identifier, stored as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price in whole rupees
    pub price: u32,
    /// Path of the static image asset
    pub image: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: u32, image: impl Into<String>) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
