//! Cart Entity
//!
//! Insertion-ordered (product id, quantity) pairs, unique by id.
//! Quantities are always positive: an entry that would reach zero is removed.

use serde::{Deserialize, Serialize};

use super::product::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl From<Vec<CartEntry>> for Cart {
    fn from(entries: Vec<CartEntry>) -> Self {
        Cart::from_entries(entries)
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw entries, dropping zero quantities and merging
    /// duplicate ids into their first occurrence
    pub fn from_entries(entries: impl IntoIterator<Item = CartEntry>) -> Self {
        let mut cart = Cart::new();
        for entry in entries {
            if entry.quantity == 0 {
                continue;
            }
            match cart.entry_mut(entry.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity)
                }
                None => cart.entries.push(entry),
            }
        }
        cart
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Increment an existing entry by one. Returns false if the id is not in the cart.
    pub fn increment(&mut self, id: ProductId) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Append a new entry with quantity 1 (no-op if already present)
    pub fn push_new(&mut self, id: ProductId) {
        if self.get(id).is_none() {
            self.entries.push(CartEntry { id, quantity: 1 });
        }
    }

    /// Add `delta` to an entry's quantity, removing it when the result is <= 0.
    /// Returns the new quantity (0 when removed), or `None` if the id is not in the cart.
    pub fn apply_delta(&mut self, id: ProductId, delta: i32) -> Option<u32> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let updated = i64::from(self.entries[index].quantity) + i64::from(delta);
        if updated <= 0 {
            self.entries.remove(index);
            return Some(0);
        }
        let quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        self.entries[index].quantity = quantity;
        Some(quantity)
    }

    /// Sum of all quantities (the cart count indicator figure)
    pub fn total_quantity(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }
}
