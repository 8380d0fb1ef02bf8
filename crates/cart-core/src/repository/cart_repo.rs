//! Cart Repository
//!
//! Reads and writes the whole cart as one JSON text value.

use log::debug;

use crate::domain::{Cart, DomainError, DomainResult};
use super::traits::KeyValueStore;

#[derive(Clone)]
pub struct CartRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted cart
    ///
    /// `Ok(None)` when nothing was ever saved, `Err(Corrupt)` when the text
    /// does not decode.
    pub fn get(&self) -> DomainResult<Option<Cart>> {
        let Some(text) = self.store.get(&self.key)? else {
            debug!("no cart stored under '{}'", self.key);
            return Ok(None);
        };
        // A stored `null` reads the same as a missing key
        let entries: Option<Cart> = serde_json::from_str(&text)
            .map_err(|e| DomainError::Corrupt(format!("cart under '{}': {}", self.key, e)))?;
        Ok(entries)
    }

    /// Overwrite the persisted cart with a single write
    pub fn put(&self, cart: &Cart) -> DomainResult<()> {
        let text = serde_json::to_string(cart)
            .map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        self.store.set(&self.key, &text)?;
        debug!("saved {} cart entries under '{}'", cart.len(), self.key);
        Ok(())
    }
}
