//! Repository Layer
//!
//! Key-value persistence abstractions and the cart repository built on them.

mod traits;
mod memory;
mod cart_repo;

#[cfg(test)]
mod tests;

pub use traits::{KeyValueStore, StorageError, StorageResult};
pub use memory::MemoryStore;
pub use cart_repo::CartRepository;
