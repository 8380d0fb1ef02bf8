//! Repository Layer - Core Traits
//!
//! Defines the key-value backend the cart is persisted through.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::DomainError;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend could not be reached (no window, storage disabled)
    Unavailable(String),
    /// The backend refused the operation (quota exceeded, security error)
    Rejected(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {}", msg),
            StorageError::Rejected(msg) => write!(f, "storage rejected operation: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::Storage(err.to_string())
    }
}

/// Synchronous text key-value store
///
/// `set` overwrites unconditionally in a single call.
pub trait KeyValueStore {
    /// Read the stored text, `None` when the key was never written
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the stored text
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
