//! Repository Integration Tests
//!
//! Tests for CartRepository over the in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{Cart, CartEntry, DomainError, ProductId};
    use crate::repository::{CartRepository, KeyValueStore, MemoryStore, StorageError, StorageResult};

    /// Backend that refuses every call
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("no window".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Rejected("quota exceeded".to_string()))
        }
    }

    fn sample_cart() -> Cart {
        Cart::from_entries(vec![
            CartEntry { id: ProductId(1), quantity: 2 },
            CartEntry { id: ProductId(4), quantity: 1 },
        ])
    }

    #[test]
    fn test_absent_cart_is_none() {
        let repo = CartRepository::new(MemoryStore::new(), "cart");
        assert_eq!(repo.get().expect("get failed"), None);
    }

    #[test]
    fn test_null_cart_is_none() {
        let repo = CartRepository::new(MemoryStore::with_entry("cart", "null"), "cart");
        assert_eq!(repo.get().expect("get failed"), None);
    }

    #[test]
    fn test_put_then_get() {
        let repo = CartRepository::new(MemoryStore::new(), "cart");
        repo.put(&sample_cart()).expect("put failed");
        assert_eq!(repo.get().expect("get failed"), Some(sample_cart()));
    }

    #[test]
    fn test_idempotent_load() {
        let repo = CartRepository::new(
            MemoryStore::with_entry("cart", r#"[{"id":2,"quantity":5},{"id":1,"quantity":1}]"#),
            "cart",
        );
        let first = repo.get().expect("get failed");
        let second = repo.get().expect("get failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_save_of_load_keeps_representation() {
        let stored = r#"[{"id":3,"quantity":7},{"id":1,"quantity":2}]"#;
        let repo = CartRepository::new(MemoryStore::with_entry("cart", stored), "cart");

        let cart = repo.get().expect("get failed").expect("cart present");
        repo.put(&cart).expect("put failed");

        assert_eq!(repo.store().raw("cart").as_deref(), Some(stored));
    }

    #[test]
    fn test_corrupt_cart_is_error() {
        let repo = CartRepository::new(MemoryStore::with_entry("cart", "[{\"id\":"), "cart");
        assert!(matches!(repo.get(), Err(DomainError::Corrupt(_))));
    }

    #[test]
    fn test_backend_failures_surface_as_storage_errors() {
        let repo = CartRepository::new(BrokenStore, "cart");
        assert!(matches!(repo.get(), Err(DomainError::Storage(_))));
        assert!(matches!(repo.put(&sample_cart()), Err(DomainError::Storage(_))));
    }
}
