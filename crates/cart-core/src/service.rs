//! Cart Service
//!
//! Every operation is load, mutate, save: storage is the only source of
//! truth between UI events. Failures degrade silently and are only logged.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::CartConfig;
use crate::domain::{Cart, Catalog, ProductId};
use crate::repository::{CartRepository, KeyValueStore};

/// Result of a mutating cart operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartChange {
    /// Cart as it stands after the operation
    pub cart: Cart,
    /// Whether the operation changed the cart
    pub applied: bool,
}

#[derive(Clone)]
pub struct CartService<S> {
    repo: CartRepository<S>,
    catalog: Arc<Catalog>,
    config: CartConfig,
}

impl<S: KeyValueStore> CartService<S> {
    pub fn new(store: S, catalog: Arc<Catalog>, config: CartConfig) -> Self {
        Self {
            repo: CartRepository::new(store, config.storage_key.clone()),
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// Load the cart, falling back to an empty one when nothing is stored or
    /// the stored text is unreadable
    pub fn load(&self) -> Cart {
        match self.repo.get() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("treating cart as empty: {}", e);
                Cart::new()
            }
        }
    }

    /// Persist the cart. Returns false if the backend failed.
    pub fn save(&self, cart: &Cart) -> bool {
        match self.repo.put(cart) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to save cart: {}", e);
                false
            }
        }
    }

    /// Add one unit of a product. Unknown products are ignored.
    pub fn add_item(&self, id: ProductId) -> CartChange {
        let mut cart = self.load();
        let applied = if cart.increment(id) {
            true
        } else if self.catalog.contains(id) {
            cart.push_new(id);
            true
        } else {
            debug!("ignoring add of unknown product {}", id);
            false
        };
        self.save(&cart);
        CartChange { cart, applied }
    }

    /// Change a product's quantity by `delta`, removing it at zero or below.
    /// Products not in the cart are ignored and nothing is written.
    pub fn update_quantity(&self, id: ProductId, delta: i32) -> CartChange {
        let mut cart = self.load();
        match cart.apply_delta(id, delta) {
            Some(quantity) => {
                debug!("product {} quantity now {}", id, quantity);
                self.save(&cart);
                CartChange { cart, applied: true }
            }
            None => {
                debug!("ignoring quantity update for product {} not in cart", id);
                CartChange { cart, applied: false }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartEntry, CartSummary, CartView};
    use crate::repository::{MemoryStore, StorageError, StorageResult};

    /// Backend whose reads and writes always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("no window".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Rejected("quota exceeded".to_string()))
        }
    }

    fn pastry_shop() -> Arc<Catalog> {
        Arc::new(Catalog::pastry_shop().expect("built-in ids are unique"))
    }

    fn service(store: &MemoryStore) -> CartService<&MemoryStore> {
        CartService::new(store, pastry_shop(), CartConfig::default())
    }

    #[test]
    fn test_add_then_count() {
        for product in pastry_shop().iter() {
            let store = MemoryStore::new();
            let svc = service(&store);
            for _ in 0..3 {
                svc.add_item(product.id);
            }
            let cart = svc.load();
            assert_eq!(cart.len(), 1);
            assert_eq!(cart.get(product.id).map(|e| e.quantity), Some(3));
            assert_eq!(cart.total_quantity(), 3);
        }
    }

    #[test]
    fn test_add_unknown_is_noop() {
        let store = MemoryStore::new();
        let svc = service(&store);
        svc.add_item(ProductId(1));
        let before = store.raw("cart");

        let change = svc.add_item(ProductId(99));
        assert!(!change.applied);
        assert_eq!(store.raw("cart"), before);
        assert_eq!(svc.load().total_quantity(), 1);
    }

    #[test]
    fn test_update_quantity_floor_removes() {
        let store = MemoryStore::new();
        let svc = service(&store);
        svc.add_item(ProductId(2));
        svc.add_item(ProductId(2));

        let change = svc.update_quantity(ProductId(2), 1);
        assert_eq!(change.cart.get(ProductId(2)).map(|e| e.quantity), Some(3));

        let change = svc.update_quantity(ProductId(2), -3);
        assert!(change.applied);
        assert!(svc.load().get(ProductId(2)).is_none());
        assert_eq!(store.raw("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let store = MemoryStore::with_entry("cart", r#"[{"id":1,"quantity":2}]"#);
        let svc = service(&store);

        let change = svc.update_quantity(ProductId(4), -1);
        assert!(!change.applied);
        assert_eq!(store.raw("cart").as_deref(), Some(r#"[{"id":1,"quantity":2}]"#));
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let store = MemoryStore::with_entry("cart", "{not json");
        let svc = service(&store);
        assert!(svc.load().is_empty());

        // The next mutation replaces the unreadable text
        svc.add_item(ProductId(3));
        assert_eq!(store.raw("cart").as_deref(), Some(r#"[{"id":3,"quantity":1}]"#));
    }

    #[test]
    fn test_cart_view_totals() {
        let store = MemoryStore::with_entry(
            "cart",
            r#"[{"id":1,"quantity":2},{"id":2,"quantity":3}]"#,
        );
        let svc = service(&store);
        let view = CartView::build(svc.catalog(), &svc.load());
        assert_eq!(
            view.summary,
            Some(CartSummary {
                total_quantity: 5,
                total_price: 5400,
            })
        );
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::new();
        let svc = CartService::new(
            &store,
            pastry_shop(),
            CartConfig::default().with_storage_key("shop-cart"),
        );
        svc.add_item(ProductId(1));
        assert!(store.raw("cart").is_none());
        assert!(store.raw("shop-cart").is_some());
    }

    #[test]
    fn test_unreadable_backend_loads_empty() {
        let svc = CartService::new(BrokenStore, pastry_shop(), CartConfig::default());
        assert!(svc.load().is_empty());
    }

    #[test]
    fn test_failed_save_still_reports_cart() {
        let svc = CartService::new(BrokenStore, pastry_shop(), CartConfig::default());
        assert!(!svc.save(&Cart::new()));

        let change = svc.add_item(ProductId(1));
        assert!(change.applied);
        assert_eq!(
            change.cart.entries(),
            &[CartEntry {
                id: ProductId(1),
                quantity: 1,
            }]
        );

        // Nothing was stored, so there is nothing to update
        let change = svc.update_quantity(ProductId(1), 1);
        assert!(!change.applied);
        assert!(change.cart.is_empty());
    }
}
