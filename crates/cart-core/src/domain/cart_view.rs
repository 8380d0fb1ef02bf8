//! Cart View Model
//!
//! Resolves cart entries against the catalog and computes the totals shown
//! on the cart page.

use super::cart::Cart;
use super::catalog::Catalog;
use super::product::Product;

/// One renderable cart row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub total_quantity: u64,
    pub total_price: u64,
}

/// Everything the cart page needs. `summary` is `None` for an empty cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub summary: Option<CartSummary>,
}

impl CartView {
    pub fn build(catalog: &Catalog, cart: &Cart) -> Self {
        if cart.is_empty() {
            return Self::default();
        }

        // Dangling ids are skipped, not reported
        let lines: Vec<CartLine> = cart
            .entries()
            .iter()
            .filter_map(|entry| {
                catalog.find(entry.id).map(|product| CartLine {
                    product: product.clone(),
                    quantity: entry.quantity,
                })
            })
            .collect();

        let summary = CartSummary {
            total_quantity: cart.total_quantity(),
            total_price: lines.iter().map(CartLine::subtotal).sum(),
        };

        Self {
            lines,
            summary: Some(summary),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartEntry, ProductId};

    fn pastry_shop() -> Catalog {
        Catalog::pastry_shop().expect("built-in ids are unique")
    }

    fn cart_of(pairs: &[(u32, u32)]) -> Cart {
        Cart::from_entries(pairs.iter().map(|&(id, quantity)| CartEntry {
            id: ProductId(id),
            quantity,
        }))
    }

    #[test]
    fn test_aggregates() {
        let view = CartView::build(&pastry_shop(), &cart_of(&[(1, 2), (2, 3)]));
        assert_eq!(
            view.summary,
            Some(CartSummary {
                total_quantity: 5,
                total_price: 5400,
            })
        );
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].product.name, "Berries Pestry");
        assert_eq!(view.lines[1].subtotal(), 3000);
    }

    #[test]
    fn test_empty_cart_has_no_summary() {
        let view = CartView::build(&pastry_shop(), &Cart::new());
        assert!(view.is_empty());
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_dangling_entries_skipped() {
        let view = CartView::build(&pastry_shop(), &cart_of(&[(42, 3), (3, 1)]));
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].product.id, ProductId(3));
        let summary = view.summary.expect("non-empty cart has a summary");
        assert_eq!(summary.total_price, 800);
        assert_eq!(summary.total_quantity, 4);
    }
}
