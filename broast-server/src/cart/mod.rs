//! Cart store
//!
//! In-memory mapping from item id to quantity, the single source of truth
//! for what a session is ordering. Line items and totals are derived by
//! joining against the catalog at read time; nothing here is cached.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use shared::order::OrderLineItem;

use crate::catalog::Catalog;
use crate::utils::money;

/// Placeholder name for cart entries whose id no longer resolves against
/// the catalog. Display degrades instead of erroring.
pub const UNKNOWN_ITEM_NAME: &str = "Unavailable item";

/// A session's cart: item id → quantity
///
/// Invariant: every present quantity is a positive integer. Entries are
/// deleted, never kept at zero.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    quantities: BTreeMap<String, u32>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the quantity for an item by 1, creating the entry at 1
    ///
    /// Unknown ids are tracked numerically; the join against the catalog
    /// resolves them at read time. Returns the new quantity.
    pub fn add(&mut self, item_id: &str) -> u32 {
        let entry = self.quantities.entry(item_id.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Decrement the quantity for an item by 1
    ///
    /// The entry is deleted entirely when the quantity would reach zero.
    /// Removing an absent item is a no-op. Returns the remaining quantity,
    /// or `None` when the entry is gone (or never existed).
    pub fn remove(&mut self, item_id: &str) -> Option<u32> {
        let quantity = self.quantities.get(item_id).copied()?;
        if quantity > 1 {
            self.quantities.insert(item_id.to_string(), quantity - 1);
            Some(quantity - 1)
        } else {
            self.quantities.remove(item_id);
            None
        }
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Quantity for a single item (0 when absent)
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    /// Total number of units across all entries
    pub fn item_count(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Raw quantities, in item-id order
    pub fn quantities(&self) -> &BTreeMap<String, u32> {
        &self.quantities
    }

    /// Join current quantities against the catalog
    ///
    /// Lazy, finite, restartable. Entries whose id is not in the catalog
    /// synthesize a zero-price placeholder line rather than erroring.
    pub fn line_items<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = OrderLineItem> + 'a {
        self.quantities.iter().map(|(id, &quantity)| {
            match catalog.get(id) {
                Some(item) => OrderLineItem {
                    id: id.clone(),
                    name: item.name.clone(),
                    price: item.price,
                    quantity,
                },
                None => OrderLineItem {
                    id: id.clone(),
                    name: UNKNOWN_ITEM_NAME.to_string(),
                    price: 0.0,
                    quantity,
                },
            }
        })
    }

    /// Σ price × quantity over current entries, at money precision
    pub fn subtotal(&self, catalog: &Catalog) -> Decimal {
        money::round_money(
            self.line_items(catalog)
                .map(|line| money::line_total(line.price, line.quantity))
                .sum(),
        )
    }

    /// subtotal + delivery fee
    pub fn total(&self, catalog: &Catalog, delivery_fee: Decimal) -> Decimal {
        money::round_money(self.subtotal(catalog) + delivery_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::seed()
    }

    #[test]
    fn test_add_creates_at_one_and_increments() {
        let mut cart = CartStore::new();
        assert_eq!(cart.add("1"), 1);
        assert_eq!(cart.add("1"), 2);
        assert_eq!(cart.quantity("1"), 2);
    }

    #[test]
    fn test_remove_decrements_and_deletes_at_zero() {
        let mut cart = CartStore::new();
        cart.add("1");
        cart.add("1");

        assert_eq!(cart.remove("1"), Some(1));
        assert_eq!(cart.remove("1"), None);
        assert!(cart.is_empty());
        assert!(!cart.quantities().contains_key("1"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartStore::new();
        assert_eq!(cart.remove("1"), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantities_always_positive() {
        let mut cart = CartStore::new();
        // Arbitrary interleaving of add/remove must never leave a
        // zero or negative quantity behind
        let ops: &[(&str, bool)] = &[
            ("1", true),
            ("1", true),
            ("8", true),
            ("1", false),
            ("8", false),
            ("8", false),
            ("13", true),
            ("1", false),
            ("1", false),
        ];
        for (id, is_add) in ops {
            if *is_add {
                cart.add(id);
            } else {
                cart.remove(id);
            }
            assert!(cart.quantities().values().all(|&q| q > 0));
        }
    }

    #[test]
    fn test_round_trip_restores_prior_state() {
        let mut cart = CartStore::new();
        cart.add("8");
        let before = cart.quantities().clone();

        for _ in 0..3 {
            cart.add("1");
        }
        for _ in 0..3 {
            cart.remove("1");
        }

        assert_eq!(cart.quantities(), &before);
        assert!(!cart.quantities().contains_key("1"));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add("1");
        cart.add("8");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_subtotal_and_total() {
        // cart {"1": 2, "8": 1}, both priced 180 → subtotal 540, +50 fee → 590
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add("1");
        cart.add("1");
        cart.add("8");

        assert_eq!(cart.subtotal(&catalog), Decimal::from(540));
        assert_eq!(
            cart.total(&catalog, Decimal::from(50)),
            Decimal::from(590)
        );
    }

    #[test]
    fn test_unknown_item_synthesizes_placeholder() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add("does-not-exist");
        cart.add("1");

        let lines: Vec<_> = cart.line_items(&catalog).collect();
        let unknown = lines
            .iter()
            .find(|l| l.id == "does-not-exist")
            .expect("placeholder line present");
        assert_eq!(unknown.name, UNKNOWN_ITEM_NAME);
        assert_eq!(unknown.price, 0.0);
        assert_eq!(unknown.quantity, 1);

        // Placeholder lines contribute nothing to the subtotal
        assert_eq!(cart.subtotal(&catalog), Decimal::from(180));
    }

    #[test]
    fn test_line_items_restartable() {
        let catalog = catalog();
        let mut cart = CartStore::new();
        cart.add("1");
        cart.add("8");

        let first: Vec<_> = cart.line_items(&catalog).collect();
        let second: Vec<_> = cart.line_items(&catalog).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_item_count() {
        let mut cart = CartStore::new();
        cart.add("1");
        cart.add("1");
        cart.add("8");
        assert_eq!(cart.item_count(), 3);
    }
}
