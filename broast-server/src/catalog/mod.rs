//! Menu catalog
//!
//! Read-only list of menu entries, loaded once at startup. The catalog is
//! the join target for cart quantities; it never mutates after load.

mod seed;

use std::collections::HashMap;

use serde::Deserialize;
use shared::models::{Category, MenuItem};

/// Sort order for menu listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
}

/// The read-only menu catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<MenuItem>,
    by_id: HashMap<String, usize>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a catalog from a list of items
    ///
    /// Category order follows first appearance; the "All" pseudo-category
    /// is prepended.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.clone(), idx))
            .collect();

        let mut categories = vec![Category::ALL.to_string()];
        for item in &items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }

        Self {
            items,
            by_id,
            categories,
        }
    }

    /// The built-in storefront menu
    pub fn seed() -> Self {
        Self::new(seed::menu_items())
    }

    /// Look up a single item by id
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    /// All items, in menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Category names, starting with "All"
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Items in a category ("All" matches everything), sorted as requested
    pub fn items_in_category(&self, category: &str, sort: SortBy) -> Vec<&MenuItem> {
        let mut items: Vec<&MenuItem> = self
            .items
            .iter()
            .filter(|item| category == Category::ALL || item.category == category)
            .collect();

        match sort {
            SortBy::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
            SortBy::PriceLow => {
                items.sort_by(|a, b| a.price.total_cmp(&b.price).then(a.name.cmp(&b.name)))
            }
            SortBy::PriceHigh => {
                items.sort_by(|a, b| b.price.total_cmp(&a.price).then(a.name.cmp(&b.name)))
            }
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.items().len(), 21);
        assert_eq!(
            catalog.categories(),
            &[
                "All",
                "Burgers",
                "Fried Chicken",
                "Finger Foods",
                "Fitness Food"
            ]
        );
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::seed();
        let item = catalog.get("1").expect("item 1 exists");
        assert_eq!(item.name, "Crispy Chicken Burger");
        assert_eq!(item.price, 180.0);
        assert!(catalog.get("999").is_none());
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::seed();
        let burgers = catalog.items_in_category("Burgers", SortBy::Name);
        assert_eq!(burgers.len(), 7);
        assert!(burgers.iter().all(|i| i.category == "Burgers"));

        let all = catalog.items_in_category("All", SortBy::Name);
        assert_eq!(all.len(), 21);
    }

    #[test]
    fn test_price_sort() {
        let catalog = Catalog::seed();
        let sorted = catalog.items_in_category("All", SortBy::PriceLow);
        for pair in sorted.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }

        let sorted = catalog.items_in_category("All", SortBy::PriceHigh);
        for pair in sorted.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
    }
}
