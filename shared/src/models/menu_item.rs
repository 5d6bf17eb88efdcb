//! Menu Item Model

use serde::{Deserialize, Serialize};

/// A single entry on the menu
///
/// Menu items are immutable once loaded; the catalog is read-only for the
/// lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_popular: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            image: String::new(),
            is_popular: false,
            is_new: false,
        }
    }
}

/// Menu category descriptor
///
/// The "All" pseudo-category is synthesized by the catalog and matches
/// every item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub const ALL: &str = "All";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
