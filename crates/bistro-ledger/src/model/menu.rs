//! An entry in the restaurant's menu.
//!
//! Menu items are reference data: the [`Catalog`](crate::catalog::Catalog) owns
//! them and they are never mutated after startup. A [`CartLine`](crate::model::CartLine)
//! copies the fields it needs, so a cart never borrows from the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `id` - Stable identifier, unique within a catalog
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `category` - Category label (shared by several items)
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}
