//! # Menu Catalog
//!
//! The catalog is the read-only list of purchasable items, supplied once at
//! startup. It keeps the order the provider gave, which is also the order the
//! menu is displayed in, and guarantees identifiers are unique.

use crate::deal::DealOfTheDay;
use crate::error::CatalogError;
use crate::model::{MenuItem, MenuItemId};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Selects which part of the menu to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// `"all"` selects everything, any other label selects that category.
    pub fn parse(label: &str) -> Self {
        if label == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    deal: Option<DealOfTheDay>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and negative prices.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: item.id,
                    price: item.price,
                });
            }
        }
        Ok(Self { items, deal: None })
    }

    /// The restaurant's built-in menu.
    pub fn house_menu() -> Self {
        let items = vec![
            MenuItem::new(1, "Burger", Decimal::new(899, 2), "Mains"),
            MenuItem::new(2, "Pizza", Decimal::new(1099, 2), "Mains"),
            MenuItem::new(3, "Salad", Decimal::new(699, 2), "Sides"),
            MenuItem::new(4, "Fries", Decimal::new(399, 2), "Sides"),
            MenuItem::new(5, "Soda", Decimal::new(199, 2), "Drinks"),
        ];
        Self { items, deal: None }
    }

    /// Parses a JSON array of menu items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(items)
    }

    /// Attaches a deal of the day.
    pub fn with_deal(mut self, deal: DealOfTheDay) -> Self {
        self.deal = Some(deal);
        self
    }

    pub fn deal(&self) -> Option<&DealOfTheDay> {
        self.deal.as_ref()
    }

    pub fn find(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Unique category labels, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&MenuItem> {
        match filter {
            CategoryFilter::All => self.items.iter().collect(),
            CategoryFilter::Category(category) => self
                .items
                .iter()
                .filter(|item| &item.category == category)
                .collect(),
        }
    }
}
