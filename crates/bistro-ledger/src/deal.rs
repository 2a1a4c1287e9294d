//! Deal of the day.
//!
//! A single menu item can be promoted. Adding that item to a cart logs the
//! promotional message; the price is not affected.

use crate::model::MenuItemId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEAL_MESSAGE: &str = "Burger is our Deal of the Day! Enjoy this special offer!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealOfTheDay {
    #[serde(rename = "dealItemId", alias = "item_id")]
    pub item_id: MenuItemId,
    pub message: String,
}

impl DealOfTheDay {
    pub fn new(item_id: impl Into<MenuItemId>, message: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            message: message.into(),
        }
    }

    /// Parses the `{"dealItemId": .., "message": ..}` document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn applies_to(&self, id: MenuItemId) -> bool {
        self.item_id == id
    }
}

impl Default for DealOfTheDay {
    fn default() -> Self {
        Self::new(1, DEFAULT_DEAL_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deal_config() {
        let deal = DealOfTheDay::from_json(
            r#"{ "dealItemId": 1, "message": "Burger is our Deal of the Day! Enjoy this special offer!" }"#,
        )
        .unwrap();
        assert_eq!(deal, DealOfTheDay::default());
        assert!(deal.applies_to(MenuItemId(1)));
        assert!(!deal.applies_to(MenuItemId(2)));
    }

    #[test]
    fn test_parse_deal_config_rejects_garbage() {
        assert!(DealOfTheDay::from_json("{ not json").is_err());
    }
}
