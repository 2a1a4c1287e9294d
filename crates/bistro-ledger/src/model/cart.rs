//! The shopping cart and its line items.
//!
//! A [`Cart`] keeps its lines in insertion order and holds at most one line per
//! [`MenuItemId`]. Every line has a quantity of at least one: the ledger removes
//! a line instead of letting it reach zero. The mutating helpers here are
//! crate-private so the only way to change a cart from outside is through
//! [`crate::ledger`]. Deserialization goes through [`Cart::try_from_lines`]
//! and refuses lines that break these rules.

use crate::error::LineError;
use crate::model::{MenuItem, MenuItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One menu item plus the quantity requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line for `item` with quantity 1.
    pub fn from_item(item: &MenuItem) -> Self {
        Self::with_quantity(item, 1)
    }

    pub fn with_quantity(item: &MenuItem, quantity: u32) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            category: item.category.clone(),
            quantity,
        }
    }

    /// Unit price times quantity, `None` if it overflows.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartLines")]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Wire shape of a cart, checked before it becomes a [`Cart`].
#[derive(Deserialize)]
struct CartLines {
    lines: Vec<CartLine>,
}

impl TryFrom<CartLines> for Cart {
    type Error = LineError;

    fn try_from(raw: CartLines) -> Result<Self, Self::Error> {
        Cart::try_from_lines(raw.lines)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from lines that already follow the cart rules.
    ///
    /// Unlike collecting into a cart, nothing is merged or skipped: a zero
    /// quantity, a negative price or a repeated id is an error.
    pub fn try_from_lines(lines: Vec<CartLine>) -> Result<Self, LineError> {
        let mut cart = Cart::new();
        for line in lines {
            if line.quantity == 0 {
                return Err(LineError::ZeroQuantity(line.id));
            }
            if line.price < Decimal::ZERO {
                return Err(LineError::NegativePrice {
                    id: line.id,
                    price: line.price,
                });
            }
            if cart.line(line.id).is_some() {
                return Err(LineError::DuplicateLine(line.id));
            }
            cart.lines.push(line);
        }
        Ok(cart)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Quantity of `id` in the cart, 0 when absent.
    pub fn quantity_of(&self, id: MenuItemId) -> u32 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub(crate) fn line_mut(&mut self, id: MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }

    pub(crate) fn position(&self, id: MenuItemId) -> Option<usize> {
        self.lines.iter().position(|line| line.id == id)
    }

    pub(crate) fn push(&mut self, line: CartLine) {
        debug_assert!(line.quantity >= 1);
        debug_assert!(self.line(line.id).is_none());
        self.lines.push(line);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> CartLine {
        self.lines.remove(index)
    }
}

/// Builds a cart from arbitrary lines while keeping the cart invariants:
/// lines with quantity 0 are skipped and repeated ids are merged into the
/// first occurrence.
impl FromIterator<CartLine> for Cart {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for line in iter {
            if line.quantity == 0 {
                continue;
            }
            match cart.line_mut(line.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => cart.push(line),
            }
        }
        cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, price: Decimal, quantity: u32) -> CartLine {
        CartLine {
            id: MenuItemId(id),
            name: format!("Item {id}"),
            price,
            category: "Mains".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_from_iter_merges_duplicates_and_skips_zero() {
        let cart: Cart = vec![
            line(1, Decimal::new(500, 2), 2),
            line(2, Decimal::new(100, 2), 0),
            line(1, Decimal::new(500, 2), 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(MenuItemId(1)), 5);
        assert_eq!(cart.quantity_of(MenuItemId(2)), 0);
    }

    #[test]
    fn test_subtotal() {
        let l = line(3, Decimal::new(250, 2), 3);
        assert_eq!(l.subtotal(), Some(Decimal::new(750, 2)));
    }

    #[test]
    fn test_subtotal_overflow() {
        let l = line(1, Decimal::MAX, 2);
        assert_eq!(l.subtotal(), None);
    }

    #[test]
    fn test_deserialize_valid_cart() {
        let cart: Cart = serde_json::from_str(
            r#"{ "lines": [
                { "id": 1, "name": "Burger", "price": 8.99, "category": "Mains", "quantity": 2 },
                { "id": 5, "name": "Soda", "price": 1.99, "category": "Drinks", "quantity": 1 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(MenuItemId(1)), 2);

        let back: Cart = serde_json::from_value(serde_json::to_value(&cart).unwrap()).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity() {
        let err = serde_json::from_str::<Cart>(
            r#"{ "lines": [
                { "id": 1, "name": "Burger", "price": 8.99, "category": "Mains", "quantity": 0 }
            ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("quantity below 1"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let result = serde_json::from_str::<Cart>(
            r#"{ "lines": [
                { "id": 1, "name": "Burger", "price": 8.99, "category": "Mains", "quantity": 1 },
                { "id": 1, "name": "Burger", "price": 8.99, "category": "Mains", "quantity": 3 }
            ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_try_from_lines() {
        assert_eq!(
            Cart::try_from_lines(vec![line(2, Decimal::new(-100, 2), 1)]),
            Err(LineError::NegativePrice {
                id: MenuItemId(2),
                price: Decimal::new(-100, 2),
            })
        );
        assert_eq!(
            Cart::try_from_lines(vec![line(3, Decimal::ONE, 0)]),
            Err(LineError::ZeroQuantity(MenuItemId(3)))
        );
        let cart = Cart::try_from_lines(vec![line(1, Decimal::ONE, 2), line(2, Decimal::ZERO, 1)]).unwrap();
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_item_count() {
        let cart: Cart = vec![line(1, Decimal::ONE, 2), line(2, Decimal::ONE, 4)]
            .into_iter()
            .collect();
        assert_eq!(cart.item_count(), 6);
    }
}
