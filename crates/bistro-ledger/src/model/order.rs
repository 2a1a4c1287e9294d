//! An immutable snapshot of a cart, ready to be handed to a submitter.
//!
//! The snapshot owns copies of every line, so it can be serialized and sent
//! while the live cart keeps changing. Its JSON form is the order payload
//! accepted by the order API:
//!
//! ```json
//! { "items": [{ "id": 1, "name": "Burger", "price": 8.99, "category": "Mains", "quantity": 2 }],
//!   "total": 17.98 }
//! ```

use crate::ledger;
use crate::model::{Cart, CartLine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub total: Decimal,
}

impl Order {
    /// Takes a value copy of `cart` together with its computed total.
    pub fn snapshot(cart: &Cart) -> Self {
        Self {
            items: cart.lines().to_vec(),
            total: ledger::compute_total(cart),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units in the order.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
