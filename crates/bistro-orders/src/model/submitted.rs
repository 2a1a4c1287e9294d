//! A submitted order as stored by the order desk.
//!
//! The desk wraps the customer's [`Order`] snapshot with an identifier, a
//! fulfilment status and the submission time.

use bistro_ledger::model::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

const ORDER_ID_PREFIX: &str = "BBO-";

/// Type-safe identifier for submitted orders, displayed as `BBO-1001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ORDER_ID_PREFIX, self.0)
    }
}

impl FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ORDER_ID_PREFIX)
            .and_then(|n| n.parse::<u32>().ok())
            .map(OrderId)
            .ok_or_else(|| format!("Invalid order id: {s}"))
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for OrderId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Fulfilment status of a submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Orders move forward one step at a time and can only be cancelled
    /// before they ship.
    pub fn can_become(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Processing, Shipped)
                | (Shipped, Delivered)
                | (Pending, Cancelled)
                | (Processing, Cancelled)
        )
    }

    pub fn is_final(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedOrder {
    pub order_id: OrderId,
    #[serde(flatten)]
    pub order: Order,
    pub status: OrderStatus,
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedOrder {
    /// Creates a new SubmittedOrder with status `Pending`.
    pub fn new(order_id: OrderId, order: Order, submitted_at: DateTime<Utc>) -> Self {
        Self {
            order_id,
            order,
            status: OrderStatus::Pending,
            submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_display_and_parse() {
        let id = OrderId(1001);
        assert_eq!(id.to_string(), "BBO-1001");
        assert_eq!("BBO-1001".parse::<OrderId>().unwrap(), id);
        assert!("order_1".parse::<OrderId>().is_err());
        assert!("BBO-".parse::<OrderId>().is_err());
    }

    #[test]
    fn test_order_id_serializes_as_string() {
        let json = serde_json::to_value(OrderId(1042)).unwrap();
        assert_eq!(json, serde_json::json!("BBO-1042"));
        let back: OrderId = serde_json::from_value(json).unwrap();
        assert_eq!(back, OrderId(1042));
    }

    #[test]
    fn test_status_transitions() {
        use OrderStatus::*;
        assert!(Pending.can_become(Processing));
        assert!(Processing.can_become(Shipped));
        assert!(Shipped.can_become(Delivered));
        assert!(Pending.can_become(Cancelled));
        assert!(Processing.can_become(Cancelled));

        assert!(!Pending.can_become(Shipped));
        assert!(!Shipped.can_become(Cancelled));
        assert!(!Delivered.can_become(Pending));
        assert!(!Cancelled.can_become(Processing));
        assert!(Delivered.is_final() && Cancelled.is_final());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_value(OrderStatus::Processing).unwrap();
        assert_eq!(json, serde_json::json!("PROCESSING"));
        assert_eq!(OrderStatus::Cancelled.to_string(), "CANCELLED");
    }
}
