//! Error types for the order desk.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Errors that can occur during order desk operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeskError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The submitted order has no line items.
    #[error("Invalid order data: No items in order.")]
    EmptyOrder,

    /// The requested status change is not allowed.
    #[error("Order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Every order number has been handed out.
    #[error("Order desk has run out of order numbers")]
    IdsExhausted,

    /// The desk task has stopped accepting requests.
    #[error("Order desk closed")]
    DeskClosed,

    /// The desk dropped the response channel.
    #[error("Order desk dropped response channel")]
    DeskDropped,
}
