//! Error types for catalog and ledger operations.

use crate::model::MenuItemId;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// Two menu items share the same identifier.
    #[error("Duplicate menu item id: {0}")]
    DuplicateId(MenuItemId),

    /// A menu item has a price below zero.
    #[error("Menu item {id} has a negative price: {price}")]
    NegativePrice { id: MenuItemId, price: Decimal },

    /// The catalog document could not be parsed.
    #[error("Invalid catalog data: {0}")]
    Parse(String),
}

/// Why an order attempt was refused.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Rejection {
    #[error("Cannot place an order with an empty cart.")]
    EmptyCart,

    // Rounded up so a total at the displayed amount always passes.
    #[error(
        "Order total is below the minimum value of ${:.2}.",
        .minimum.round_dp_with_strategy(2, RoundingStrategy::AwayFromZero)
    )]
    BelowMinimum { minimum: Decimal, total: Decimal },

    #[error("Order total is too large.")]
    TotalOverflow,
}

/// A line that may not appear in a cart or an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LineError {
    #[error("Invalid order data: item {0} has a quantity below 1.")]
    ZeroQuantity(MenuItemId),

    #[error("Invalid order data: item {id} has a negative price {price}.")]
    NegativePrice { id: MenuItemId, price: Decimal },

    #[error("Invalid order data: item {0} appears more than once.")]
    DuplicateLine(MenuItemId),
}

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// The menu item is not in the catalog.
    #[error("Sorry, menu item {0} could not be found. Please try another.")]
    MenuItemNotFound(MenuItemId),

    /// The cart has no line for the item.
    #[error("Item {0} not found in cart. Cannot update quantity.")]
    LineNotFound(MenuItemId),

    /// Price times quantity summed past what a `Decimal` can hold.
    #[error("Order total is too large to compute.")]
    TotalOverflow,

    /// The cart does not satisfy the ordering rules.
    #[error(transparent)]
    OrderRejected(#[from] Rejection),
}

impl LedgerError {
    /// True for both flavours of missing-item errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::MenuItemNotFound(_) | LedgerError::LineNotFound(_)
        )
    }
}
