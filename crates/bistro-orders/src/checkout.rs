//! # Checkout
//!
//! Ties the ledger's validation to a submitter. [`place_order`] validates the
//! cart, takes a value snapshot and only then hands the snapshot over, so the
//! submitter never observes the live cart.

use crate::submission::{OrderReceipt, OrderSubmitter, SubmitError};
use bistro_ledger::error::LedgerError;
use bistro_ledger::ledger;
use bistro_ledger::model::{Cart, Order};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    /// The cart failed validation and was never submitted.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The submitter refused or could not be reached.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Validates `cart` against `minimum` and submits a snapshot of it.
#[instrument(skip_all, fields(lines = cart.len(), minimum = %minimum))]
pub async fn place_order<S>(
    cart: &Cart,
    minimum: Decimal,
    submitter: &S,
) -> Result<OrderReceipt, CheckoutError>
where
    S: OrderSubmitter + ?Sized,
{
    ledger::attempt_order(cart, minimum)?;

    let order = Order::snapshot(cart);
    match submitter.submit(&order).await {
        Ok(receipt) => {
            info!(
                order_id = %receipt.order_id,
                units = order.item_count(),
                total = %order.total,
                "Order placed"
            );
            Ok(receipt)
        }
        Err(e) => {
            warn!(error = %e, "Order submission failed");
            Err(e.into())
        }
    }
}
