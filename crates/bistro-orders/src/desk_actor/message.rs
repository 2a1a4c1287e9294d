//! # Desk Messages
//!
//! Requests sent from an [`OrderDeskClient`](crate::clients::OrderDeskClient)
//! to the [`OrderDesk`](super::OrderDesk) task. Each request carries a oneshot
//! sender the desk answers on.

use super::DeskError;
use crate::model::{OrderId, OrderStatus, SubmittedOrder};
use bistro_ledger::model::Order;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the desk.
pub type Response<T> = oneshot::Sender<Result<T, DeskError>>;

#[derive(Debug)]
pub enum DeskRequest {
    /// Accept an order snapshot and assign it an id.
    Submit {
        order: Order,
        respond_to: Response<SubmittedOrder>,
    },
    Get {
        id: OrderId,
        respond_to: Response<Option<SubmittedOrder>>,
    },
    /// All orders, oldest first.
    List {
        respond_to: Response<Vec<SubmittedOrder>>,
    },
    /// Move an order to a new fulfilment status.
    Advance {
        id: OrderId,
        status: OrderStatus,
        respond_to: Response<SubmittedOrder>,
    },
}
