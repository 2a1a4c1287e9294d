//! # Order Desk Task
//!
//! The [`OrderDesk`] owns every submitted order. It runs in its own Tokio task
//! and handles one [`DeskRequest`] at a time, so the store needs no lock.
//! Callers never touch the store directly; they hold an
//! [`OrderDeskClient`] and exchange messages with the task.
//!
//! The desk stops when the last client is dropped.

use super::{DeskError, DeskRequest};
use crate::clients::OrderDeskClient;
use crate::model::{OrderId, OrderStatus, SubmittedOrder};
use bistro_ledger::model::Order;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// First sequence number handed out; ids read `BBO-1001`, `BBO-1002`, ...
pub const FIRST_ORDER_NUMBER: u32 = 1001;

pub struct OrderDesk {
    receiver: mpsc::Receiver<DeskRequest>,
    // Keyed by id, and ids grow monotonically, so iteration is submission order.
    store: BTreeMap<OrderId, SubmittedOrder>,
    next_id: u32,
}

impl OrderDesk {
    /// Creates a new `OrderDesk` and a client connected to it.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. Must be non-zero.
    ///   When the channel is full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, OrderDeskClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let desk = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: FIRST_ORDER_NUMBER,
        };
        (desk, OrderDeskClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!("Order desk started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DeskRequest::Submit { order, respond_to } => {
                    debug!(?order, "Submit");
                    let _ = respond_to.send(self.submit(order));
                }
                DeskRequest::Get { id, respond_to } => {
                    let order = self.store.get(&id).cloned();
                    debug!(%id, found = order.is_some(), "Get");
                    let _ = respond_to.send(Ok(order));
                }
                DeskRequest::List { respond_to } => {
                    debug!(size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                DeskRequest::Advance {
                    id,
                    status,
                    respond_to,
                } => {
                    debug!(%id, %status, "Advance");
                    let _ = respond_to.send(self.advance(id, status));
                }
            }
        }

        info!(size = self.store.len(), "Order desk shutdown");
    }

    fn submit(&mut self, order: Order) -> Result<SubmittedOrder, DeskError> {
        if order.is_empty() {
            warn!("Rejected order with no items");
            return Err(DeskError::EmptyOrder);
        }

        let Some(next) = self.next_id.checked_add(1) else {
            error!(last = self.next_id, "Order id sequence exhausted");
            return Err(DeskError::IdsExhausted);
        };
        let id = OrderId::from(self.next_id);
        self.next_id = next;

        let submitted = SubmittedOrder::new(id, order, Utc::now());
        self.store.insert(id, submitted.clone());
        info!(order_id = %id, total = %submitted.order.total, size = self.store.len(), "Order accepted");
        Ok(submitted)
    }

    fn advance(&mut self, id: OrderId, status: OrderStatus) -> Result<SubmittedOrder, DeskError> {
        let Some(entry) = self.store.get_mut(&id) else {
            warn!(%id, "Not found");
            return Err(DeskError::NotFound(id));
        };

        if !entry.status.can_become(status) {
            warn!(%id, from = %entry.status, to = %status, "Invalid status transition");
            return Err(DeskError::InvalidTransition {
                id,
                from: entry.status,
                to: status,
            });
        }

        entry.status = status;
        info!(%id, %status, "Status updated");
        Ok(entry.clone())
    }
}
