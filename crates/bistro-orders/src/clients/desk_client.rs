//! # Order Desk Client
//!
//! Provides a high-level API for talking to the [`OrderDesk`](crate::desk_actor::OrderDesk).
//! Each call sends a [`DeskRequest`] over the desk's channel and awaits the
//! answer on a oneshot channel.
use crate::desk_actor::{DeskError, DeskRequest};
use crate::model::{OrderId, OrderStatus, SubmittedOrder};
use bistro_ledger::model::Order;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the order desk.
///
/// Cloning is cheap: a clone shares the same channel. The desk keeps running
/// for as long as at least one clone is alive.
#[derive(Clone)]
pub struct OrderDeskClient {
    sender: mpsc::Sender<DeskRequest>,
}

impl OrderDeskClient {
    pub fn new(sender: mpsc::Sender<DeskRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, DeskError>>) -> DeskRequest,
    ) -> Result<T, DeskError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DeskError::DeskClosed)?;
        response.await.map_err(|_| DeskError::DeskDropped)?
    }

    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn submit(&self, order: Order) -> Result<SubmittedOrder, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::Submit { order, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<SubmittedOrder>, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::Get { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<SubmittedOrder>, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::List { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn advance(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<SubmittedOrder, DeskError> {
        debug!("Sending request");
        self.request(|respond_to| DeskRequest::Advance {
            id,
            status,
            respond_to,
        })
        .await
    }
}
