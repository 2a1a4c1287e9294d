use super::{OrderReceipt, OrderSubmitter, SubmitError};
use crate::clients::OrderDeskClient;
use crate::desk_actor::DeskError;
use async_trait::async_trait;
use bistro_ledger::model::Order;
use tracing::{info, instrument};

/// Submits orders directly to the desk, skipping the JSON round trip.
#[derive(Clone)]
pub struct DeskSubmitter {
    desk: OrderDeskClient,
    estimated_time: String,
}

impl DeskSubmitter {
    pub fn new(desk: OrderDeskClient, estimated_time: impl Into<String>) -> Self {
        Self {
            desk,
            estimated_time: estimated_time.into(),
        }
    }
}

impl From<DeskError> for SubmitError {
    fn from(e: DeskError) -> Self {
        match e {
            DeskError::DeskClosed | DeskError::DeskDropped | DeskError::IdsExhausted => {
                SubmitError::Unavailable(e.to_string())
            }
            other => SubmitError::Rejected {
                status: 400,
                message: other.to_string(),
            },
        }
    }
}

#[async_trait]
impl OrderSubmitter for DeskSubmitter {
    #[instrument(skip_all, fields(items = order.items.len()))]
    async fn submit(&self, order: &Order) -> Result<OrderReceipt, SubmitError> {
        let submitted = self.desk.submit(order.clone()).await?;
        info!(order_id = %submitted.order_id, "Order submitted to desk");
        Ok(OrderReceipt {
            order_id: submitted.order_id.to_string(),
            estimated_time: self.estimated_time.clone(),
        })
    }
}
