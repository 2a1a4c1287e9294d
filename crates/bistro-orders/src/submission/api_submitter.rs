use super::{OrderReceipt, OrderSubmitter, SubmitError};
use crate::api::{ApiFailure, ApiRequest, OrderAccepted, OrderApi, API_KEY_HEADER, ORDERS_PATH};
use async_trait::async_trait;
use bistro_ledger::model::Order;
use tracing::{debug, info, instrument, warn};

/// Submits orders the way a browser would: a JSON `POST /api/orders`.
#[derive(Clone)]
pub struct ApiSubmitter {
    api: OrderApi,
    api_key: Option<String>,
}

impl ApiSubmitter {
    pub fn new(api: OrderApi) -> Self {
        Self { api, api_key: None }
    }

    /// Sends `key` in the `X-API-Key` header of every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

#[async_trait]
impl OrderSubmitter for ApiSubmitter {
    #[instrument(skip_all, fields(items = order.items.len()))]
    async fn submit(&self, order: &Order) -> Result<OrderReceipt, SubmitError> {
        let body = serde_json::to_string(order).map_err(|e| SubmitError::Encode(e.to_string()))?;
        debug!(%body, "Posting order");

        let mut request = ApiRequest::post(ORDERS_PATH, body);
        if let Some(key) = &self.api_key {
            request = request.with_header(API_KEY_HEADER, key.clone());
        }

        let response = self.api.handle(request).await;
        if response.status == 201 {
            let accepted: OrderAccepted = response
                .json()
                .map_err(|e| SubmitError::Decode(e.to_string()))?;
            info!(order_id = %accepted.order_id, "Order accepted by API");
            return Ok(OrderReceipt {
                order_id: accepted.order_id,
                estimated_time: accepted.estimated_time,
            });
        }

        let message = response
            .json::<ApiFailure>()
            .map(|failure| failure.error)
            .unwrap_or_else(|_| response.body.to_string());
        warn!(status = response.status, %message, "Order refused by API");
        if response.status == 503 {
            return Err(SubmitError::Unavailable(message));
        }
        Err(SubmitError::Rejected {
            status: response.status,
            message,
        })
    }
}
