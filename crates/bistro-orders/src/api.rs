//! # Order API
//!
//! A routed request handler standing in for the restaurant's HTTP backend.
//! There is no socket here: an [`ApiRequest`] goes in, an [`ApiResponse`]
//! comes out, and whatever transport fronts the API only has to move those
//! two values.
//!
//! | Route | Success | Failure |
//! |-------|---------|---------|
//! | `GET /api/menu` | 200, catalog as a JSON array | - |
//! | `POST /api/orders` | 201, `{success, orderId, estimatedTime, orderDetails}` | 400, `{success: false, error}` |
//! | anything else | - | 404, `{success: false, error}` |

use crate::clients::OrderDeskClient;
use crate::desk_actor::DeskError;
use bistro_ledger::catalog::Catalog;
use bistro_ledger::ledger;
use bistro_ledger::model::{Cart, Order};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub const MENU_PATH: &str = "/api/menu";
pub const ORDERS_PATH: &str = "/api/orders";
pub const API_KEY_HEADER: &str = "X-API-Key";

pub const MISSING_BODY: &str = "Request body is missing for POST /api/orders.";
pub const NO_ITEMS: &str = "Invalid order data: No items in order.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            headers: HashMap::new(),
            body: Some(body.into()),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    fn failure(status: u16, message: impl Into<String>) -> Self {
        let failure = ApiFailure {
            success: false,
            error: message.into(),
        };
        Self::new(status, json!(failure))
    }

    /// True for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

/// Body of a 201 answer to `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAccepted {
    pub success: bool,
    pub order_id: String,
    pub estimated_time: String,
}

/// Body of every error answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
}

/// The order API: serves the menu and forwards orders to the desk.
#[derive(Clone)]
pub struct OrderApi {
    catalog: Arc<Catalog>,
    desk: OrderDeskClient,
    estimated_time: String,
}

impl OrderApi {
    pub fn new(catalog: Arc<Catalog>, desk: OrderDeskClient, estimated_time: impl Into<String>) -> Self {
        Self {
            catalog,
            desk,
            estimated_time: estimated_time.into(),
        }
    }

    #[instrument(skip_all, fields(method = ?request.method, path = %request.path))]
    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        if let Some(key) = request.header(API_KEY_HEADER) {
            debug!(key_len = key.len(), "Request included API key");
        }

        match (request.method, request.path.as_str()) {
            (Method::Get, MENU_PATH) => self.menu(),
            (Method::Post, ORDERS_PATH) => self.create_order(request.body.as_deref()).await,
            _ => {
                warn!("Unhandled endpoint");
                ApiResponse::failure(404, format!("Mock API endpoint not handled: {}", request.path))
            }
        }
    }

    fn menu(&self) -> ApiResponse {
        info!(items = self.catalog.len(), "Serving menu");
        ApiResponse::new(200, json!(self.catalog.items()))
    }

    async fn create_order(&self, body: Option<&str>) -> ApiResponse {
        let Some(body) = body else {
            warn!("Missing request body");
            return ApiResponse::failure(400, MISSING_BODY);
        };

        let order: Order = match serde_json::from_str(body) {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, body, "Could not parse order");
                return ApiResponse::failure(400, e.to_string());
            }
        };

        if order.is_empty() {
            warn!("Invalid order data: no items");
            return ApiResponse::failure(400, NO_ITEMS);
        }

        let cart = match Cart::try_from_lines(order.items) {
            Ok(cart) => cart,
            Err(e) => {
                warn!(error = %e, "Invalid order lines");
                return ApiResponse::failure(400, e.to_string());
            }
        };
        let total = match ledger::try_total(&cart) {
            Ok(total) => total,
            Err(e) => {
                warn!(error = %e, "Invalid order total");
                return ApiResponse::failure(400, e.to_string());
            }
        };
        if total != order.total {
            warn!(claimed = %order.total, recomputed = %total, "Order total does not match its lines");
        }

        // The desk stores the checked lines with the recomputed total.
        let order = Order::snapshot(&cart);
        match self.desk.submit(order).await {
            Ok(submitted) => {
                info!(order_id = %submitted.order_id, "Processed order");
                ApiResponse::new(
                    201,
                    json!({
                        "success": true,
                        "orderId": submitted.order_id,
                        "estimatedTime": self.estimated_time,
                        "orderDetails": submitted,
                    }),
                )
            }
            Err(e @ (DeskError::DeskClosed | DeskError::DeskDropped | DeskError::IdsExhausted)) => {
                error!(error = %e, "Order desk unavailable");
                ApiResponse::failure(503, e.to_string())
            }
            Err(e) => ApiResponse::failure(400, e.to_string()),
        }
    }
}
