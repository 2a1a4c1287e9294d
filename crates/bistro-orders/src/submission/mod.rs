//! # Order Submission
//!
//! The ledger never knows how an order travels. It hands an
//! [`Order`] snapshot to something that implements [`OrderSubmitter`] and gets
//! back an [`OrderReceipt`] or a [`SubmitError`].
//!
//! Implementations:
//!
//! | Submitter | Path |
//! |-----------|------|
//! | [`ApiSubmitter`] | JSON body through the [`OrderApi`](crate::api::OrderApi) routes |
//! | [`DeskSubmitter`] | straight to the [`OrderDeskClient`](crate::clients::OrderDeskClient) |
//! | [`MockSubmitter`](crate::mock::MockSubmitter) | scripted answers for tests |

pub mod api_submitter;
pub mod desk_submitter;

pub use api_submitter::ApiSubmitter;
pub use desk_submitter::DeskSubmitter;

use async_trait::async_trait;
use bistro_ledger::model::Order;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Successful answer from a submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub estimated_time: String,
}

/// Errors that can occur while submitting an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    /// The receiving side refused the order.
    #[error("Order rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The order could not be serialized.
    #[error("Could not encode order: {0}")]
    Encode(String),

    /// The response could not be understood.
    #[error("Could not decode response: {0}")]
    Decode(String),

    /// The receiving side is not running.
    #[error("Order service unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can take an order snapshot and accept or refuse it.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, order: &Order) -> Result<OrderReceipt, SubmitError>;
}
