//! # Test Doubles
//!
//! Two ways to test code that submits orders without a running desk.
//!
//! ## `MockSubmitter`: scripted answers
//!
//! [`MockSubmitter`] implements [`OrderSubmitter`] from a queue of
//! expectations and records every order it was given:
//!
//! ```rust
//! use bistro_orders::mock::MockSubmitter;
//! use bistro_orders::submission::{OrderSubmitter, SubmitError};
//! use bistro_ledger::model::Order;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockSubmitter::new();
//!     mock.expect_submit().return_receipt("BBO-2001", "10 minutes");
//!     mock.expect_submit().return_err(SubmitError::Unavailable("down".into()));
//!
//!     let order = Order { items: vec![], total: Default::default() };
//!     assert_eq!(mock.submit(&order).await.unwrap().order_id, "BBO-2001");
//!     assert!(mock.submit(&order).await.is_err());
//!
//!     assert_eq!(mock.submitted().len(), 2);
//!     mock.verify();
//! }
//! ```
//!
//! ## `create_mock_desk`: inspect raw desk requests
//!
//! [`create_mock_desk`] returns a real [`OrderDeskClient`] whose requests land
//! on a receiver the test controls. Pair it with [`expect_submit`] or
//! [`expect_get`] to assert on the request and answer it by hand, including
//! with errors that are hard to provoke from a real desk.

use crate::clients::OrderDeskClient;
use crate::desk_actor::{DeskError, DeskRequest};
use crate::model::{OrderId, SubmittedOrder};
use crate::submission::{OrderReceipt, OrderSubmitter, SubmitError};
use async_trait::async_trait;
use bistro_ledger::model::Order;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Result<OrderReceipt, SubmitError>>,
    submitted: Vec<Order>,
}

/// A submitter that answers from a queue of expectations.
///
/// Clones share the same queue and the same record of submitted orders.
#[derive(Clone, Default)]
pub struct MockSubmitter {
    state: Arc<Mutex<MockState>>,
}

impl MockSubmitter {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next `submit` call.
    pub fn expect_submit(&self) -> SubmitExpectationBuilder {
        SubmitExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Every order received so far, oldest first.
    pub fn submitted(&self) -> Vec<Order> {
        self.state.lock().unwrap().submitted.clone()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl OrderSubmitter for MockSubmitter {
    async fn submit(&self, order: &Order) -> Result<OrderReceipt, SubmitError> {
        let mut state = self.state.lock().unwrap();
        state.submitted.push(order.clone());
        match state.expectations.pop_front() {
            Some(response) => response,
            None => panic!("Unexpected submit: no expectation queued"),
        }
    }
}

/// Builder for `submit` expectations.
pub struct SubmitExpectationBuilder {
    state: Arc<Mutex<MockState>>,
}

impl SubmitExpectationBuilder {
    /// The call succeeds with the given receipt.
    pub fn return_receipt(self, order_id: impl Into<String>, estimated_time: impl Into<String>) {
        self.return_ok(OrderReceipt {
            order_id: order_id.into(),
            estimated_time: estimated_time.into(),
        });
    }

    pub fn return_ok(self, receipt: OrderReceipt) {
        self.state.lock().unwrap().expectations.push_back(Ok(receipt));
    }

    pub fn return_err(self, error: SubmitError) {
        self.state.lock().unwrap().expectations.push_back(Err(error));
    }
}

// =============================================================================
// RAW DESK HELPERS
// =============================================================================

/// Creates a desk client and the receiver its requests arrive on.
pub fn create_mock_desk(buffer_size: usize) -> (OrderDeskClient, mpsc::Receiver<DeskRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderDeskClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Submit request.
pub async fn expect_submit(
    receiver: &mut mpsc::Receiver<DeskRequest>,
) -> Option<(Order, oneshot::Sender<Result<SubmittedOrder, DeskError>>)> {
    match receiver.recv().await {
        Some(DeskRequest::Submit { order, respond_to }) => Some((order, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<DeskRequest>,
) -> Option<(OrderId, oneshot::Sender<Result<Option<SubmittedOrder>, DeskError>>)> {
    match receiver.recv().await {
        Some(DeskRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
