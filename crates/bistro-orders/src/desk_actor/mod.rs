//! # Order Desk
//!
//! The order desk is where submitted orders end up. It accepts order
//! snapshots, assigns them an [`OrderId`](crate::model::OrderId) and tracks
//! their fulfilment status.
//!
//! ## Structure
//!
//! - [`actor`] - the [`OrderDesk`] task and its request loop
//! - [`message`] - [`DeskRequest`], the messages the task understands
//! - [`error`] - [`DeskError`]
//! - [`new()`] - Factory function that creates the desk and its client
//!
//! ## Usage
//!
//! ```rust
//! use bistro_orders::desk_actor;
//! use bistro_ledger::catalog::Catalog;
//! use bistro_ledger::ledger;
//! use bistro_ledger::model::{Cart, MenuItemId, Order};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (desk, client) = desk_actor::new(32);
//!     tokio::spawn(desk.run());
//!
//!     let mut cart = Cart::new();
//!     ledger::add_item(&Catalog::house_menu(), &mut cart, MenuItemId(1))?;
//!
//!     let submitted = client.submit(Order::snapshot(&cart)).await?;
//!     assert_eq!(submitted.order_id.to_string(), "BBO-1001");
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::OrderDeskClient;

/// Creates a new order desk and its client.
pub fn new(buffer_size: usize) -> (OrderDesk, OrderDeskClient) {
    OrderDesk::new(buffer_size)
}
