//! # Bistro Ledger
//!
//! The synchronous core of the bistro ordering flow: the menu [`catalog`], the
//! [`model`] types (menu items, cart lines, carts, order snapshots) and the
//! [`ledger`] operations that change and evaluate a cart.
//!
//! Nothing in this crate performs I/O or keeps global state. A cart is an
//! owned value the caller passes into each operation:
//!
//! ```rust
//! use bistro_ledger::catalog::Catalog;
//! use bistro_ledger::ledger;
//! use bistro_ledger::model::{Cart, MenuItemId, Order};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::house_menu();
//! let mut cart = Cart::new();
//!
//! ledger::add_item(&catalog, &mut cart, MenuItemId(2)).unwrap();
//! ledger::add_item(&catalog, &mut cart, MenuItemId(2)).unwrap();
//! ledger::update_quantity(&mut cart, MenuItemId(2), -1).unwrap();
//!
//! assert_eq!(ledger::compute_total(&cart), Decimal::new(1099, 2));
//! assert!(ledger::attempt_order(&cart, Decimal::from(10)).is_ok());
//!
//! // Hand a value copy to whoever submits the order.
//! let order = Order::snapshot(&cart);
//! assert_eq!(order.items.len(), 1);
//! ```
//!
//! Submission itself lives in the `bistro-orders` crate, behind the
//! `OrderSubmitter` trait.

pub mod catalog;
pub mod deal;
pub mod error;
pub mod ledger;
pub mod model;

pub use catalog::{Catalog, CategoryFilter};
pub use deal::DealOfTheDay;
pub use error::{CatalogError, LedgerError, LineError, Rejection};
