//! # Bistro Orders
//!
//! Everything that happens to an order after the cart is validated.
//!
//! ## Module Tour
//!
//! ### 1. The Desk ([`desk_actor`], [`clients`])
//! A Tokio task that owns every submitted order, assigns `BBO-` ids and
//! tracks fulfilment status. Callers hold a cloneable
//! [`OrderDeskClient`](clients::OrderDeskClient) and never touch the store.
//!
//! ### 2. The API ([`api`])
//! Routed request/response handling for `GET /api/menu` and
//! `POST /api/orders`, with the JSON bodies the storefront expects.
//!
//! ### 3. Submission ([`submission`], [`checkout`], [`mock`])
//! The [`OrderSubmitter`](submission::OrderSubmitter) trait and its
//! implementations. [`checkout::place_order`] validates a cart with the
//! ledger and submits a snapshot through any submitter.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`BistroSystem`](lifecycle::BistroSystem) spawns and wires the desk from a
//! [`ShopConfig`](config::ShopConfig) and shuts it down cleanly.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p bistro-orders
//! BISTRO_CONFIG=bistro.toml RUST_LOG=debug cargo run -p bistro-orders
//! ```

pub mod api;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod desk_actor;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod submission;
