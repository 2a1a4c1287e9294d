//! Typed clients that hide the desk's message passing.

pub mod desk_client;

pub use desk_client::OrderDeskClient;
