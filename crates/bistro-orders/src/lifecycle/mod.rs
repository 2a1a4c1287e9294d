//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the pieces that run at runtime. The ledger is
//! synchronous and needs no lifecycle; the order desk is a task that has to be
//! spawned, handed to the API, and awaited on shutdown.
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the desk's channel
//! 2. **Desk detects closure** - `receiver.recv()` returns `None`
//! 3. **Desk logs its final size** and the task returns
//! 4. **Await completion** - [`BistroSystem::shutdown`] joins the task
//!
//! Requests already queued when the last client drops are still answered.

pub mod bistro_system;
pub mod tracing;

pub use bistro_system::*;
pub use self::tracing::*;
