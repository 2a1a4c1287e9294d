//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the binary. Verbosity is
//! controlled with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # cart changes, accepted orders, rejections
//! RUST_LOG=debug cargo run     # plus request payloads and desk messages
//! RUST_LOG=bistro_ledger=debug cargo run
//! ```
//!
//! A checkout at `info` reads roughly:
//!
//! ```text
//! INFO Order desk started
//! INFO Added to cart item_id=1 lines=1
//! INFO Burger is our Deal of the Day! Enjoy this special offer! item_id=1
//! INFO Order attempt is valid total=21.97
//! INFO place_order:submit:handle: Order accepted order_id=BBO-1001 total=21.97 size=1
//! INFO place_order: Order placed order_id=BBO-1001 total=21.97
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
