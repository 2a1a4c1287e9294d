//! Types describing orders once they reach the desk.

pub mod submitted;

pub use submitted::*;
