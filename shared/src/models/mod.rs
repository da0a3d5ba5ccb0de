//! Data models
//!
//! Shared between laundry-server and its clients (via API).

pub mod credential;
pub mod order;

// Re-exports
pub use credential::*;
pub use order::*;
