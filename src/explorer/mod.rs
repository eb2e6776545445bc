//! Block-explorer API access.
//!
//! This module handles:
//! - Record shapes returned by the account endpoints
//! - The `{status, message, result}` response envelope
//! - The paginated fetch client

pub mod client;
pub mod types;

// Re-export main types
pub use client::ExplorerClient;
pub use types::{Envelope, InternalTransaction, Transaction};
