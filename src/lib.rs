//! Chiliz Pool Analytics
//!
//! Statistics derivation for a betting-pool contract: the full explorer
//! transaction history in, a lifetime aggregate and a cumulative daily
//! time series out.
//!
//! This crate provides the core implementation for the `chz-pool` CLI tool.

pub mod commands;
pub mod explorer;
pub mod output;
pub mod stats;
pub mod utils;
