//! Statistics derivation engine.
//!
//! Two pure, stateless passes over the same in-memory history:
//! - a lifetime aggregate ([`calculate_stats`])
//! - a cumulative daily series ([`build_time_series`])
//!
//! Both lean on the same fee-attribution heuristic and the same
//! value/address normalization helpers, but partition internal transfers
//! differently (lifetime grouping vs day-scoped crediting). The two code
//! paths are intentionally separate; see the module docs of
//! [`timeseries`] for why they may disagree at the margins.

pub mod aggregate;
pub mod fee_split;
pub mod normalize;
pub mod timeseries;
pub mod types;

// Re-export main types and functions
pub use aggregate::calculate_stats;
pub use fee_split::{attribute_fee, resolve_total_fees, FeeSplit};
pub use timeseries::build_time_series;
pub use types::{Stats, TimeSeriesPoint};
