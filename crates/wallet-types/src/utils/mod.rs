//! Utility functions for common conversions and display formatting.

/// Numeric parsing helpers.
pub mod conversion;
/// String formatting and comparison helpers.
pub mod formatting;

pub use conversion::parse_float;
pub use formatting::{addresses_match, truncate_id};
