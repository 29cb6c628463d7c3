//! Scheduled transaction form state.
//!
//! Holds the parameters of a transaction that a scheduling contract executes
//! later: when (timestamp or block window), how much the executing node earns
//! and which gas settings it uses. Every field keeps the raw text the user
//! typed next to the parsed value, so invalid input survives until corrected.

pub mod actions;
pub mod reducer;
pub mod resolve;
pub mod state;

pub use actions::{CurrentAction, FieldAction, ScheduleAction};
pub use reducer::reduce;
pub use resolve::resolve_current;
pub use state::{Field, ScheduleState, ScheduleType, Toggle};
