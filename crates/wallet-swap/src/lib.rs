//! Swap slice of the wallet state.
//!
//! Normalizes provider rate responses into id-indexed tables and tracks a
//! swap order from rate loading through creation and status polling. The
//! reducer is a pure function over [`SwapState`]; talking to the providers is
//! left to the caller, which feeds their responses in as actions.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use wallet_types::Provider;

pub mod actions;
pub mod normalize;
pub mod reducer;
pub mod state;

pub use actions::SwapAction;
pub use normalize::{normalize_rates, NormalizedRates};
pub use reducer::reduce;
pub use state::SwapState;

/// Errors that can occur while reading swap actions.
#[derive(Debug, Error)]
pub enum SwapError {
	/// The provider response carried by an action does not have the expected shape.
	#[error("Invalid {provider} response: {message}")]
	InvalidResponse { provider: Provider, message: String },
	/// Any other swap action that does not have the expected shape.
	#[error("Invalid {tag} action: {message}")]
	InvalidAction { tag: String, message: String },
}

/// Reads a swap action from its `{ "type": TAG, "payload": ... }` object.
///
/// A payload that fails to parse is reported against the provider whose
/// response it carries.
pub fn parse_action(value: Value) -> Result<SwapAction, SwapError> {
	let tag = value
		.get("type")
		.and_then(Value::as_str)
		.unwrap_or_default()
		.to_owned();

	SwapAction::deserialize(value).map_err(|e| match SwapAction::payload_provider(&tag) {
		Some(provider) => SwapError::InvalidResponse {
			provider,
			message: e.to_string(),
		},
		None => SwapError::InvalidAction {
			tag,
			message: e.to_string(),
		},
	})
}
