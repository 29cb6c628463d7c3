//! Swap state.

use serde::{Deserialize, Serialize};
use wallet_types::{
	BityOrderPostResponse, NormalizedTable, Provider, ProviderRate, ShapeshiftOrderResponse, SwapInput,
	SwapOption,
};

/// Origin asset of a fresh swap form.
pub const DEFAULT_ORIGIN: &str = "BTC";
/// Destination asset of a fresh swap form.
pub const DEFAULT_DESTINATION: &str = "ETH";

/// State of the swap flow.
///
/// Replaced wholesale by [`crate::reduce`] on every action. Only one of
/// `bity_order` and `shapeshift_order` is populated at a time, and
/// `is_posting_order` is true only while an order creation is in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapState {
	pub step: u32,
	pub origin: SwapInput,
	pub destination: SwapInput,
	/// Assets referenced by either provider's rates.
	pub options: NormalizedTable<SwapOption>,
	pub bity_rates: NormalizedTable<ProviderRate>,
	pub shapeshift_rates: NormalizedTable<ProviderRate>,
	pub provider: Provider,
	pub destination_address: String,
	pub bity_order: Option<BityOrderPostResponse>,
	pub shapeshift_order: Option<ShapeshiftOrderResponse>,
	pub is_fetching_rates: bool,
	pub is_posting_order: bool,
	pub seconds_remaining: Option<u64>,
	pub output_tx: Option<String>,
	pub bity_order_status: Option<String>,
	pub shapeshift_order_status: Option<String>,
	#[serde(rename = "orderTimestampCreatedISOString")]
	pub order_timestamp_created_iso_string: Option<String>,
	pub payment_address: Option<String>,
	pub valid_for: Option<u64>,
	pub order_id: Option<String>,
	pub show_lite_send: bool,
	pub origin_amount: Option<f64>,
	pub destination_amount: Option<f64>,
}

impl Default for SwapState {
	fn default() -> Self {
		Self {
			step: 1,
			origin: SwapInput::new(DEFAULT_ORIGIN, None),
			destination: SwapInput::new(DEFAULT_DESTINATION, None),
			options: NormalizedTable::new(),
			bity_rates: NormalizedTable::new(),
			shapeshift_rates: NormalizedTable::new(),
			provider: Provider::Shapeshift,
			destination_address: String::new(),
			bity_order: None,
			shapeshift_order: None,
			is_fetching_rates: false,
			is_posting_order: false,
			seconds_remaining: None,
			output_tx: None,
			bity_order_status: None,
			shapeshift_order_status: None,
			order_timestamp_created_iso_string: None,
			payment_address: None,
			valid_for: None,
			order_id: None,
			show_lite_send: false,
			origin_amount: None,
			destination_amount: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_initial_state() {
		let state = SwapState::default();
		assert_eq!(state.step, 1);
		assert_eq!(state.origin, SwapInput::new("BTC", None));
		assert_eq!(state.destination, SwapInput::new("ETH", None));
		assert_eq!(state.provider, Provider::Shapeshift);
		assert!(state.options.is_empty());
		assert!(state.bity_order.is_none());
		assert!(state.shapeshift_order.is_none());
		assert!(!state.is_fetching_rates);
	}

	#[test]
	fn test_serialized_field_names() {
		let value = serde_json::to_value(SwapState::default()).unwrap();
		assert_eq!(value["step"], 1);
		assert_eq!(value["provider"], "shapeshift");
		assert!(value["orderTimestampCreatedISOString"].is_null());
		assert_eq!(value["bityRates"]["allIds"], serde_json::json!([]));
		assert_eq!(value["showLiteSend"], false);

		let back: SwapState = serde_json::from_value(value).unwrap();
		assert_eq!(back, SwapState::default());
	}
}
