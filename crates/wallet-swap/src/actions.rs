//! Swap actions and their creators.
//!
//! Actions travel as `{ "type": TAG, "payload": ... }` objects; actions
//! without a payload omit the field.

use serde::{Deserialize, Serialize};
use wallet_types::{
	BityOrderPostResponse, BityOrderResponse, Provider, ProviderRatesResponse, ShapeshiftOrderResponse,
	ShapeshiftStatusResponse, SwapInput,
};

/// Payload of [`SwapAction::Init`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapInputs {
	pub origin: SwapInput,
	pub destination: SwapInput,
}

/// Every action the swap reducer understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum SwapAction {
	#[serde(rename = "SWAP_INIT")]
	Init(SwapInputs),
	#[serde(rename = "SWAP_STEP")]
	ChangeStep(u32),
	#[serde(rename = "SWAP_DESTINATION_ADDRESS")]
	DestinationAddress(String),
	#[serde(rename = "SWAP_RESTART")]
	Restart,
	#[serde(rename = "SWAP_CHANGE_PROVIDER")]
	ChangeProvider(Provider),
	#[serde(rename = "SWAP_SHOW_LITE_SEND")]
	ShowLiteSend(bool),

	#[serde(rename = "SWAP_LOAD_BITY_RATES_REQUESTED")]
	LoadBityRatesRequested,
	#[serde(rename = "SWAP_LOAD_BITY_RATES_SUCCEEDED")]
	LoadBityRatesSucceeded(ProviderRatesResponse),
	#[serde(rename = "SWAP_STOP_LOAD_BITY_RATES")]
	StopLoadBityRates,
	#[serde(rename = "SWAP_LOAD_SHAPESHIFT_RATES_REQUESTED")]
	LoadShapeshiftRatesRequested,
	#[serde(rename = "SWAP_LOAD_SHAPESHIFT_RATES_SUCCEEDED")]
	LoadShapeshiftRatesSucceeded(ProviderRatesResponse),
	#[serde(rename = "SWAP_STOP_LOAD_SHAPESHIFT_RATES")]
	StopLoadShapeshiftRates,

	#[serde(rename = "SWAP_BITY_ORDER_CREATE_REQUESTED")]
	BityOrderCreateRequested,
	#[serde(rename = "SWAP_BITY_ORDER_CREATE_SUCCEEDED")]
	BityOrderCreateSucceeded(BityOrderPostResponse),
	#[serde(rename = "SWAP_BITY_ORDER_CREATE_FAILED")]
	BityOrderCreateFailed,
	#[serde(rename = "SWAP_SHAPESHIFT_ORDER_CREATE_REQUESTED")]
	ShapeshiftOrderCreateRequested,
	#[serde(rename = "SWAP_SHAPESHIFT_ORDER_CREATE_SUCCEEDED")]
	ShapeshiftOrderCreateSucceeded(ShapeshiftOrderResponse),
	#[serde(rename = "SWAP_SHAPESHIFT_ORDER_CREATE_FAILED")]
	ShapeshiftOrderCreateFailed,

	#[serde(rename = "SWAP_BITY_ORDER_STATUS_SUCCEEDED")]
	BityOrderStatusSucceeded(BityOrderResponse),
	#[serde(rename = "SWAP_SHAPESHIFT_ORDER_STATUS_SUCCEEDED")]
	ShapeshiftOrderStatusSucceeded(ShapeshiftStatusResponse),
	#[serde(rename = "SWAP_ORDER_TIME")]
	OrderTime(u64),

	// Consumed by whatever drives the countdown and status polling; the
	// reducer leaves state alone.
	#[serde(rename = "SWAP_ORDER_START_TIMER")]
	StartOrderTimer,
	#[serde(rename = "SWAP_ORDER_STOP_TIMER")]
	StopOrderTimer,
	#[serde(rename = "SWAP_START_POLL_BITY_ORDER_STATUS")]
	StartPollBityOrderStatus,
	#[serde(rename = "SWAP_STOP_POLL_BITY_ORDER_STATUS")]
	StopPollBityOrderStatus,
	#[serde(rename = "SWAP_START_POLL_SHAPESHIFT_ORDER_STATUS")]
	StartPollShapeshiftOrderStatus,
	#[serde(rename = "SWAP_STOP_POLL_SHAPESHIFT_ORDER_STATUS")]
	StopPollShapeshiftOrderStatus,
}

impl SwapAction {
	/// Wire tags of every swap action.
	pub const TAGS: &'static [&'static str] = &[
		"SWAP_INIT",
		"SWAP_STEP",
		"SWAP_DESTINATION_ADDRESS",
		"SWAP_RESTART",
		"SWAP_CHANGE_PROVIDER",
		"SWAP_SHOW_LITE_SEND",
		"SWAP_LOAD_BITY_RATES_REQUESTED",
		"SWAP_LOAD_BITY_RATES_SUCCEEDED",
		"SWAP_STOP_LOAD_BITY_RATES",
		"SWAP_LOAD_SHAPESHIFT_RATES_REQUESTED",
		"SWAP_LOAD_SHAPESHIFT_RATES_SUCCEEDED",
		"SWAP_STOP_LOAD_SHAPESHIFT_RATES",
		"SWAP_BITY_ORDER_CREATE_REQUESTED",
		"SWAP_BITY_ORDER_CREATE_SUCCEEDED",
		"SWAP_BITY_ORDER_CREATE_FAILED",
		"SWAP_SHAPESHIFT_ORDER_CREATE_REQUESTED",
		"SWAP_SHAPESHIFT_ORDER_CREATE_SUCCEEDED",
		"SWAP_SHAPESHIFT_ORDER_CREATE_FAILED",
		"SWAP_BITY_ORDER_STATUS_SUCCEEDED",
		"SWAP_SHAPESHIFT_ORDER_STATUS_SUCCEEDED",
		"SWAP_ORDER_TIME",
		"SWAP_ORDER_START_TIMER",
		"SWAP_ORDER_STOP_TIMER",
		"SWAP_START_POLL_BITY_ORDER_STATUS",
		"SWAP_STOP_POLL_BITY_ORDER_STATUS",
		"SWAP_START_POLL_SHAPESHIFT_ORDER_STATUS",
		"SWAP_STOP_POLL_SHAPESHIFT_ORDER_STATUS",
	];

	/// The wire tag of this action.
	pub fn tag(&self) -> &'static str {
		match self {
			SwapAction::Init(_) => "SWAP_INIT",
			SwapAction::ChangeStep(_) => "SWAP_STEP",
			SwapAction::DestinationAddress(_) => "SWAP_DESTINATION_ADDRESS",
			SwapAction::Restart => "SWAP_RESTART",
			SwapAction::ChangeProvider(_) => "SWAP_CHANGE_PROVIDER",
			SwapAction::ShowLiteSend(_) => "SWAP_SHOW_LITE_SEND",
			SwapAction::LoadBityRatesRequested => "SWAP_LOAD_BITY_RATES_REQUESTED",
			SwapAction::LoadBityRatesSucceeded(_) => "SWAP_LOAD_BITY_RATES_SUCCEEDED",
			SwapAction::StopLoadBityRates => "SWAP_STOP_LOAD_BITY_RATES",
			SwapAction::LoadShapeshiftRatesRequested => "SWAP_LOAD_SHAPESHIFT_RATES_REQUESTED",
			SwapAction::LoadShapeshiftRatesSucceeded(_) => "SWAP_LOAD_SHAPESHIFT_RATES_SUCCEEDED",
			SwapAction::StopLoadShapeshiftRates => "SWAP_STOP_LOAD_SHAPESHIFT_RATES",
			SwapAction::BityOrderCreateRequested => "SWAP_BITY_ORDER_CREATE_REQUESTED",
			SwapAction::BityOrderCreateSucceeded(_) => "SWAP_BITY_ORDER_CREATE_SUCCEEDED",
			SwapAction::BityOrderCreateFailed => "SWAP_BITY_ORDER_CREATE_FAILED",
			SwapAction::ShapeshiftOrderCreateRequested => "SWAP_SHAPESHIFT_ORDER_CREATE_REQUESTED",
			SwapAction::ShapeshiftOrderCreateSucceeded(_) => "SWAP_SHAPESHIFT_ORDER_CREATE_SUCCEEDED",
			SwapAction::ShapeshiftOrderCreateFailed => "SWAP_SHAPESHIFT_ORDER_CREATE_FAILED",
			SwapAction::BityOrderStatusSucceeded(_) => "SWAP_BITY_ORDER_STATUS_SUCCEEDED",
			SwapAction::ShapeshiftOrderStatusSucceeded(_) => "SWAP_SHAPESHIFT_ORDER_STATUS_SUCCEEDED",
			SwapAction::OrderTime(_) => "SWAP_ORDER_TIME",
			SwapAction::StartOrderTimer => "SWAP_ORDER_START_TIMER",
			SwapAction::StopOrderTimer => "SWAP_ORDER_STOP_TIMER",
			SwapAction::StartPollBityOrderStatus => "SWAP_START_POLL_BITY_ORDER_STATUS",
			SwapAction::StopPollBityOrderStatus => "SWAP_STOP_POLL_BITY_ORDER_STATUS",
			SwapAction::StartPollShapeshiftOrderStatus => "SWAP_START_POLL_SHAPESHIFT_ORDER_STATUS",
			SwapAction::StopPollShapeshiftOrderStatus => "SWAP_STOP_POLL_SHAPESHIFT_ORDER_STATUS",
		}
	}

	/// Provider whose response a tag carries as payload.
	pub fn payload_provider(tag: &str) -> Option<Provider> {
		match tag {
			"SWAP_LOAD_BITY_RATES_SUCCEEDED"
			| "SWAP_BITY_ORDER_CREATE_SUCCEEDED"
			| "SWAP_BITY_ORDER_STATUS_SUCCEEDED" => Some(Provider::Bity),
			"SWAP_LOAD_SHAPESHIFT_RATES_SUCCEEDED"
			| "SWAP_SHAPESHIFT_ORDER_CREATE_SUCCEEDED"
			| "SWAP_SHAPESHIFT_ORDER_STATUS_SUCCEEDED" => Some(Provider::Shapeshift),
			_ => None,
		}
	}

	/// Provider-specific "rates requested" action.
	pub fn load_rates_requested(provider: Provider) -> Self {
		match provider {
			Provider::Bity => SwapAction::LoadBityRatesRequested,
			Provider::Shapeshift => SwapAction::LoadShapeshiftRatesRequested,
		}
	}

	/// Provider-specific "rates loaded" action.
	pub fn load_rates_succeeded(provider: Provider, rates: ProviderRatesResponse) -> Self {
		match provider {
			Provider::Bity => SwapAction::LoadBityRatesSucceeded(rates),
			Provider::Shapeshift => SwapAction::LoadShapeshiftRatesSucceeded(rates),
		}
	}
}

pub fn init_swap(origin: SwapInput, destination: SwapInput) -> SwapAction {
	SwapAction::Init(SwapInputs {
		origin,
		destination,
	})
}

pub fn change_step(step: u32) -> SwapAction {
	SwapAction::ChangeStep(step)
}

pub fn destination_address(address: impl Into<String>) -> SwapAction {
	SwapAction::DestinationAddress(address.into())
}

pub fn restart() -> SwapAction {
	SwapAction::Restart
}

pub fn change_provider(provider: Provider) -> SwapAction {
	SwapAction::ChangeProvider(provider)
}

pub fn show_lite_send(show: bool) -> SwapAction {
	SwapAction::ShowLiteSend(show)
}

pub fn load_bity_rates_requested() -> SwapAction {
	SwapAction::LoadBityRatesRequested
}

pub fn load_bity_rates_succeeded(rates: ProviderRatesResponse) -> SwapAction {
	SwapAction::LoadBityRatesSucceeded(rates)
}

pub fn stop_load_bity_rates() -> SwapAction {
	SwapAction::StopLoadBityRates
}

pub fn load_shapeshift_rates_requested() -> SwapAction {
	SwapAction::LoadShapeshiftRatesRequested
}

pub fn load_shapeshift_rates_succeeded(rates: ProviderRatesResponse) -> SwapAction {
	SwapAction::LoadShapeshiftRatesSucceeded(rates)
}

pub fn stop_load_shapeshift_rates() -> SwapAction {
	SwapAction::StopLoadShapeshiftRates
}

pub fn bity_order_create_requested() -> SwapAction {
	SwapAction::BityOrderCreateRequested
}

pub fn bity_order_create_succeeded(order: BityOrderPostResponse) -> SwapAction {
	SwapAction::BityOrderCreateSucceeded(order)
}

pub fn bity_order_create_failed() -> SwapAction {
	SwapAction::BityOrderCreateFailed
}

pub fn shapeshift_order_create_requested() -> SwapAction {
	SwapAction::ShapeshiftOrderCreateRequested
}

pub fn shapeshift_order_create_succeeded(order: ShapeshiftOrderResponse) -> SwapAction {
	SwapAction::ShapeshiftOrderCreateSucceeded(order)
}

pub fn shapeshift_order_create_failed() -> SwapAction {
	SwapAction::ShapeshiftOrderCreateFailed
}

pub fn bity_order_status_succeeded(status: BityOrderResponse) -> SwapAction {
	SwapAction::BityOrderStatusSucceeded(status)
}

pub fn shapeshift_order_status_succeeded(status: ShapeshiftStatusResponse) -> SwapAction {
	SwapAction::ShapeshiftOrderStatusSucceeded(status)
}

pub fn order_time(seconds_remaining: u64) -> SwapAction {
	SwapAction::OrderTime(seconds_remaining)
}

pub fn start_order_timer() -> SwapAction {
	SwapAction::StartOrderTimer
}

pub fn stop_order_timer() -> SwapAction {
	SwapAction::StopOrderTimer
}

pub fn start_poll_bity_order_status() -> SwapAction {
	SwapAction::StartPollBityOrderStatus
}

pub fn stop_poll_bity_order_status() -> SwapAction {
	SwapAction::StopPollBityOrderStatus
}

pub fn start_poll_shapeshift_order_status() -> SwapAction {
	SwapAction::StartPollShapeshiftOrderStatus
}

pub fn stop_poll_shapeshift_order_status() -> SwapAction {
	SwapAction::StopPollShapeshiftOrderStatus
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_creators_wrap_payload_under_tag() {
		assert_eq!(
			serde_json::to_value(change_step(2)).unwrap(),
			json!({ "type": "SWAP_STEP", "payload": 2 })
		);
		assert_eq!(
			serde_json::to_value(destination_address("0xdead")).unwrap(),
			json!({ "type": "SWAP_DESTINATION_ADDRESS", "payload": "0xdead" })
		);
		assert_eq!(
			serde_json::to_value(change_provider(Provider::Bity)).unwrap(),
			json!({ "type": "SWAP_CHANGE_PROVIDER", "payload": "bity" })
		);
		assert_eq!(
			serde_json::to_value(restart()).unwrap(),
			json!({ "type": "SWAP_RESTART" })
		);
	}

	#[test]
	fn test_unit_actions_accept_missing_payload() {
		let action: SwapAction =
			serde_json::from_str(r#"{ "type": "SWAP_BITY_ORDER_CREATE_REQUESTED" }"#).unwrap();
		assert_eq!(action, bity_order_create_requested());
	}

	#[test]
	fn test_rates_action_from_wire() {
		let action: SwapAction = serde_json::from_str(
			r#"{
				"type": "SWAP_LOAD_SHAPESHIFT_RATES_SUCCEEDED",
				"payload": { "ETHBTC": { "id": "ETHBTC", "options": ["ETH", "BTC"], "rate": "0.04" } }
			}"#,
		)
		.unwrap();

		match action {
			SwapAction::LoadShapeshiftRatesSucceeded(rates) => assert_eq!(rates.len(), 1),
			other => panic!("unexpected action {:?}", other),
		}
	}

	#[test]
	fn test_tag_matches_serialized_type() {
		let actions = vec![
			init_swap(SwapInput::new("ETH", None), SwapInput::new("BTC", None)),
			load_bity_rates_requested(),
			order_time(42),
			show_lite_send(true),
			stop_poll_shapeshift_order_status(),
		];
		for action in actions {
			let value = serde_json::to_value(&action).unwrap();
			assert_eq!(value["type"], action.tag());
			assert!(SwapAction::TAGS.contains(&action.tag()));
		}
	}

	#[test]
	fn test_payload_provider() {
		assert_eq!(
			SwapAction::payload_provider("SWAP_BITY_ORDER_STATUS_SUCCEEDED"),
			Some(Provider::Bity)
		);
		assert_eq!(
			SwapAction::payload_provider("SWAP_LOAD_SHAPESHIFT_RATES_SUCCEEDED"),
			Some(Provider::Shapeshift)
		);
		assert_eq!(SwapAction::payload_provider("SWAP_STEP"), None);
	}

	#[test]
	fn test_provider_dispatch_helpers() {
		assert_eq!(
			SwapAction::load_rates_requested(Provider::Shapeshift),
			load_shapeshift_rates_requested()
		);
		assert_eq!(
			SwapAction::load_rates_succeeded(Provider::Bity, ProviderRatesResponse::default()),
			load_bity_rates_succeeded(ProviderRatesResponse::default())
		);
	}
}
