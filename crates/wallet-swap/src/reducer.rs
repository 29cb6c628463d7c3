//! Swap reducer.
//!
//! Each action maps the current state to the next one. The match is
//! exhaustive over [`SwapAction`]; actions that only drive timers or polling
//! return the state untouched.

use crate::actions::SwapAction;
use crate::normalize::normalize_rates;
use crate::state::SwapState;
use wallet_types::{
	parse_float, BityOrderPostResponse, BityOrderResponse, NormalizedTable, ProviderRate,
	ProviderRatesResponse, ShapeshiftOrderResponse, ShapeshiftStatusResponse, SwapOption,
};

/// Status recorded for every freshly created Shapeshift order.
pub const SHAPESHIFT_INITIAL_STATUS: &str = "no_deposits";

/// Applies one action to the swap state.
pub fn reduce(state: SwapState, action: &SwapAction) -> SwapState {
	match action {
		SwapAction::Init(inputs) => SwapState {
			origin: inputs.origin.clone(),
			destination: inputs.destination.clone(),
			..state
		},
		SwapAction::ChangeStep(step) => SwapState {
			step: *step,
			..state
		},
		SwapAction::DestinationAddress(address) => SwapState {
			destination_address: address.clone(),
			..state
		},
		SwapAction::Restart => SwapState {
			options: state.options,
			bity_rates: state.bity_rates,
			shapeshift_rates: state.shapeshift_rates,
			..SwapState::default()
		},
		SwapAction::ChangeProvider(provider) => SwapState {
			provider: *provider,
			..state
		},
		SwapAction::ShowLiteSend(show) => SwapState {
			show_lite_send: *show,
			..state
		},

		SwapAction::LoadBityRatesRequested | SwapAction::LoadShapeshiftRatesRequested => SwapState {
			is_fetching_rates: true,
			..state
		},
		SwapAction::StopLoadBityRates | SwapAction::StopLoadShapeshiftRates => SwapState {
			is_fetching_rates: false,
			..state
		},
		SwapAction::LoadBityRatesSucceeded(response) => {
			let (bity_rates, options) = load_rates(state.options, response);
			SwapState {
				bity_rates,
				options,
				is_fetching_rates: false,
				..state
			}
		},
		SwapAction::LoadShapeshiftRatesSucceeded(response) => {
			let (shapeshift_rates, options) = load_rates(state.options, response);
			SwapState {
				shapeshift_rates,
				options,
				is_fetching_rates: false,
				..state
			}
		},

		SwapAction::BityOrderCreateRequested | SwapAction::ShapeshiftOrderCreateRequested => {
			SwapState {
				is_posting_order: true,
				..state
			}
		},
		SwapAction::BityOrderCreateFailed | SwapAction::ShapeshiftOrderCreateFailed => SwapState {
			is_posting_order: false,
			..state
		},
		SwapAction::BityOrderCreateSucceeded(order) => bity_order_created(state, order),
		SwapAction::ShapeshiftOrderCreateSucceeded(order) => shapeshift_order_created(state, order),

		SwapAction::BityOrderStatusSucceeded(status) => bity_order_status(state, status),
		SwapAction::ShapeshiftOrderStatusSucceeded(status) => shapeshift_order_status(state, status),
		SwapAction::OrderTime(seconds) => SwapState {
			seconds_remaining: Some(*seconds),
			..state
		},

		SwapAction::StartOrderTimer
		| SwapAction::StopOrderTimer
		| SwapAction::StartPollBityOrderStatus
		| SwapAction::StopPollBityOrderStatus
		| SwapAction::StartPollShapeshiftOrderStatus
		| SwapAction::StopPollShapeshiftOrderStatus => state,
	}
}

/// Normalizes a rate response and merges its options into the shared table.
///
/// Options keep their position in the shared table; an incoming descriptor
/// replaces the stored one, borrowing any field it lacks from it.
fn load_rates(
	mut options: NormalizedTable<SwapOption>,
	response: &ProviderRatesResponse,
) -> (NormalizedTable<ProviderRate>, NormalizedTable<SwapOption>) {
	let normalized = normalize_rates(response);

	for (id, incoming) in normalized.options.iter() {
		let mut merged = incoming.clone();
		if let Some(previous) = options.get(id) {
			merged.fill_missing(previous);
		}
		options.insert(id, merged);
	}

	(normalized.rates, options)
}

fn bity_order_created(state: SwapState, order: &BityOrderPostResponse) -> SwapState {
	tracing::debug!(order_id = %order.id, valid_for = order.valid_for, "Bity order created");

	SwapState {
		bity_order: Some(order.clone()),
		shapeshift_order: None,
		is_posting_order: false,
		origin_amount: parse_float(&order.input.amount),
		destination_amount: parse_float(&order.output.amount),
		seconds_remaining: Some(order.valid_for),
		valid_for: Some(order.valid_for),
		order_timestamp_created_iso_string: Some(order.timestamp_created.clone()),
		payment_address: Some(order.payment_address.clone()),
		bity_order_status: Some(order.status.clone()),
		order_id: Some(order.id.clone()),
		..state
	}
}

// Shapeshift orders leave the countdown fields alone and always start out
// with no deposits, whatever the response carries.
fn shapeshift_order_created(state: SwapState, order: &ShapeshiftOrderResponse) -> SwapState {
	tracing::debug!(order_id = %order.order_id, pair = %order.pair, "Shapeshift order created");

	SwapState {
		shapeshift_order: Some(order.clone()),
		bity_order: None,
		is_posting_order: false,
		origin_amount: parse_float(&order.deposit_amount),
		destination_amount: parse_float(&order.withdrawal_amount),
		payment_address: Some(order.deposit.clone()),
		shapeshift_order_status: Some(SHAPESHIFT_INITIAL_STATUS.to_string()),
		order_id: Some(order.order_id.clone()),
		..state
	}
}

fn bity_order_status(state: SwapState, status: &BityOrderResponse) -> SwapState {
	if state.bity_order_status.as_deref() != Some(status.output.status.as_str()) {
		tracing::info!(status = %status.output.status, "Bity order status changed");
	}

	SwapState {
		output_tx: Some(status.output.reference.clone()),
		bity_order_status: Some(status.output.status.clone()),
		..state
	}
}

fn shapeshift_order_status(state: SwapState, status: &ShapeshiftStatusResponse) -> SwapState {
	if state.shapeshift_order_status.as_deref() != Some(status.status.as_str()) {
		tracing::info!(status = %status.status, "Shapeshift order status changed");
	}

	SwapState {
		shapeshift_order_status: Some(status.status.clone()),
		output_tx: status.transaction.clone(),
		..state
	}
}
