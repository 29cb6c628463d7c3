//! Application state.

use serde::{Deserialize, Serialize};
use wallet_schedule::ScheduleState;
use wallet_swap::SwapState;
use wallet_types::{AddressBookState, TransactionsState};

/// All state slices owned by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
	pub swap: SwapState,
	pub schedule: ScheduleState,
	pub transactions: TransactionsState,
	pub address_book: AddressBookState,
}
