//! Transaction selectors.
//!
//! Selectors read the slices they need from their arguments and recompute
//! on every call.

use std::collections::HashMap;
use wallet_types::{
	addresses_match, NetworkConfig, SavedTransaction, TransactionState, TransactionsState,
	WalletInstance,
};

pub fn get_transaction_datas(state: &TransactionsState) -> &HashMap<String, TransactionState> {
	&state.tx_data
}

pub fn get_recent_transactions(state: &TransactionsState) -> &[SavedTransaction] {
	&state.recent
}

/// Recent transactions sent on the given network.
pub fn get_recent_network_transactions<'a>(
	state: &'a TransactionsState,
	network: &NetworkConfig,
) -> Vec<&'a SavedTransaction> {
	get_recent_transactions(state)
		.iter()
		.filter(|tx| tx.chain_id == network.chain_id)
		.collect()
}

/// Recent transactions sent by the active wallet on the given network.
///
/// Addresses are compared case-insensitively. Without a wallet the list is
/// empty.
pub fn get_recent_wallet_transactions<'a, W>(
	state: &'a TransactionsState,
	network: &NetworkConfig,
	wallet: Option<&W>,
) -> Vec<&'a SavedTransaction>
where
	W: WalletInstance + ?Sized,
{
	let Some(wallet) = wallet else {
		return Vec::new();
	};
	let address = wallet.address_string();

	get_recent_network_transactions(state, network)
		.into_iter()
		.filter(|tx| addresses_match(&tx.from, &address))
		.collect()
}
