//! Transactions reducer.

use crate::actions::TransactionsAction;
use wallet_types::{TransactionState, TransactionsState};

/// Applies one action to the transactions state.
pub fn reduce(mut state: TransactionsState, action: &TransactionsAction) -> TransactionsState {
	match action {
		TransactionsAction::FetchTransactionData(hash) => {
			state.tx_data.insert(
				hash.clone(),
				TransactionState {
					is_loading: true,
					..TransactionState::default()
				},
			);
		},
		TransactionsAction::FetchTransactionDataCompleted(fetched) => {
			if let Some(error) = &fetched.error {
				tracing::debug!(hash = %fetched.hash, %error, "Transaction lookup failed");
			}
			state.tx_data.insert(
				fetched.hash.clone(),
				TransactionState {
					data: fetched.data.clone(),
					receipt: fetched.receipt.clone(),
					error: fetched.error.clone(),
					is_loading: false,
				},
			);
		},
		TransactionsAction::AddRecentTransaction(transaction) => {
			// Newest first, one record per hash
			state.recent.retain(|saved| saved.hash != transaction.hash);
			state.recent.insert(0, transaction.clone());
		},
		TransactionsAction::ResetTransactionData => {
			state.tx_data.clear();
		},
	}
	state
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::actions::*;
	use alloy_primitives::U256;
	use wallet_types::{SavedTransaction, TransactionData, TransactionReceipt, TransactionStatus};

	fn saved(hash: &str, time: u64) -> SavedTransaction {
		SavedTransaction {
			hash: hash.into(),
			to: "0x4bbeEB066eD09B7AEd07bF39EEe0460DFa261520".into(),
			from: "0x0000000000000000000000000000000000000001".into(),
			value: "1000000000000000000".into(),
			chain_id: 1,
			time,
		}
	}

	#[test]
	fn test_fetch_lifecycle() {
		let state = reduce(TransactionsState::default(), &fetch_transaction_data("0xaa"));
		let entry = &state.tx_data["0xaa"];
		assert!(entry.is_loading);
		assert!(entry.data.is_none());

		let data = TransactionData {
			hash: "0xaa".into(),
			from: "0x0000000000000000000000000000000000000001".into(),
			to: None,
			value: U256::from(1u64),
			gas_price: U256::from(20_000_000_000u64),
			gas_limit: U256::from(21_000u64),
			nonce: 7,
			data: String::new(),
			block_number: Some(100),
			chain_id: 1,
		};
		let receipt = TransactionReceipt {
			status: TransactionStatus::Success,
			gas_used: Some(U256::from(21_000u64)),
			block_number: Some(100),
		};
		let state = reduce(
			state,
			&set_transaction_data(FetchedTransaction {
				hash: "0xaa".into(),
				data: Some(data.clone()),
				receipt: Some(receipt.clone()),
				error: None,
			}),
		);

		let entry = &state.tx_data["0xaa"];
		assert!(!entry.is_loading);
		assert_eq!(entry.data, Some(data));
		assert_eq!(entry.receipt, Some(receipt));
	}

	#[test]
	fn test_recent_newest_first_without_duplicates() {
		let state = [
			add_recent_transaction(saved("0x01", 1)),
			add_recent_transaction(saved("0x02", 2)),
			add_recent_transaction(saved("0x01", 3)),
		]
		.iter()
		.fold(TransactionsState::default(), reduce);

		let hashes: Vec<&str> = state.recent.iter().map(|tx| tx.hash.as_str()).collect();
		assert_eq!(hashes, vec!["0x01", "0x02"]);
		assert_eq!(state.recent[0].time, 3);
	}

	#[test]
	fn test_reset_keeps_recent() {
		let state = reduce(TransactionsState::default(), &fetch_transaction_data("0xaa"));
		let state = reduce(state, &add_recent_transaction(saved("0xaa", 1)));
		let state = reduce(state, &reset_transaction_data());

		assert!(state.tx_data.is_empty());
		assert_eq!(state.recent.len(), 1);
	}
}
