//! Transactions actions and their creators.

use serde::{Deserialize, Serialize};
use wallet_types::{SavedTransaction, TransactionData, TransactionReceipt};

/// Result of looking a transaction up on the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedTransaction {
	pub hash: String,
	#[serde(default)]
	pub data: Option<TransactionData>,
	#[serde(default)]
	pub receipt: Option<TransactionReceipt>,
	#[serde(default)]
	pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum TransactionsAction {
	/// A lookup for the given hash has started.
	#[serde(rename = "TRANSACTIONS_FETCH_TRANSACTION_DATA")]
	FetchTransactionData(String),
	#[serde(rename = "TRANSACTIONS_FETCH_TRANSACTION_DATA_COMPLETED")]
	FetchTransactionDataCompleted(FetchedTransaction),
	#[serde(rename = "TRANSACTIONS_ADD_RECENT_TRANSACTION")]
	AddRecentTransaction(SavedTransaction),
	#[serde(rename = "TRANSACTIONS_RESET_TRANSACTION_DATA")]
	ResetTransactionData,
}

impl TransactionsAction {
	/// Wire tags of every transactions action.
	pub const TAGS: &'static [&'static str] = &[
		"TRANSACTIONS_FETCH_TRANSACTION_DATA",
		"TRANSACTIONS_FETCH_TRANSACTION_DATA_COMPLETED",
		"TRANSACTIONS_ADD_RECENT_TRANSACTION",
		"TRANSACTIONS_RESET_TRANSACTION_DATA",
	];
}

pub fn fetch_transaction_data(hash: impl Into<String>) -> TransactionsAction {
	TransactionsAction::FetchTransactionData(hash.into())
}

pub fn set_transaction_data(fetched: FetchedTransaction) -> TransactionsAction {
	TransactionsAction::FetchTransactionDataCompleted(fetched)
}

pub fn add_recent_transaction(transaction: SavedTransaction) -> TransactionsAction {
	TransactionsAction::AddRecentTransaction(transaction)
}

pub fn reset_transaction_data() -> TransactionsAction {
	TransactionsAction::ResetTransactionData
}
