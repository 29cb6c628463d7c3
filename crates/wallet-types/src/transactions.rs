//! Transaction types for the transactions slice.
//!
//! Saved transactions are persisted between sessions; fetch state for
//! individual hashes lives only in memory.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A submitted transaction as remembered by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTransaction {
	pub hash: String,
	pub to: String,
	pub from: String,
	/// Value in wei as a decimal string.
	pub value: String,
	pub chain_id: u64,
	/// Submission time in unix milliseconds.
	pub time: u64,
}

/// Transaction fields as returned by the node for a given hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
	pub hash: String,
	pub from: String,
	#[serde(default)]
	pub to: Option<String>,
	pub value: U256,
	pub gas_price: U256,
	pub gas_limit: U256,
	pub nonce: u64,
	#[serde(default)]
	pub data: String,
	#[serde(default)]
	pub block_number: Option<u64>,
	pub chain_id: u64,
}

/// Mined status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
	Pending,
	Success,
	Failure,
}

/// Receipt summary for a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
	pub status: TransactionStatus,
	#[serde(default)]
	pub gas_used: Option<U256>,
	#[serde(default)]
	pub block_number: Option<u64>,
}

/// Fetch state for one transaction hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionState {
	pub data: Option<TransactionData>,
	pub receipt: Option<TransactionReceipt>,
	pub error: Option<String>,
	pub is_loading: bool,
}

/// The transactions slice of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsState {
	/// Fetch state keyed by transaction hash.
	#[serde(default)]
	pub tx_data: HashMap<String, TransactionState>,
	/// Saved transactions, newest first.
	#[serde(default)]
	pub recent: Vec<SavedTransaction>,
}
