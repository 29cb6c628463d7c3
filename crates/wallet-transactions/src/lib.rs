//! Transactions slice: fetched transaction data and the recent list.

pub mod actions;
pub mod reducer;
pub mod selectors;

pub use actions::{FetchedTransaction, TransactionsAction};
pub use reducer::reduce;
pub use selectors::{
	get_recent_network_transactions, get_recent_transactions, get_recent_wallet_transactions,
	get_transaction_datas,
};
