//! Application store for the wallet client.
//!
//! This crate ties the state slices together: it routes actions to the slice
//! reducers, loads the persisted slices at start-up, writes them back, and
//! answers selector queries for the active network and wallet.

use thiserror::Error;
use wallet_config::ConfigError;
use wallet_storage::StorageError;

pub mod action;
pub mod builder;
pub mod state;
pub mod store;

pub use action::{Action, UnrecognizedAction};
pub use builder::{StoreBuilder, StorageFactories};
pub use state::AppState;
pub use store::{Session, Store};

/// Errors that can occur while building or running the store.
#[derive(Debug, Error)]
pub enum StoreError {
	/// Error related to configuration issues.
	#[error("Configuration error: {0}")]
	Config(String),
	/// Error from the storage backend.
	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),
}

impl From<ConfigError> for StoreError {
	fn from(err: ConfigError) -> Self {
		StoreError::Config(err.to_string())
	}
}
