//! The store: owns application state and applies actions to it.

use crate::action::Action;
use crate::state::AppState;
use crate::StoreError;
use std::collections::HashMap;
use wallet_address_book::fix_address_book_errors;
use wallet_config::Config;
use wallet_schedule::ScheduleState;
use wallet_storage::StorageService;
use wallet_swap::actions::init_swap;
use wallet_swap::SwapState;
use wallet_types::{
	truncate_id, AddressBookState, NetworkConfig, SavedTransaction, StorageKey, SwapInput,
	TransactionState, WatchOnlyWallet,
};

/// Who is using the wallet and on which network.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
	/// Wallet id; persisted slices are stored under it.
	pub id: String,
	pub network: NetworkConfig,
	pub wallet: Option<WatchOnlyWallet>,
}

impl Session {
	pub fn from_config(config: &Config) -> Result<Self, StoreError> {
		Ok(Self {
			id: config.wallet.id.clone(),
			network: config.active_network()?.clone(),
			wallet: config.wallet.address.as_deref().map(WatchOnlyWallet::new),
		})
	}
}

/// Single owner of the application state.
///
/// Actions are applied one at a time, in the order they are dispatched.
pub struct Store {
	state: AppState,
	session: Session,
}

impl Store {
	/// Creates a store with fresh state seeded from the configured defaults.
	pub fn new(config: &Config) -> Result<Self, StoreError> {
		let session = Session::from_config(config)?;

		let swap = wallet_swap::reduce(
			SwapState::default(),
			&init_swap(
				SwapInput::new(config.swap.default_origin.as_str(), None),
				SwapInput::new(config.swap.default_destination.as_str(), None),
			),
		);
		let state = AppState {
			swap,
			schedule: ScheduleState::from_config(&config.schedule),
			..AppState::default()
		};

		Ok(Self::with_state(state, session))
	}

	pub fn with_state(state: AppState, session: Session) -> Self {
		Self { state, session }
	}

	pub fn state(&self) -> &AppState {
		&self.state
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Applies an action to the slice it belongs to.
	///
	/// Unrecognized actions leave the state unchanged.
	pub fn dispatch(&mut self, action: &Action) {
		let state = &mut self.state;
		match action {
			Action::Swap(action) => {
				tracing::trace!(action = action.tag(), "Dispatching");
				state.swap = wallet_swap::reduce(std::mem::take(&mut state.swap), action);
			},
			Action::Schedule(action) => {
				tracing::trace!(slice = "schedule", "Dispatching");
				state.schedule = wallet_schedule::reduce(std::mem::take(&mut state.schedule), action);
			},
			Action::Transactions(action) => {
				tracing::trace!(slice = "transactions", "Dispatching");
				state.transactions =
					wallet_transactions::reduce(std::mem::take(&mut state.transactions), action);
			},
			Action::Unrecognized(action) => {
				tracing::trace!(action = %action.kind, "Ignoring unrecognized action");
			},
		}
	}

	/// Loads the persisted slices, repairing the address book on the way in.
	///
	/// Slices that were never persisted load as empty.
	pub async fn hydrate(&mut self, storage: &StorageService) -> Result<(), StoreError> {
		let id = self.session.id.as_str();

		let address_book: Option<AddressBookState> = storage
			.retrieve_optional(StorageKey::AddressBook.as_str(), id)
			.await?;
		self.state.address_book = fix_address_book_errors(address_book);

		let recent: Option<Vec<SavedTransaction>> = storage
			.retrieve_optional(StorageKey::Transactions.as_str(), id)
			.await?;
		self.state.transactions.recent = recent.unwrap_or_default();

		tracing::info!(
			wallet = %truncate_id(id),
			address_book_entries = self.state.address_book.entries.len(),
			recent_transactions = self.state.transactions.recent.len(),
			"Hydrated store"
		);
		Ok(())
	}

	/// Writes the address book and the recent transaction list.
	pub async fn persist(&self, storage: &StorageService) -> Result<(), StoreError> {
		let id = self.session.id.as_str();

		storage
			.store(StorageKey::AddressBook.as_str(), id, &self.state.address_book)
			.await?;
		storage
			.store(StorageKey::Transactions.as_str(), id, &self.state.transactions.recent)
			.await?;

		tracing::debug!(wallet = %truncate_id(id), "Persisted store");
		Ok(())
	}

	pub fn transaction_datas(&self) -> &HashMap<String, TransactionState> {
		wallet_transactions::get_transaction_datas(&self.state.transactions)
	}

	pub fn recent_transactions(&self) -> &[SavedTransaction] {
		wallet_transactions::get_recent_transactions(&self.state.transactions)
	}

	/// Recent transactions on the session's network.
	pub fn recent_network_transactions(&self) -> Vec<&SavedTransaction> {
		wallet_transactions::get_recent_network_transactions(
			&self.state.transactions,
			&self.session.network,
		)
	}

	/// Recent transactions of the session's wallet on the session's network.
	pub fn recent_wallet_transactions(&self) -> Vec<&SavedTransaction> {
		wallet_transactions::get_recent_wallet_transactions(
			&self.state.transactions,
			&self.session.network,
			self.session.wallet.as_ref(),
		)
	}
}
