//! Storage-related types for persisted state slices.

/// Storage namespaces for the slices that survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
	/// Key for the address-book slice
	AddressBook,
	/// Key for the recent transaction list
	Transactions,
}

impl StorageKey {
	/// Returns the string representation of the storage key.
	pub fn as_str(&self) -> &'static str {
		match self {
			StorageKey::AddressBook => "address_book",
			StorageKey::Transactions => "transactions",
		}
	}
}
