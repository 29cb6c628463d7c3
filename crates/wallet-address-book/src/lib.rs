//! Address book maintenance.
//!
//! Entries persisted while a validation error was showing carry the error
//! marker. On load the offending value is moved back into the editable
//! temporary field and the marker dropped, so the entry reopens in edit state
//! instead of failing validation again. Rows keyed by the synthetic table ids
//! are form scratch space and never survive a load.

use wallet_types::{AddressBookState, ACCOUNT_ADDRESS_ID, ADDRESS_BOOK_TABLE_ID};

/// Ids of the synthetic rows removed on load.
pub const RESERVED_ENTRY_IDS: [&str; 2] = [ADDRESS_BOOK_TABLE_ID, ACCOUNT_ADDRESS_ID];

/// Repairs a persisted address book.
///
/// A missing address book yields an empty one. Running the repair twice
/// gives the same result as running it once.
pub fn fix_address_book_errors(address_book: Option<AddressBookState>) -> AddressBookState {
	let Some(mut address_book) = address_book else {
		return AddressBookState::default();
	};

	for (id, entry) in address_book.entries.iter_mut() {
		if has_marker(&entry.address_error) {
			tracing::debug!(entry = %id, "Restoring address with validation error for editing");
			entry.address_error = None;
			entry.temporary_address = Some(entry.address.clone());
		}
		if has_marker(&entry.label_error) {
			tracing::debug!(entry = %id, "Restoring label with validation error for editing");
			entry.label_error = None;
			entry.temporary_label = Some(entry.label.clone());
		}
	}

	for id in RESERVED_ENTRY_IDS {
		if address_book.entries.remove(id).is_some() {
			tracing::debug!(entry = %id, "Dropped reserved address book row");
		}
	}

	address_book
}

// An empty marker is not an error and is left in place.
fn has_marker(marker: &Option<String>) -> bool {
	marker.as_deref().is_some_and(|message| !message.is_empty())
}
