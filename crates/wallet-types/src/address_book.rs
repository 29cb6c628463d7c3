//! Address-book types.
//!
//! Entries are persisted with whatever transient form state they had when
//! the session ended, including validation errors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Id of the pseudo-entry backing the address-book table's input row.
pub const ADDRESS_BOOK_TABLE_ID: &str = "ADDRESS_BOOK_TABLE_ID";

/// Id of the pseudo-entry backing the label of the account's own address.
pub const ACCOUNT_ADDRESS_ID: &str = "ACCOUNT_ADDRESS_ID";

/// A single address-book entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookEntry {
	pub id: String,
	pub address: String,
	pub label: String,
	/// Validation message for the address field.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address_error: Option<String>,
	/// Validation message for the label field.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label_error: Option<String>,
	/// Editable copy of the address shown in the form.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub temporary_address: Option<String>,
	/// Editable copy of the label shown in the form.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub temporary_label: Option<String>,
	#[serde(default)]
	pub is_editing: bool,
}

impl AddressBookEntry {
	pub fn new(
		id: impl Into<String>,
		address: impl Into<String>,
		label: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			address: address.into(),
			label: label.into(),
			..Default::default()
		}
	}
}

/// The address-book slice of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookState {
	/// Address to entry id.
	#[serde(default)]
	pub addresses: HashMap<String, String>,
	/// Label to entry id.
	#[serde(default)]
	pub labels: HashMap<String, String>,
	/// Entries keyed by id.
	#[serde(default)]
	pub entries: HashMap<String, AddressBookEntry>,
}
