//! The active wallet as seen by the state layer.
//!
//! Key management lives elsewhere; selectors only need the address string.

/// Anything that can report the address it signs for.
pub trait WalletInstance {
	/// Checksummed or lowercase hex address, with `0x` prefix.
	fn address_string(&self) -> String;
}

/// A wallet known only by its address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOnlyWallet {
	address: String,
}

impl WatchOnlyWallet {
	pub fn new(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
		}
	}
}

impl WalletInstance for WatchOnlyWallet {
	fn address_string(&self) -> String {
		self.address.clone()
	}
}
