//! String formatting utilities.
//!
//! Provides helpers for comparing hex addresses and shortening ids for logs.

/// Utility function to truncate a hex string for display purposes.
///
/// Shows only the first 8 characters followed by ".." for longer strings.
pub fn truncate_id(id: &str) -> String {
	if id.chars().count() <= 8 {
		id.to_string()
	} else {
		let head: String = id.chars().take(8).collect();
		format!("{}..", head)
	}
}

/// Compares two hex addresses ignoring letter case.
///
/// Checksummed and lowercase renderings of the same address compare equal.
pub fn addresses_match(a: &str, b: &str) -> bool {
	a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truncate_id() {
		assert_eq!(truncate_id("12345678"), "12345678");
		assert_eq!(truncate_id("123456789"), "12345678..");
		assert_eq!(truncate_id("0x1234567890abcdef"), "0x123456..");
	}

	#[test]
	fn test_addresses_match() {
		assert!(addresses_match(
			"0x5FbDB2315678afecb367f032d93F642f64180aa3",
			"0x5fbdb2315678afecb367f032d93f642f64180aa3"
		));
		assert!(!addresses_match(
			"0x5fbdb2315678afecb367f032d93f642f64180aa3",
			"0x6fbdb2315678afecb367f032d93f642f64180aa3"
		));
	}
}
