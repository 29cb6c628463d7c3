//! Conversion utilities for provider payloads.
//!
//! Providers send amounts as decimal strings; the swap slice stores them as
//! floating point numbers.

/// Parses the leading decimal number of a string.
///
/// Leading whitespace is skipped and parsing stops at the first character
/// that cannot extend the number, so `"1.5 BTC"` yields `1.5`. Returns `None`
/// when no digits are found.
///
/// # Arguments
///
/// * `input` - Amount text as sent by a provider or typed by a user
///
/// # Returns
///
/// The parsed value, or `None` when the text does not start with a number.
pub fn parse_float(input: &str) -> Option<f64> {
	let text = input.trim_start();
	let bytes = text.as_bytes();
	let mut end = 0;

	if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
		end += 1;
	}

	let int_start = end;
	while end < bytes.len() && bytes[end].is_ascii_digit() {
		end += 1;
	}
	let mut digits = end - int_start;

	if end < bytes.len() && bytes[end] == b'.' {
		let frac_start = end + 1;
		let mut frac_end = frac_start;
		while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
			frac_end += 1;
		}
		digits += frac_end - frac_start;
		end = frac_end;
	}

	if digits == 0 {
		return None;
	}

	// Exponent only counts when it carries at least one digit
	if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
		let mut exp_end = end + 1;
		if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
			exp_end += 1;
		}
		let exp_digits_start = exp_end;
		while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
			exp_end += 1;
		}
		if exp_end > exp_digits_start {
			end = exp_end;
		}
	}

	text[..end].parse::<f64>().ok()
}
