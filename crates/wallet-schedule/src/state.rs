//! Schedule form state.

use alloy_primitives::utils::format_units;
use alloy_primitives::U256;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wallet_config::ScheduleConfig;

/// A form field: the text as entered and its parsed value.
///
/// `value` is `None` while `raw` does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field<T> {
	pub raw: String,
	pub value: Option<T>,
}

impl<T> Field<T> {
	pub fn new(raw: impl Into<String>, value: Option<T>) -> Self {
		Self {
			raw: raw.into(),
			value,
		}
	}

	pub fn empty() -> Self {
		Self {
			raw: String::new(),
			value: None,
		}
	}

	/// Whether the raw text parsed.
	pub fn is_valid(&self) -> bool {
		self.value.is_some()
	}
}

impl<T> Default for Field<T> {
	fn default() -> Self {
		Self::empty()
	}
}

/// A boolean form setting, carried as `{ "value": bool }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
	pub value: bool,
}

impl Toggle {
	pub fn new(value: bool) -> Self {
		Self { value }
	}
}

/// What the execution window is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
	/// Window opens at a wall-clock timestamp.
	Time,
	/// Window opens at a block number.
	Block,
}

impl fmt::Display for ScheduleType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ScheduleType::Time => write!(f, "time"),
			ScheduleType::Block => write!(f, "block"),
		}
	}
}

impl FromStr for ScheduleType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"time" => Ok(ScheduleType::Time),
			"block" => Ok(ScheduleType::Block),
			other => Err(format!("Unknown schedule type '{}'", other)),
		}
	}
}

/// State of the scheduling form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleState {
	/// Paid to whoever executes the transaction, in wei.
	pub time_bounty: Field<U256>,
	pub window_size: Field<u64>,
	/// Block number opening the window when scheduling by block.
	pub window_start: Field<u64>,
	/// Local wall-clock time in `schedule_timezone`.
	pub schedule_timestamp: Field<NaiveDateTime>,
	pub schedule_type: Field<ScheduleType>,
	pub scheduling_toggle: Toggle,
	pub schedule_timezone: Field<String>,
	/// Gas price of the scheduled call, in wei.
	pub schedule_gas_price: Field<U256>,
	pub schedule_gas_limit: Field<u64>,
	/// Deposit required by the scheduler, in wei.
	pub schedule_deposit: Field<U256>,
	pub schedule_params_validity: Toggle,
}

impl ScheduleState {
	/// Fresh form pre-filled with the configured defaults.
	///
	/// Raw texts are shown in the units the form uses: ether for the bounty
	/// and gwei for the gas price.
	pub fn from_config(config: &ScheduleConfig) -> Self {
		let time_bounty = U256::from(config.time_bounty_wei);
		let gas_price = U256::from(config.gas_price_wei);

		Self {
			time_bounty: Field::new(display_units(time_bounty, "ether"), Some(time_bounty)),
			window_size: Field::empty(),
			window_start: Field::empty(),
			schedule_timestamp: Field::empty(),
			schedule_type: Field::new(ScheduleType::Time.to_string(), Some(ScheduleType::Time)),
			scheduling_toggle: Toggle::new(false),
			schedule_timezone: Field::new(config.timezone.clone(), Some(config.timezone.clone())),
			schedule_gas_price: Field::new(display_units(gas_price, "gwei"), Some(gas_price)),
			schedule_gas_limit: Field::new(config.gas_limit.to_string(), Some(config.gas_limit)),
			schedule_deposit: Field::empty(),
			schedule_params_validity: Toggle::new(false),
		}
	}
}

impl Default for ScheduleState {
	fn default() -> Self {
		Self::from_config(&ScheduleConfig::default())
	}
}

/// Formats a wei amount in `unit` without trailing zeros.
pub(crate) fn display_units(amount: U256, unit: &str) -> String {
	match format_units(amount, unit) {
		Ok(text) if text.contains('.') => text
			.trim_end_matches('0')
			.trim_end_matches('.')
			.to_string(),
		Ok(text) => text,
		Err(_) => amount.to_string(),
	}
}
