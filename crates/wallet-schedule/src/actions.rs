//! Schedule actions and their creators.
//!
//! Field actions carry an already parsed `{ raw, value }` pair and replace
//! the matching field. Current-value actions carry what the user typed and
//! are turned into field actions by [`crate::resolve_current`].

use crate::state::{Field, ScheduleType, Toggle};
use alloy_primitives::U256;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Actions that set one form field to a parsed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum FieldAction {
	#[serde(rename = "TIME_BOUNTY_FIELD_SET")]
	TimeBounty(Field<U256>),
	#[serde(rename = "WINDOW_SIZE_FIELD_SET")]
	WindowSize(Field<u64>),
	#[serde(rename = "WINDOW_START_FIELD_SET")]
	WindowStart(Field<u64>),
	#[serde(rename = "SCHEDULE_TIMESTAMP_FIELD_SET")]
	ScheduleTimestamp(Field<NaiveDateTime>),
	#[serde(rename = "SCHEDULE_TYPE_SET")]
	ScheduleType(Field<ScheduleType>),
	#[serde(rename = "SCHEDULING_TOGGLE_SET")]
	SchedulingToggle(Toggle),
	#[serde(rename = "SCHEDULE_TIMEZONE_SET")]
	ScheduleTimezone(Field<String>),
	#[serde(rename = "SCHEDULE_GAS_PRICE_FIELD_SET")]
	GasPrice(Field<U256>),
	#[serde(rename = "SCHEDULE_GAS_LIMIT_FIELD_SET")]
	GasLimit(Field<u64>),
	#[serde(rename = "SCHEDULE_DEPOSIT_FIELD_SET")]
	Deposit(Field<U256>),
	#[serde(rename = "SCHEDULE_PARAMS_VALIDITY_SET")]
	ParamsValidity(Toggle),
}

/// Actions carrying raw user input for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CurrentAction {
	#[serde(rename = "CURRENT_SCHEDULE_TIMESTAMP_SET")]
	ScheduleTimestamp(String),
	#[serde(rename = "CURRENT_SCHEDULE_TIMEZONE_SET")]
	ScheduleTimezone(String),
	#[serde(rename = "CURRENT_SCHEDULE_TYPE")]
	ScheduleType(String),
	#[serde(rename = "CURRENT_SCHEDULING_TOGGLE")]
	SchedulingToggle(Toggle),
	#[serde(rename = "CURRENT_TIME_BOUNTY_SET")]
	TimeBounty(String),
	#[serde(rename = "CURRENT_WINDOW_SIZE_SET")]
	WindowSize(String),
	#[serde(rename = "CURRENT_WINDOW_START_SET")]
	WindowStart(String),
}

/// Any action the schedule reducer handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScheduleAction {
	Field(FieldAction),
	Current(CurrentAction),
}

impl ScheduleAction {
	/// Wire tags of every schedule action.
	pub const TAGS: &'static [&'static str] = &[
		"TIME_BOUNTY_FIELD_SET",
		"WINDOW_SIZE_FIELD_SET",
		"WINDOW_START_FIELD_SET",
		"SCHEDULE_TIMESTAMP_FIELD_SET",
		"SCHEDULE_TYPE_SET",
		"SCHEDULING_TOGGLE_SET",
		"SCHEDULE_TIMEZONE_SET",
		"SCHEDULE_GAS_PRICE_FIELD_SET",
		"SCHEDULE_GAS_LIMIT_FIELD_SET",
		"SCHEDULE_DEPOSIT_FIELD_SET",
		"SCHEDULE_PARAMS_VALIDITY_SET",
		"CURRENT_SCHEDULE_TIMESTAMP_SET",
		"CURRENT_SCHEDULE_TIMEZONE_SET",
		"CURRENT_SCHEDULE_TYPE",
		"CURRENT_SCHEDULING_TOGGLE",
		"CURRENT_TIME_BOUNTY_SET",
		"CURRENT_WINDOW_SIZE_SET",
		"CURRENT_WINDOW_START_SET",
	];
}

impl From<FieldAction> for ScheduleAction {
	fn from(action: FieldAction) -> Self {
		ScheduleAction::Field(action)
	}
}

impl From<CurrentAction> for ScheduleAction {
	fn from(action: CurrentAction) -> Self {
		ScheduleAction::Current(action)
	}
}

pub fn set_time_bounty_field(payload: Field<U256>) -> ScheduleAction {
	FieldAction::TimeBounty(payload).into()
}

pub fn set_window_size_field(payload: Field<u64>) -> ScheduleAction {
	FieldAction::WindowSize(payload).into()
}

pub fn set_window_start_field(payload: Field<u64>) -> ScheduleAction {
	FieldAction::WindowStart(payload).into()
}

pub fn set_schedule_timestamp_field(payload: Field<NaiveDateTime>) -> ScheduleAction {
	FieldAction::ScheduleTimestamp(payload).into()
}

pub fn set_schedule_type(payload: Field<ScheduleType>) -> ScheduleAction {
	FieldAction::ScheduleType(payload).into()
}

pub fn set_scheduling_toggle(payload: Toggle) -> ScheduleAction {
	FieldAction::SchedulingToggle(payload).into()
}

pub fn set_schedule_timezone(payload: Field<String>) -> ScheduleAction {
	FieldAction::ScheduleTimezone(payload).into()
}

pub fn set_schedule_gas_price_field(payload: Field<U256>) -> ScheduleAction {
	FieldAction::GasPrice(payload).into()
}

pub fn set_schedule_gas_limit_field(payload: Field<u64>) -> ScheduleAction {
	FieldAction::GasLimit(payload).into()
}

pub fn set_schedule_deposit_field(payload: Field<U256>) -> ScheduleAction {
	FieldAction::Deposit(payload).into()
}

pub fn set_schedule_params_validity(payload: Toggle) -> ScheduleAction {
	FieldAction::ParamsValidity(payload).into()
}

pub fn set_current_schedule_timestamp(raw: impl Into<String>) -> ScheduleAction {
	CurrentAction::ScheduleTimestamp(raw.into()).into()
}

pub fn set_current_schedule_timezone(raw: impl Into<String>) -> ScheduleAction {
	CurrentAction::ScheduleTimezone(raw.into()).into()
}

pub fn set_current_schedule_type(raw: impl Into<String>) -> ScheduleAction {
	CurrentAction::ScheduleType(raw.into()).into()
}

pub fn set_current_scheduling_toggle(payload: Toggle) -> ScheduleAction {
	CurrentAction::SchedulingToggle(payload).into()
}

pub fn set_current_time_bounty(raw: impl Into<String>) -> ScheduleAction {
	CurrentAction::TimeBounty(raw.into()).into()
}

pub fn set_current_window_size(raw: impl Into<String>) -> ScheduleAction {
	CurrentAction::WindowSize(raw.into()).into()
}

pub fn set_current_window_start(raw: impl Into<String>) -> ScheduleAction {
	CurrentAction::WindowStart(raw.into()).into()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_field_action_wire_format() {
		let action = set_window_size_field(Field::new("10", Some(10)));
		assert_eq!(
			serde_json::to_value(&action).unwrap(),
			json!({ "type": "WINDOW_SIZE_FIELD_SET", "payload": { "raw": "10", "value": 10 } })
		);

		let toggle = set_scheduling_toggle(Toggle::new(true));
		assert_eq!(
			serde_json::to_value(&toggle).unwrap(),
			json!({ "type": "SCHEDULING_TOGGLE_SET", "payload": { "value": true } })
		);
	}

	#[test]
	fn test_no_validation_at_creation() {
		let action = set_window_size_field(Field::new("ten", Some(10)));
		match action {
			ScheduleAction::Field(FieldAction::WindowSize(field)) => {
				assert_eq!(field.raw, "ten");
				assert_eq!(field.value, Some(10));
			},
			other => panic!("unexpected action {:?}", other),
		}
	}

	#[test]
	fn test_current_action_from_wire() {
		let action: ScheduleAction =
			serde_json::from_value(json!({ "type": "CURRENT_TIME_BOUNTY_SET", "payload": "0.002" }))
				.unwrap();
		assert_eq!(action, set_current_time_bounty("0.002"));

		let action: ScheduleAction = serde_json::from_value(json!({
			"type": "SCHEDULE_GAS_LIMIT_FIELD_SET",
			"payload": { "raw": "50000", "value": 50000 }
		}))
		.unwrap();
		assert_eq!(action, set_schedule_gas_limit_field(Field::new("50000", Some(50_000))));
	}

	#[test]
	fn test_tags_cover_every_action() {
		let actions = vec![
			set_time_bounty_field(Field::empty()),
			set_window_size_field(Field::empty()),
			set_window_start_field(Field::empty()),
			set_schedule_timestamp_field(Field::empty()),
			set_schedule_type(Field::empty()),
			set_scheduling_toggle(Toggle::default()),
			set_schedule_timezone(Field::empty()),
			set_schedule_gas_price_field(Field::empty()),
			set_schedule_gas_limit_field(Field::empty()),
			set_schedule_deposit_field(Field::empty()),
			set_schedule_params_validity(Toggle::default()),
			set_current_schedule_timestamp(""),
			set_current_schedule_timezone(""),
			set_current_schedule_type(""),
			set_current_scheduling_toggle(Toggle::default()),
			set_current_time_bounty(""),
			set_current_window_size(""),
			set_current_window_start(""),
		];
		assert_eq!(actions.len(), ScheduleAction::TAGS.len());

		for (action, tag) in actions.iter().zip(ScheduleAction::TAGS) {
			let value = serde_json::to_value(action).unwrap();
			assert_eq!(value["type"], *tag);
		}
	}
}
