//! Turns raw user input into field actions.

use crate::actions::{CurrentAction, FieldAction};
use crate::state::{Field, ScheduleType};
use alloy_primitives::utils::parse_ether;
use alloy_primitives::U256;
use chrono::NaiveDateTime;

/// Format of the schedule timestamp input.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Converts a current-value action into the field action it stands for.
///
/// The raw text is always kept. When it does not parse, the field action
/// carries `value: None` so the form can show the text as invalid.
pub fn resolve_current(action: &CurrentAction) -> FieldAction {
	match action {
		CurrentAction::TimeBounty(raw) => FieldAction::TimeBounty(parse_field(raw, parse_wei)),
		CurrentAction::WindowSize(raw) => FieldAction::WindowSize(parse_field(raw, parse_integer)),
		CurrentAction::WindowStart(raw) => FieldAction::WindowStart(parse_field(raw, parse_integer)),
		CurrentAction::ScheduleTimestamp(raw) => {
			FieldAction::ScheduleTimestamp(parse_field(raw, parse_timestamp))
		},
		CurrentAction::ScheduleType(raw) => {
			FieldAction::ScheduleType(parse_field(raw, |text| text.parse::<ScheduleType>().ok()))
		},
		CurrentAction::ScheduleTimezone(raw) => FieldAction::ScheduleTimezone(parse_field(raw, |text| {
			let text = text.trim();
			(!text.is_empty()).then(|| text.to_string())
		})),
		CurrentAction::SchedulingToggle(toggle) => FieldAction::SchedulingToggle(*toggle),
	}
}

fn parse_field<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Field<T> {
	let value = parse(raw);
	if value.is_none() {
		tracing::trace!(raw, "Schedule input did not parse");
	}
	Field::new(raw, value)
}

/// Ether amount to wei. Negative amounts are rejected.
fn parse_wei(text: &str) -> Option<U256> {
	let text = text.trim();
	if text.is_empty() || text.starts_with('-') {
		return None;
	}
	parse_ether(text).ok()
}

fn parse_integer(text: &str) -> Option<u64> {
	text.trim().parse::<u64>().ok()
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
	NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::state::Toggle;
	use chrono::NaiveDate;

	#[test]
	fn test_time_bounty_in_ether() {
		let action = resolve_current(&CurrentAction::TimeBounty("0.002".into()));
		assert_eq!(
			action,
			FieldAction::TimeBounty(Field::new(
				"0.002",
				Some(U256::from(2_000_000_000_000_000u64))
			))
		);
	}

	#[test]
	fn test_invalid_input_keeps_raw_text() {
		let action = resolve_current(&CurrentAction::TimeBounty("lots".into()));
		assert_eq!(action, FieldAction::TimeBounty(Field::new("lots", None)));

		let action = resolve_current(&CurrentAction::TimeBounty("-1".into()));
		assert_eq!(action, FieldAction::TimeBounty(Field::new("-1", None)));

		let action = resolve_current(&CurrentAction::WindowSize("1.5".into()));
		assert_eq!(action, FieldAction::WindowSize(Field::new("1.5", None)));
	}

	#[test]
	fn test_window_fields() {
		assert_eq!(
			resolve_current(&CurrentAction::WindowSize("30".into())),
			FieldAction::WindowSize(Field::new("30", Some(30)))
		);
		assert_eq!(
			resolve_current(&CurrentAction::WindowStart(" 5000000 ".into())),
			FieldAction::WindowStart(Field::new(" 5000000 ", Some(5_000_000)))
		);
	}

	#[test]
	fn test_timestamp() {
		let expected = NaiveDate::from_ymd_opt(2018, 4, 1)
			.and_then(|date| date.and_hms_opt(14, 30, 0));
		assert_eq!(
			resolve_current(&CurrentAction::ScheduleTimestamp("2018-04-01 14:30".into())),
			FieldAction::ScheduleTimestamp(Field::new("2018-04-01 14:30", expected))
		);
		assert_eq!(
			resolve_current(&CurrentAction::ScheduleTimestamp("April first".into())),
			FieldAction::ScheduleTimestamp(Field::new("April first", None))
		);
	}

	#[test]
	fn test_type_timezone_toggle() {
		assert_eq!(
			resolve_current(&CurrentAction::ScheduleType("block".into())),
			FieldAction::ScheduleType(Field::new("block", Some(ScheduleType::Block)))
		);
		assert_eq!(
			resolve_current(&CurrentAction::ScheduleTimezone("".into())),
			FieldAction::ScheduleTimezone(Field::new("", None))
		);
		assert_eq!(
			resolve_current(&CurrentAction::ScheduleTimezone("Asia/Tokyo".into())),
			FieldAction::ScheduleTimezone(Field::new("Asia/Tokyo", Some("Asia/Tokyo".to_string())))
		);
		assert_eq!(
			resolve_current(&CurrentAction::SchedulingToggle(Toggle::new(true))),
			FieldAction::SchedulingToggle(Toggle::new(true))
		);
	}
}
