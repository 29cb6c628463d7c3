//! Schedule reducer.

use crate::actions::{FieldAction, ScheduleAction};
use crate::resolve::resolve_current;
use crate::state::ScheduleState;

/// Applies one action to the schedule state.
///
/// Current-value actions are resolved to field actions first.
pub fn reduce(state: ScheduleState, action: &ScheduleAction) -> ScheduleState {
	match action {
		ScheduleAction::Field(field) => apply_field(state, field.clone()),
		ScheduleAction::Current(current) => apply_field(state, resolve_current(current)),
	}
}

fn apply_field(state: ScheduleState, action: FieldAction) -> ScheduleState {
	match action {
		FieldAction::TimeBounty(time_bounty) => ScheduleState {
			time_bounty,
			..state
		},
		FieldAction::WindowSize(window_size) => ScheduleState {
			window_size,
			..state
		},
		FieldAction::WindowStart(window_start) => ScheduleState {
			window_start,
			..state
		},
		FieldAction::ScheduleTimestamp(schedule_timestamp) => ScheduleState {
			schedule_timestamp,
			..state
		},
		FieldAction::ScheduleType(schedule_type) => ScheduleState {
			schedule_type,
			..state
		},
		FieldAction::SchedulingToggle(scheduling_toggle) => ScheduleState {
			scheduling_toggle,
			..state
		},
		FieldAction::ScheduleTimezone(schedule_timezone) => ScheduleState {
			schedule_timezone,
			..state
		},
		FieldAction::GasPrice(schedule_gas_price) => ScheduleState {
			schedule_gas_price,
			..state
		},
		FieldAction::GasLimit(schedule_gas_limit) => ScheduleState {
			schedule_gas_limit,
			..state
		},
		FieldAction::Deposit(schedule_deposit) => ScheduleState {
			schedule_deposit,
			..state
		},
		FieldAction::ParamsValidity(schedule_params_validity) => ScheduleState {
			schedule_params_validity,
			..state
		},
	}
}
