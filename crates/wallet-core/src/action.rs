//! Root action type.
//!
//! Every action is a `{ "type": TAG, "payload": ... }` object. The tag picks
//! the slice; tags no slice claims are kept as [`UnrecognizedAction`] and
//! ignored by the store.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wallet_schedule::ScheduleAction;
use wallet_swap::SwapAction;
use wallet_transactions::TransactionsAction;

/// An action with a tag this layer does not handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnrecognizedAction {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub payload: Option<Value>,
}

/// Any action that can be dispatched to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Action {
	Swap(SwapAction),
	Schedule(ScheduleAction),
	Transactions(TransactionsAction),
	Unrecognized(UnrecognizedAction),
}

impl Action {
	/// Slice the action belongs to, for logging.
	pub fn slice(&self) -> &'static str {
		match self {
			Action::Swap(_) => "swap",
			Action::Schedule(_) => "schedule",
			Action::Transactions(_) => "transactions",
			Action::Unrecognized(_) => "none",
		}
	}
}

impl From<SwapAction> for Action {
	fn from(action: SwapAction) -> Self {
		Action::Swap(action)
	}
}

impl From<ScheduleAction> for Action {
	fn from(action: ScheduleAction) -> Self {
		Action::Schedule(action)
	}
}

impl From<TransactionsAction> for Action {
	fn from(action: TransactionsAction) -> Self {
		Action::Transactions(action)
	}
}

/// Routes on the tag so a known action with a malformed payload is an
/// error rather than an unrecognized action.
impl<'de> Deserialize<'de> for Action {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = Value::deserialize(deserializer)?;
		let tag = value
			.get("type")
			.and_then(Value::as_str)
			.map(str::to_owned)
			.ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?;

		if SwapAction::TAGS.contains(&tag.as_str()) {
			return wallet_swap::parse_action(value)
				.map(Action::Swap)
				.map_err(de::Error::custom);
		}

		let action = if ScheduleAction::TAGS.contains(&tag.as_str()) {
			ScheduleAction::deserialize(value).map(Action::Schedule)
		} else if TransactionsAction::TAGS.contains(&tag.as_str()) {
			TransactionsAction::deserialize(value).map(Action::Transactions)
		} else {
			UnrecognizedAction::deserialize(value).map(Action::Unrecognized)
		};

		action.map_err(de::Error::custom)
	}
}
