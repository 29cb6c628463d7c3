//! Network descriptors for the chains the wallet can be pointed at.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A single chain the wallet knows about.
///
/// # Fields
///
/// * `name` - Display name (e.g., "Ethereum", "Ropsten")
/// * `chain_id` - EIP-155 chain id; taken from the table key when loaded from TOML
/// * `unit` - Symbol of the native currency
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkConfig {
	pub name: String,
	#[serde(default)]
	pub chain_id: u64,
	#[serde(default = "default_unit")]
	pub unit: String,
}

fn default_unit() -> String {
	"ETH".to_string()
}

impl NetworkConfig {
	pub fn new(name: impl Into<String>, chain_id: u64) -> Self {
		Self {
			name: name.into(),
			chain_id,
			unit: default_unit(),
		}
	}
}

/// Networks keyed by chain id.
pub type NetworksConfig = HashMap<u64, NetworkConfig>;

/// Deserializes `[networks.<chain_id>]` tables.
///
/// TOML table keys are strings, so each key is parsed as a chain id and
/// copied into the network's `chain_id` field.
///
/// # Errors
///
/// Returns a deserialization error if:
/// - A key cannot be parsed as a u64
/// - A network states a `chain_id` that differs from its key
pub fn deserialize_networks<'de, D>(deserializer: D) -> Result<NetworksConfig, D::Error>
where
	D: Deserializer<'de>,
{
	let string_map: HashMap<String, NetworkConfig> = HashMap::deserialize(deserializer)?;
	let mut result = HashMap::new();

	for (key, mut value) in string_map {
		let chain_id = key
			.parse::<u64>()
			.map_err(|e| serde::de::Error::custom(format!("Invalid chain_id '{}': {}", key, e)))?;
		if value.chain_id != 0 && value.chain_id != chain_id {
			return Err(serde::de::Error::custom(format!(
				"Network '{}' declares chain_id {} under key {}",
				value.name, value.chain_id, chain_id
			)));
		}
		value.chain_id = chain_id;
		result.insert(chain_id, value);
	}

	Ok(result)
}
