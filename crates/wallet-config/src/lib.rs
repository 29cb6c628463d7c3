//! Configuration module for the wallet state layer.
//!
//! This module provides structures and utilities for managing wallet
//! configuration. Configuration is loaded from TOML, environment variables
//! referenced as `${VAR}` or `${VAR:-default}` are substituted before parsing,
//! and the result is validated before it is handed out.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use wallet_types::{deserialize_networks, NetworkConfig, NetworksConfig};

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the wallet.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Identity of this wallet session and the active network/account.
	pub wallet: WalletConfig,
	/// Networks the wallet can be pointed at, keyed by chain id.
	#[serde(deserialize_with = "deserialize_networks")]
	pub networks: NetworksConfig,
	/// Configuration for the storage backend.
	pub storage: StorageConfig,
	/// Defaults for the swap form.
	#[serde(default)]
	pub swap: SwapConfig,
	/// Defaults for the scheduling form.
	#[serde(default)]
	pub schedule: ScheduleConfig,
}

/// Wallet identity and active selections.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletConfig {
	/// Name of this wallet profile, used in logs.
	pub id: String,
	/// Chain id of the active network. Must be a key of `[networks]`.
	pub network: u64,
	/// Address of the active account, if any.
	#[serde(default)]
	pub address: Option<String>,
}

/// Configuration for the storage backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
	/// Which implementation to use as primary.
	pub primary: String,
	/// Map of storage implementation names to their configurations.
	pub implementations: HashMap<String, toml::Value>,
}

/// Defaults for the swap form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SwapConfig {
	/// Asset preselected on the origin side.
	#[serde(default = "default_origin")]
	pub default_origin: String,
	/// Asset preselected on the destination side.
	#[serde(default = "default_destination")]
	pub default_destination: String,
}

fn default_origin() -> String {
	"BTC".to_string()
}

fn default_destination() -> String {
	"ETH".to_string()
}

impl Default for SwapConfig {
	fn default() -> Self {
		Self {
			default_origin: default_origin(),
			default_destination: default_destination(),
		}
	}
}

/// Defaults for the scheduling form.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleConfig {
	/// Bounty paid to the executing node, in wei.
	/// Defaults to 0.001 ETH.
	#[serde(default = "default_time_bounty_wei")]
	pub time_bounty_wei: u64,
	/// Gas price used for the scheduled call, in wei.
	/// Defaults to 20 gwei.
	#[serde(default = "default_gas_price_wei")]
	pub gas_price_wei: u64,
	/// Gas limit used for the scheduled call.
	#[serde(default = "default_gas_limit")]
	pub gas_limit: u64,
	/// Timezone preselected for timestamp scheduling.
	#[serde(default = "default_timezone")]
	pub timezone: String,
}

fn default_time_bounty_wei() -> u64 {
	1_000_000_000_000_000 // 0.001 ETH
}

fn default_gas_price_wei() -> u64 {
	20_000_000_000 // 20 gwei
}

fn default_gas_limit() -> u64 {
	21_000
}

fn default_timezone() -> String {
	"UTC".to_string()
}

impl Default for ScheduleConfig {
	fn default() -> Self {
		Self {
			time_bounty_wei: default_time_bounty_wei(),
			gas_price_wei: default_gas_price_wei(),
			gas_limit: default_gas_limit(),
			timezone: default_timezone(),
		}
	}
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB to prevent ReDoS attacks.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = String::with_capacity(input.len());
	let mut last_end = 0;

	for cap in re.captures_iter(input) {
		let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
			continue;
		};
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name.as_str()) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name.as_str()
					)));
				},
			},
		};

		result.push_str(&input[last_end..full_match.start()]);
		result.push_str(&value);
		last_end = full_match.end();
	}

	result.push_str(&input[last_end..]);
	Ok(result)
}

impl Config {
	/// Loads configuration from a file, resolving environment variables.
	pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = tokio::fs::read_to_string(path).await.map_err(|e| {
			ConfigError::Io(std::io::Error::new(
				e.kind(),
				format!("Cannot read {}: {}", path.display(), e),
			))
		})?;
		let config: Config = content.parse()?;
		tracing::debug!(
			wallet = %config.wallet.id,
			networks = config.networks.len(),
			"Loaded configuration from {}",
			path.display()
		);
		Ok(config)
	}

	/// Returns the network selected by `wallet.network`.
	pub fn active_network(&self) -> Result<&NetworkConfig, ConfigError> {
		self.networks.get(&self.wallet.network).ok_or_else(|| {
			ConfigError::Validation(format!(
				"Active network {} is not configured",
				self.wallet.network
			))
		})
	}

	/// Validates the configuration to ensure all required fields are properly set.
	///
	/// - Ensures wallet ID is not empty
	/// - Checks that at least one network is configured and the active one exists
	/// - Verifies the active address is a 20-byte hex string
	/// - Validates the primary storage backend is configured
	/// - Checks swap and schedule defaults are usable
	fn validate(&self) -> Result<(), ConfigError> {
		if self.wallet.id.is_empty() {
			return Err(ConfigError::Validation("Wallet ID cannot be empty".into()));
		}

		if self.networks.is_empty() {
			return Err(ConfigError::Validation(
				"Networks configuration cannot be empty".into(),
			));
		}
		for (chain_id, network) in &self.networks {
			if network.name.is_empty() {
				return Err(ConfigError::Validation(format!(
					"Network {} must have a name",
					chain_id
				)));
			}
		}
		self.active_network()?;

		if let Some(ref address) = self.wallet.address {
			let re = Regex::new(r"^0[xX][0-9a-fA-F]{40}$")
				.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;
			if !re.is_match(address) {
				return Err(ConfigError::Validation(format!(
					"Wallet address '{}' is not a 20-byte hex address",
					address
				)));
			}
		}

		if self.storage.implementations.is_empty() {
			return Err(ConfigError::Validation(
				"At least one storage implementation must be configured".into(),
			));
		}
		if self.storage.primary.is_empty() {
			return Err(ConfigError::Validation(
				"Storage primary implementation cannot be empty".into(),
			));
		}
		if !self
			.storage
			.implementations
			.contains_key(&self.storage.primary)
		{
			return Err(ConfigError::Validation(format!(
				"Primary storage '{}' not found in implementations",
				self.storage.primary
			)));
		}

		if self.swap.default_origin.is_empty() || self.swap.default_destination.is_empty() {
			return Err(ConfigError::Validation(
				"Swap default origin and destination cannot be empty".into(),
			));
		}
		if self.swap.default_origin == self.swap.default_destination {
			return Err(ConfigError::Validation(format!(
				"Swap default origin and destination are both '{}'",
				self.swap.default_origin
			)));
		}

		if self.schedule.gas_limit == 0 {
			return Err(ConfigError::Validation(
				"Schedule gas_limit must be greater than 0".into(),
			));
		}
		if self.schedule.timezone.is_empty() {
			return Err(ConfigError::Validation(
				"Schedule timezone cannot be empty".into(),
			));
		}

		Ok(())
	}
}

/// Parses configuration from a TOML string.
///
/// Environment variables are resolved and the configuration is validated
/// after parsing.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
