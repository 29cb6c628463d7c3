//! Registry of the storage backends the binary can create.
//!
//! Backends named in the configuration are looked up here before the store
//! is built, so a typo in `[storage.implementations]` fails fast with the
//! list of known names.

use std::collections::HashMap;
use std::sync::OnceLock;
use wallet_config::Config;
use wallet_core::{Store, StoreBuilder};
use wallet_storage::{StorageError, StorageInterface, StorageService};

pub type StorageFactory = fn(&toml::Value) -> Result<Box<dyn StorageInterface>, StorageError>;

/// Global registry for storage factories.
pub struct FactoryRegistry {
	pub storage: HashMap<String, StorageFactory>,
}

impl FactoryRegistry {
	pub fn new() -> Self {
		Self {
			storage: HashMap::new(),
		}
	}

	/// Register a storage implementation
	pub fn register_storage(&mut self, name: impl Into<String>, factory: StorageFactory) {
		self.storage.insert(name.into(), factory);
	}
}

impl Default for FactoryRegistry {
	fn default() -> Self {
		Self::new()
	}
}

static REGISTRY: OnceLock<FactoryRegistry> = OnceLock::new();

/// Get the global factory registry, registering every known backend on first use.
pub fn get_registry() -> &'static FactoryRegistry {
	REGISTRY.get_or_init(|| {
		let mut registry = FactoryRegistry::new();
		for (name, factory) in wallet_storage::get_all_implementations() {
			tracing::debug!("Registering storage implementation: {}", name);
			registry.register_storage(name, factory);
		}
		registry
	})
}

/// Picks the factories for the backends the configuration names.
fn storage_factories(
	registry: &FactoryRegistry,
	config: &Config,
) -> Result<HashMap<String, StorageFactory>, String> {
	let mut factories = HashMap::new();
	for name in config.storage.implementations.keys() {
		match registry.storage.get(name) {
			Some(factory) => {
				factories.insert(name.clone(), *factory);
			},
			None => {
				let mut available: Vec<_> = registry.storage.keys().cloned().collect();
				available.sort();
				return Err(format!(
					"Unknown storage implementation '{}'. Available: [{}]",
					name,
					available.join(", ")
				));
			},
		}
	}
	Ok(factories)
}

/// Build a hydrated store and its storage using the registry and config.
pub async fn build_store_from_config(
	config: Config,
) -> Result<(Store, StorageService), Box<dyn std::error::Error>> {
	let factories = storage_factories(get_registry(), &config)?;
	Ok(StoreBuilder::new(config).build(factories).await?)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(storage: &str) -> Config {
		format!(
			r#"
[wallet]
id = "registry-wallet"
network = 1

[networks.1]
name = "Ethereum"

{}
"#,
			storage
		)
		.parse()
		.unwrap()
	}

	#[test]
	fn test_registry_knows_builtin_backends() {
		let registry = get_registry();
		assert!(registry.storage.contains_key("memory"));
		assert!(registry.storage.contains_key("file"));
	}

	#[test]
	fn test_unknown_backend_lists_available() {
		let config = config("[storage]\nprimary = \"s3\"\n[storage.implementations.s3]\nbucket = \"wallet\"\n");
		let err = storage_factories(get_registry(), &config).unwrap_err();
		assert_eq!(
			err,
			"Unknown storage implementation 's3'. Available: [file, memory]"
		);
	}

	#[tokio::test]
	async fn test_build_store_from_config() {
		let config = config("[storage]\nprimary = \"memory\"\n[storage.implementations.memory]\n");
		let (store, _storage) = build_store_from_config(config).await.unwrap();
		assert_eq!(store.session().id, "registry-wallet");
		assert!(store.recent_transactions().is_empty());
	}
}
