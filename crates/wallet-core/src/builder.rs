//! Builder for a store and the storage it persists to.
//!
//! Storage backends are created from `[storage.implementations.<name>]`
//! tables through factory functions; the one named by `storage.primary`
//! backs the store.

use crate::store::Store;
use crate::StoreError;
use std::collections::HashMap;
use wallet_config::Config;
use wallet_storage::{StorageError, StorageInterface, StorageService};

/// Storage factories keyed by implementation name.
pub type StorageFactories<SF> = HashMap<String, SF>;

/// Builds a hydrated [`Store`] from configuration.
pub struct StoreBuilder {
	config: Config,
}

impl StoreBuilder {
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	/// Creates the primary storage backend and a store hydrated from it.
	pub async fn build<SF>(
		self,
		storage_factories: StorageFactories<SF>,
	) -> Result<(Store, StorageService), StoreError>
	where
		SF: Fn(&toml::Value) -> Result<Box<dyn StorageInterface>, StorageError>,
	{
		let mut storage_impls = HashMap::new();
		for (name, config) in &self.config.storage.implementations {
			let Some(factory) = storage_factories.get(name) else {
				tracing::warn!(component = "storage", implementation = %name, "No factory registered");
				continue;
			};
			match factory(config) {
				Ok(implementation) => {
					let is_primary = &self.config.storage.primary == name;
					tracing::info!(component = "storage", implementation = %name, enabled = %is_primary, "Loaded");
					storage_impls.insert(name.clone(), implementation);
				},
				Err(e) => {
					tracing::error!(
						component = "storage",
						implementation = %name,
						error = %e,
						"Failed to create storage implementation"
					);
					return Err(StoreError::Config(format!(
						"Failed to create storage implementation '{}': {}",
						name, e
					)));
				},
			}
		}

		let primary_storage = &self.config.storage.primary;
		let storage_backend = storage_impls.remove(primary_storage).ok_or_else(|| {
			StoreError::Config(format!(
				"Primary storage '{}' failed to load or has invalid configuration",
				primary_storage
			))
		})?;
		let storage = StorageService::new(storage_backend);

		let mut store = Store::new(&self.config)?;
		store.hydrate(&storage).await?;

		Ok((store, storage))
	}
}
