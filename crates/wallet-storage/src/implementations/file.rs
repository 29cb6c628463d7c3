//! File-based storage backend.
//!
//! Each key is written to its own JSON file under a base directory. Writes go
//! to a temporary file first and are renamed into place.

use crate::{StorageError, StorageInterface};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Name used under `[storage.implementations]`.
pub const NAME: &str = "file";

const DEFAULT_STORAGE_PATH: &str = "./data/wallet";

/// File-based storage implementation.
pub struct FileStorage {
	/// Base directory path for storing files.
	base_path: PathBuf,
}

impl FileStorage {
	/// Creates a new FileStorage rooted at `base_path`.
	pub fn new(base_path: PathBuf) -> Self {
		Self { base_path }
	}

	/// Converts a storage key to a filesystem-safe file path.
	fn get_file_path(&self, key: &str) -> PathBuf {
		let safe_key = key.replace(['/', '\\', ':'], "_");
		self.base_path.join(format!("{}.json", safe_key))
	}
}

#[async_trait]
impl StorageInterface for FileStorage {
	async fn get_bytes(&self, key: &str) -> Result<Vec<u8>, StorageError> {
		let path = self.get_file_path(key);

		match fs::read(&path).await {
			Ok(data) => Ok(data),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StorageError::NotFound),
			Err(e) => Err(StorageError::Backend(e.to_string())),
		}
	}

	async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
		let path = self.get_file_path(key);

		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)
				.await
				.map_err(|e| StorageError::Backend(e.to_string()))?;
		}

		let temp_path = path.with_extension("tmp");
		fs::write(&temp_path, value)
			.await
			.map_err(|e| StorageError::Backend(e.to_string()))?;

		fs::rename(&temp_path, &path)
			.await
			.map_err(|e| StorageError::Backend(e.to_string()))?;

		tracing::trace!("Wrote {}", path.display());
		Ok(())
	}

	async fn delete(&self, key: &str) -> Result<(), StorageError> {
		let path = self.get_file_path(key);

		match fs::remove_file(&path).await {
			Ok(_) => Ok(()),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(e) => Err(StorageError::Backend(e.to_string())),
		}
	}

	async fn exists(&self, key: &str) -> Result<bool, StorageError> {
		let path = self.get_file_path(key);
		fs::try_exists(&path)
			.await
			.map_err(|e| StorageError::Backend(e.to_string()))
	}
}

/// Factory function to create a file storage backend from configuration.
///
/// Configuration parameters:
/// - `storage_path`: Base directory for the JSON files (default: "./data/wallet")
pub fn create_storage(config: &toml::Value) -> Result<Box<dyn StorageInterface>, StorageError> {
	let storage_path = match config.get("storage_path") {
		None => DEFAULT_STORAGE_PATH,
		Some(value) => value.as_str().ok_or_else(|| {
			StorageError::Configuration("storage_path must be a string".into())
		})?,
	};

	Ok(Box::new(FileStorage::new(PathBuf::from(storage_path))))
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[tokio::test]
	async fn test_persists_across_instances() {
		let temp_dir = TempDir::new().unwrap();
		let key = "address_book:main";

		let first = FileStorage::new(temp_dir.path().to_path_buf());
		first.set_bytes(key, b"{\"entries\":{}}".to_vec()).await.unwrap();

		let second = FileStorage::new(temp_dir.path().to_path_buf());
		assert!(second.exists(key).await.unwrap());
		assert_eq!(
			second.get_bytes(key).await.unwrap(),
			b"{\"entries\":{}}".to_vec()
		);

		// The temporary file was renamed away
		assert!(!temp_dir.path().join("address_book_main.tmp").exists());
		assert!(temp_dir.path().join("address_book_main.json").exists());
	}

	#[tokio::test]
	async fn test_missing_and_delete() {
		let temp_dir = TempDir::new().unwrap();
		let storage = FileStorage::new(temp_dir.path().join("nested"));

		assert!(matches!(
			storage.get_bytes("transactions:main").await,
			Err(StorageError::NotFound)
		));
		// Deleting a missing key is not an error
		storage.delete("transactions:main").await.unwrap();

		storage
			.set_bytes("transactions:main", b"[]".to_vec())
			.await
			.unwrap();
		storage.delete("transactions:main").await.unwrap();
		assert!(!storage.exists("transactions:main").await.unwrap());
	}

	#[test]
	fn test_factory_config() {
		let config = toml::Value::Table(toml::from_str("storage_path = \"/tmp/wallet\"").unwrap());
		assert!(create_storage(&config).is_ok());

		let bad = toml::Value::Table(toml::from_str("storage_path = 7").unwrap());
		assert!(matches!(
			create_storage(&bad),
			Err(StorageError::Configuration(_))
		));
	}
}
