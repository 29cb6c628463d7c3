//! Id-indexed record tables.
//!
//! A [`NormalizedTable`] stores records by id next to an explicit list of ids
//! in first-insertion order. Iteration never depends on the map's own
//! ordering, so two tables built from the same input always list their ids
//! identically.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Records keyed by id with a separate ordered id list.
///
/// Invariant: `all_ids` holds exactly the keys of `by_id`, each once, in the
/// order they were first inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTable<T> {
	by_id: HashMap<String, T>,
	all_ids: Vec<String>,
}

impl<T> NormalizedTable<T> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self {
			by_id: HashMap::new(),
			all_ids: Vec::new(),
		}
	}

	/// Inserts a record, returning the record it replaced.
	///
	/// Replacing a record keeps the id at its original position.
	pub fn insert(&mut self, id: impl Into<String>, value: T) -> Option<T> {
		let id = id.into();
		match self.by_id.insert(id.clone(), value) {
			Some(previous) => Some(previous),
			None => {
				self.all_ids.push(id);
				None
			},
		}
	}

	pub fn get(&self, id: &str) -> Option<&T> {
		self.by_id.get(id)
	}

	pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
		self.by_id.get_mut(id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.by_id.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.all_ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.all_ids.is_empty()
	}

	/// Ids in first-insertion order.
	pub fn all_ids(&self) -> &[String] {
		&self.all_ids
	}

	/// Records keyed by id.
	pub fn by_id(&self) -> &HashMap<String, T> {
		&self.by_id
	}

	/// Iterates `(id, record)` pairs in first-insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
		self.all_ids
			.iter()
			.filter_map(move |id| self.by_id.get(id).map(|value| (id.as_str(), value)))
	}
}

impl<T> Default for NormalizedTable<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> FromIterator<(String, T)> for NormalizedTable<T> {
	fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
		let mut table = Self::new();
		for (id, value) in iter {
			table.insert(id, value);
		}
		table
	}
}

/// Rebuilds the table through [`NormalizedTable::insert`] so persisted data
/// that breaks the id invariant is rejected instead of loaded.
impl<'de, T> Deserialize<'de> for NormalizedTable<T>
where
	T: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(rename_all = "camelCase")]
		struct Repr<T> {
			by_id: HashMap<String, T>,
			all_ids: Vec<String>,
		}

		let Repr { mut by_id, all_ids } = Repr::deserialize(deserializer)?;
		let mut table = NormalizedTable::new();

		for id in all_ids {
			// A second occurrence of the same id finds nothing left to take
			let value = by_id.remove(&id).ok_or_else(|| {
				de::Error::custom(format!("id '{}' in allIds has no single entry in byId", id))
			})?;
			table.insert(id, value);
		}

		if let Some(orphan) = by_id.keys().next() {
			return Err(de::Error::custom(format!(
				"byId entry '{}' is missing from allIds",
				orphan
			)));
		}

		Ok(table)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_keeps_first_seen_order() {
		let mut table = NormalizedTable::new();
		assert!(table.insert("ETH", 1).is_none());
		assert!(table.insert("BTC", 2).is_none());
		assert_eq!(table.insert("ETH", 3), Some(1));

		assert_eq!(table.all_ids(), &["ETH".to_string(), "BTC".to_string()]);
		assert_eq!(table.get("ETH"), Some(&3));
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn test_iter_follows_all_ids() {
		let table: NormalizedTable<u8> = vec![
			("c".to_string(), 3),
			("a".to_string(), 1),
			("b".to_string(), 2),
		]
		.into_iter()
		.collect();

		let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
		assert_eq!(ids, vec!["c", "a", "b"]);
	}

	#[test]
	fn test_deserialize_valid_table() {
		let json = r#"{"byId":{"BTC":1,"ETH":2},"allIds":["ETH","BTC"]}"#;
		let table: NormalizedTable<u32> = serde_json::from_str(json).unwrap();
		assert_eq!(table.all_ids(), &["ETH".to_string(), "BTC".to_string()]);
		assert_eq!(table.get("BTC"), Some(&1));
	}

	#[test]
	fn test_deserialize_rejects_broken_invariant() {
		let missing = r#"{"byId":{"BTC":1},"allIds":["BTC","ETH"]}"#;
		assert!(serde_json::from_str::<NormalizedTable<u32>>(missing).is_err());

		let orphan = r#"{"byId":{"BTC":1,"ETH":2},"allIds":["BTC"]}"#;
		let err = serde_json::from_str::<NormalizedTable<u32>>(orphan).unwrap_err();
		assert!(err.to_string().contains("missing from allIds"));

		let duplicate = r#"{"byId":{"BTC":1},"allIds":["BTC","BTC"]}"#;
		assert!(serde_json::from_str::<NormalizedTable<u32>>(duplicate).is_err());
	}
}
