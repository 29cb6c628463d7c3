//! Rate response normalization.
//!
//! Both providers answer with a map of pair entries that embed their option
//! descriptors. The swap slice stores them flat: one table of rates whose
//! options are plain ids, and one table of options shared by all rates.

use wallet_types::{NormalizedTable, ProviderRate, ProviderRatesResponse, SwapOption};

/// The two tables produced from one provider response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRates {
	pub rates: NormalizedTable<ProviderRate>,
	pub options: NormalizedTable<SwapOption>,
}

/// Flattens a provider response into rate and option tables.
///
/// Rates are keyed by their `id` and options by theirs; ids are listed in the
/// order they first appear in the response. An option referenced by several
/// rates is stored once, later descriptors only filling fields the first one
/// lacked. A rate id repeated under another pair key keeps its first position
/// and takes the later values.
pub fn normalize_rates(response: &ProviderRatesResponse) -> NormalizedRates {
	let mut rates = NormalizedTable::new();
	let mut options: NormalizedTable<SwapOption> = NormalizedTable::new();

	for (_, entry) in response.entries() {
		for option_ref in &entry.options {
			let option = option_ref.to_option();
			match options.get_mut(&option.id) {
				Some(existing) => existing.fill_missing(&option),
				None => {
					options.insert(option.id.clone(), option);
				},
			}
		}

		rates.insert(
			entry.id.clone(),
			ProviderRate {
				id: entry.id.clone(),
				options: entry
					.options
					.iter()
					.map(|option| option.id().to_string())
					.collect(),
				rate: entry.rate,
				limit: entry.limit,
				min: entry.min,
			},
		);
	}

	tracing::debug!(
		rates = rates.len(),
		options = options.len(),
		"Normalized provider rates"
	);

	NormalizedRates { rates, options }
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	const BITY_RESPONSE: &str = r#"{
		"BTCETH": { "id": "BTCETH", "options": [{ "id": "BTC" }, { "id": "ETH" }], "rate": 23.27855114 },
		"ETHBTC": { "id": "ETHBTC", "options": [{ "id": "ETH" }, { "id": "BTC" }], "rate": 0.042958 }
	}"#;

	const SHAPESHIFT_RESPONSE: &str = r#"{
		"1SSTANT": {
			"id": "1STANT",
			"options": [
				{ "id": "1ST", "status": "available", "image": "https://shapeshift.io/images/coins/firstblood.png", "name": "FirstBlood" },
				{ "id": "ANT", "status": "available", "image": "https://shapeshift.io/images/coins/aragon.png", "name": "Aragon" }
			],
			"rate": "0.24707537",
			"limit": 5908.29166225,
			"min": 7.86382979
		}
	}"#;

	fn parse(body: &str) -> ProviderRatesResponse {
		serde_json::from_str(body).unwrap()
	}

	fn id_set(ids: &[String]) -> HashSet<&str> {
		ids.iter().map(String::as_str).collect()
	}

	#[test]
	fn test_bity_rates_share_options() {
		let normalized = normalize_rates(&parse(BITY_RESPONSE));

		assert_eq!(normalized.rates.all_ids(), &["BTCETH", "ETHBTC"]);
		assert_eq!(normalized.options.all_ids(), &["BTC", "ETH"]);

		let btc_eth = normalized.rates.get("BTCETH").unwrap();
		assert_eq!(btc_eth.options, vec!["BTC", "ETH"]);
		assert_eq!(btc_eth.rate, 23.27855114);
		assert_eq!(normalized.options.get("ETH"), Some(&SwapOption::new("ETH")));
	}

	#[test]
	fn test_shapeshift_rates_keyed_by_entry_id() {
		let normalized = normalize_rates(&parse(SHAPESHIFT_RESPONSE));

		// The pair key and the entry id differ; the table uses the id
		assert_eq!(normalized.rates.all_ids(), &["1STANT"]);
		let rate = normalized.rates.get("1STANT").unwrap();
		assert_eq!(rate.rate, 0.24707537);
		assert_eq!(rate.limit, Some(5908.29166225));
		assert_eq!(rate.min, Some(7.86382979));

		let aragon = normalized.options.get("ANT").unwrap();
		assert_eq!(aragon.name.as_deref(), Some("Aragon"));
		assert_eq!(aragon.status.as_deref(), Some("available"));
	}

	#[test]
	fn test_counts_match_unique_ids() {
		let body = r#"{
			"ETHBTC": { "id": "ETHBTC", "options": ["ETH", "BTC"], "rate": 0.04 },
			"ETHREP": { "id": "ETHREP", "options": ["ETH", "REP"], "rate": 12.1 },
			"REPBTC": { "id": "REPBTC", "options": ["REP", { "id": "BTC", "name": "Bitcoin" }], "rate": 0.003 },
			"ZRXETH": { "id": "ZRXETH", "options": ["ZRX", "ETH"], "rate": 0.001 }
		}"#;
		let normalized = normalize_rates(&parse(body));

		assert_eq!(normalized.rates.len(), 4);
		assert_eq!(normalized.options.len(), 4);
		assert_eq!(normalized.options.all_ids(), &["ETH", "BTC", "REP", "ZRX"]);

		let rate_keys: HashSet<&str> = normalized.rates.by_id().keys().map(String::as_str).collect();
		assert_eq!(rate_keys, id_set(normalized.rates.all_ids()));
		let option_keys: HashSet<&str> =
			normalized.options.by_id().keys().map(String::as_str).collect();
		assert_eq!(option_keys, id_set(normalized.options.all_ids()));

		// The later descriptor filled the name the bare id lacked
		assert_eq!(
			normalized.options.get("BTC").unwrap().name.as_deref(),
			Some("Bitcoin")
		);
	}

	#[test]
	fn test_empty_response() {
		let normalized = normalize_rates(&ProviderRatesResponse::default());
		assert!(normalized.rates.is_empty());
		assert!(normalized.options.is_empty());
	}

	#[test]
	fn test_normalization_is_deterministic() {
		let response = parse(BITY_RESPONSE);
		assert_eq!(normalize_rates(&response), normalize_rates(&response));
	}
}
