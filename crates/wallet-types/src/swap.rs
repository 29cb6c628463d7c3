//! Swap types for the two exchange providers.
//!
//! This module defines the rate and order payloads returned by the Bity and
//! Shapeshift APIs as they reach the state layer, together with the
//! normalized records the swap slice keeps.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Exchange provider backing a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
	Bity,
	Shapeshift,
}

impl fmt::Display for Provider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Provider::Bity => write!(f, "bity"),
			Provider::Shapeshift => write!(f, "shapeshift"),
		}
	}
}

/// One side of the swap form: the asset label and the entered amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapInput {
	pub label: String,
	/// `None` until the user enters a parseable amount.
	#[serde(default)]
	pub amount: Option<f64>,
}

impl SwapInput {
	pub fn new(label: impl Into<String>, amount: Option<f64>) -> Self {
		Self {
			label: label.into(),
			amount,
		}
	}
}

/// Tradable asset descriptor referenced by provider rates.
///
/// Bity only sends the id; Shapeshift adds display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOption {
	pub id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
}

impl SwapOption {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: None,
			status: None,
			image: None,
		}
	}

	/// Fills fields this descriptor lacks from another descriptor of the same id.
	pub fn fill_missing(&mut self, other: &SwapOption) {
		if self.name.is_none() {
			self.name = other.name.clone();
		}
		if self.status.is_none() {
			self.status = other.status.clone();
		}
		if self.image.is_none() {
			self.image = other.image.clone();
		}
	}
}

/// An option as it appears inside a provider response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateOptionRef {
	/// Bare option id.
	Id(String),
	/// Full option descriptor.
	Descriptor(SwapOption),
}

impl RateOptionRef {
	pub fn id(&self) -> &str {
		match self {
			RateOptionRef::Id(id) => id,
			RateOptionRef::Descriptor(option) => &option.id,
		}
	}

	/// Converts the reference into a descriptor, bare ids becoming id-only descriptors.
	pub fn to_option(&self) -> SwapOption {
		match self {
			RateOptionRef::Id(id) => SwapOption::new(id.clone()),
			RateOptionRef::Descriptor(option) => option.clone(),
		}
	}
}

/// A pair entry exactly as the provider sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRateEntry {
	pub id: String,
	#[serde(default)]
	pub options: Vec<RateOptionRef>,
	#[serde(deserialize_with = "deserialize_decimal")]
	pub rate: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
}

/// Normalized pair record: options are referenced by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRate {
	pub id: String,
	pub options: Vec<String>,
	pub rate: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub limit: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min: Option<f64>,
}

/// A provider's rate response: pair key to pair entry, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderRatesResponse {
	entries: Vec<(String, ProviderRateEntry)>,
}

impl ProviderRatesResponse {
	pub fn new(entries: Vec<(String, ProviderRateEntry)>) -> Self {
		Self { entries }
	}

	/// Pair entries in the order the provider listed them.
	pub fn entries(&self) -> &[(String, ProviderRateEntry)] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Serialize for ProviderRatesResponse {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_map(self.entries.iter().map(|(key, entry)| (key, entry)))
	}
}

/// Reads the JSON object entry by entry so the pair order survives parsing.
impl<'de> Deserialize<'de> for ProviderRatesResponse {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct ResponseVisitor;

		impl<'de> Visitor<'de> for ResponseVisitor {
			type Value = ProviderRatesResponse;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a map of pair keys to rate entries")
			}

			fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
			where
				A: MapAccess<'de>,
			{
				let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
				while let Some((key, entry)) = map.next_entry::<String, ProviderRateEntry>()? {
					entries.push((key, entry));
				}
				Ok(ProviderRatesResponse { entries })
			}
		}

		deserializer.deserialize_map(ResponseVisitor)
	}
}

/// Accepts a decimal either as a JSON number or as a numeric string.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Decimal {
		Number(f64),
		Text(String),
	}

	match Decimal::deserialize(deserializer)? {
		Decimal::Number(value) => Ok(value),
		Decimal::Text(text) => text
			.trim()
			.parse::<f64>()
			.map_err(|e| de::Error::custom(format!("invalid decimal '{}': {}", text, e))),
	}
}

/// One leg (input or output) of a Bity order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BityOrderLeg {
	pub amount: String,
	pub currency: String,
	pub reference: String,
	pub status: String,
}

/// Bity response to an order creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BityOrderPostResponse {
	pub payment_address: String,
	pub status: String,
	pub input: BityOrderLeg,
	pub output: BityOrderLeg,
	pub timestamp_created: String,
	/// Seconds the quote stays valid.
	#[serde(rename = "validFor")]
	pub valid_for: u64,
	pub id: String,
}

/// Bity response to an order status poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BityOrderResponse {
	pub status: String,
	pub input: BityOrderLeg,
	pub output: BityOrderLeg,
}

/// Shapeshift response to an order creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeshiftOrderResponse {
	pub order_id: String,
	pub pair: String,
	pub withdrawal: String,
	pub withdrawal_amount: String,
	pub deposit: String,
	pub deposit_amount: String,
	/// Expiry as a unix timestamp in milliseconds.
	pub expiration: u64,
	pub quoted_rate: String,
	pub max_limit: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_pub_key: Option<String>,
	pub miner_fee: String,
	/// Some API versions echo a status here; the swap slice never reads it.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
}

/// Shapeshift response to an order status poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeshiftStatusResponse {
	pub status: String,
	/// Output transaction, present once the provider has paid out.
	#[serde(default)]
	pub transaction: Option<String>,
}
