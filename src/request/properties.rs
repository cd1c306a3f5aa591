//! Ordered property bags staged by builders and frozen before hand-off.

// std
use std::slice::Iter;
// crates.io
use serde::{
	Deserializer, Serializer,
	de::{MapAccess, Visitor},
	ser::SerializeMap,
};
// self
use crate::_prelude::*;

/// Well-known property keys shared by provider payloads.
pub mod keys {
	/// Identifier of the external identity provider.
	pub const PROVIDER_ID: &str = "providerId";
	/// Access token issued by the provider.
	pub const ACCESS_TOKEN: &str = "accessToken";
	/// Authorization code issued by the provider.
	pub const CODE: &str = "code";
}

/// Mutable staging area for a [`Properties`] bag.
///
/// Keys keep the position of their first insertion; re-inserting a key replaces its value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertiesBuilder {
	entries: Vec<(String, Value)>,
}
impl PropertiesBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces a property.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
		let key = key.into();
		let value = value.into();

		match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => *slot = value,
			None => self.entries.push((key, value)),
		}

		self
	}

	/// Inserts the property only when a value is present.
	pub fn insert_some<V>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self
	where
		V: Into<Value>,
	{
		if let Some(value) = value {
			self.insert(key, value);
		}

		self
	}

	/// Number of staged properties.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing has been staged.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Freezes the staged properties into an immutable bag.
	pub fn freeze(self) -> Properties {
		Properties { entries: Arc::from(self.entries) }
	}
}

/// Immutable, insertion-ordered mapping from string keys to JSON values.
///
/// Frozen bags are shared behind an [`Arc`], so clones are cheap and no mutation is
/// reachable through the public API. Use [`to_builder`](Self::to_builder) to derive an
/// extended copy.
#[derive(Clone, PartialEq)]
pub struct Properties {
	entries: Arc<[(String, Value)]>,
}
impl Properties {
	/// Starts a new staging builder.
	pub fn builder() -> PropertiesBuilder {
		PropertiesBuilder::new()
	}

	/// Copies the frozen entries into a new staging builder; `self` is left untouched.
	pub fn to_builder(&self) -> PropertiesBuilder {
		PropertiesBuilder { entries: self.entries.to_vec() }
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.iter().find(|(candidate, _)| candidate == key).map(|(_, value)| value)
	}

	/// Returns the value stored under `key` when it is a JSON string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// Returns true if the bag contains `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the bag is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterator over `(key, value)` pairs in insertion order.
	pub fn iter(&self) -> PropertiesIter<'_> {
		PropertiesIter { inner: self.entries.iter() }
	}

	/// Iterator over keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.iter().map(|(key, _)| key)
	}
}
impl Default for Properties {
	fn default() -> Self {
		PropertiesBuilder::new().freeze()
	}
}
impl Debug for Properties {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_map().entries(self.iter()).finish()
	}
}
impl<'a> IntoIterator for &'a Properties {
	type IntoIter = PropertiesIter<'a>;
	type Item = (&'a str, &'a Value);

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
impl Serialize for Properties {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;

		for (key, value) in self.entries.iter() {
			map.serialize_entry(key, value)?;
		}

		map.end()
	}
}
impl<'de> Deserialize<'de> for Properties {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(PropertiesVisitor)
	}
}

/// Iterator over frozen properties.
pub struct PropertiesIter<'a> {
	inner: Iter<'a, (String, Value)>,
}
impl<'a> Iterator for PropertiesIter<'a> {
	type Item = (&'a str, &'a Value);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(key, value)| (key.as_str(), value))
	}
}

struct PropertiesVisitor;
impl<'de> Visitor<'de> for PropertiesVisitor {
	type Value = Properties;

	fn expecting(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("a map of provider properties")
	}

	fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut builder = PropertiesBuilder::new();

		while let Some((key, value)) = access.next_entry::<String, Value>()? {
			builder.insert(key, value);
		}

		Ok(builder.freeze())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn insertion_order_is_preserved() {
		let mut builder = Properties::builder();

		builder.insert("zeta", 1).insert("alpha", "two").insert("mid", true);

		let properties = builder.freeze();

		assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
		assert_eq!(
			serde_json::to_string(&properties).expect("Properties should serialize."),
			"{\"zeta\":1,\"alpha\":\"two\",\"mid\":true}"
		);
	}

	#[test]
	fn reinsertion_replaces_value_in_place() {
		let mut builder = PropertiesBuilder::new();

		builder.insert("a", 1).insert("b", 2).insert("a", 3);

		let properties = builder.freeze();

		assert_eq!(properties.len(), 2);
		assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["a", "b"]);
		assert_eq!(properties.get("a"), Some(&Value::from(3)));
	}

	#[test]
	fn insert_some_skips_missing_values() {
		let mut builder = PropertiesBuilder::new();

		builder.insert_some("present", Some("yes")).insert_some("absent", None::<String>);

		let properties = builder.freeze();

		assert!(properties.contains_key("present"));
		assert!(!properties.contains_key("absent"));
	}

	#[test]
	fn to_builder_leaves_frozen_bag_untouched() {
		let mut builder = PropertiesBuilder::new();

		builder.insert(keys::PROVIDER_ID, "google");

		let frozen = builder.freeze();
		let snapshot = frozen.clone();
		let mut extended = frozen.to_builder();

		extended.insert(keys::PROVIDER_ID, "facebook").insert(keys::ACCESS_TOKEN, "t");

		let extended = extended.freeze();

		assert_eq!(frozen, snapshot);
		assert_eq!(frozen.len(), 1);
		assert_eq!(frozen.get_str(keys::PROVIDER_ID), Some("google"));
		assert_eq!(extended.get_str(keys::PROVIDER_ID), Some("facebook"));
		assert_eq!(extended.len(), 2);
	}

	#[test]
	fn deserialize_keeps_document_order() {
		let properties: Properties =
			serde_json::from_str("{\"providerId\":\"github\",\"accessToken\":\"x\",\"extra\":[1]}")
				.expect("Properties should deserialize from a JSON object.");

		assert_eq!(
			properties.iter().map(|(key, _)| key).collect::<Vec<_>>(),
			vec!["providerId", "accessToken", "extra"]
		);
		assert!(serde_json::from_str::<Properties>("[1,2]").is_err());
	}

	#[test]
	fn default_bag_is_empty() {
		let properties = Properties::default();

		assert!(properties.is_empty());
		assert_eq!(format!("{properties:?}"), "{}");
	}
}
