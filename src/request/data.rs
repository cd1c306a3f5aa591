//! Provider data carried by finalized requests.

// crates.io
use serde::{Deserializer, Serializer, de::Error as DeError};
// self
use crate::{
	_prelude::*,
	auth::has_text,
	error::PreconditionViolation,
	request::properties::{Properties, keys},
};

const REDACTED_KEYS: [&str; 2] = [keys::ACCESS_TOKEN, keys::CODE];

/// Frozen provider payload exposed by every provider-account request.
///
/// The payload always holds a non-blank `providerId`; provider factories add credential
/// entries such as `accessToken` and `code`. Serializes as a JSON object in insertion order.
#[derive(Clone, PartialEq)]
pub struct ProviderData {
	properties: Properties,
}
impl ProviderData {
	/// Wraps a frozen property bag after checking the provider identifier.
	pub fn new(properties: Properties) -> Result<Self, PreconditionViolation> {
		match properties.get_str(keys::PROVIDER_ID) {
			Some(id) if has_text(id) => Ok(Self { properties }),
			_ => Err(PreconditionViolation::MissingProviderId),
		}
	}

	/// Wraps a bag whose `providerId` entry was already validated by a builder.
	pub(crate) fn from_validated(properties: Properties) -> Self {
		Self { properties }
	}

	/// Parses a JSON document into provider data, reporting the failing path on error.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(json);
		let properties: Properties = serde_path_to_error::deserialize(&mut de)?;

		de.end()?;

		Ok(Self::new(properties)?)
	}

	/// Identifier of the provider that issued the credentials.
	pub fn provider_id(&self) -> &str {
		self.properties.get_str(keys::PROVIDER_ID).unwrap_or_default()
	}

	/// Access token, when the provider factory recorded one.
	pub fn access_token(&self) -> Option<&str> {
		self.properties.get_str(keys::ACCESS_TOKEN)
	}

	/// Authorization code, when the provider factory recorded one.
	pub fn code(&self) -> Option<&str> {
		self.properties.get_str(keys::CODE)
	}

	/// Full frozen property bag.
	pub fn properties(&self) -> &Properties {
		&self.properties
	}

	/// Serializes the payload as a JSON object string.
	pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(&self.properties)
	}
}
impl Debug for ProviderData {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut map = f.debug_map();

		for (key, value) in self.properties.iter() {
			if REDACTED_KEYS.contains(&key) {
				map.entry(&key, &"<redacted>");
			} else {
				map.entry(&key, value);
			}
		}

		map.finish()
	}
}
impl Serialize for ProviderData {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.properties.serialize(serializer)
	}
}
impl<'de> Deserialize<'de> for ProviderData {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let properties = Properties::deserialize(deserializer)?;

		ProviderData::new(properties).map_err(DeError::custom)
	}
}
impl TryFrom<Properties> for ProviderData {
	type Error = PreconditionViolation;

	fn try_from(properties: Properties) -> Result<Self, Self::Error> {
		Self::new(properties)
	}
}
