//! Provider-account requests, their frozen payloads, and the shared builder skeleton.
//!
//! `properties` holds the ordered property bag staged by builders and frozen before
//! hand-off. `data` wraps a frozen bag as [`ProviderData`]. `builder` defines
//! [`RequestBuilder`], which validates the provider identifier and delegates final
//! construction to a [`ProviderAccountFactory`].

pub mod builder;
pub mod data;
pub mod properties;

pub use builder::*;
pub use data::*;
pub use properties::*;

// self
use crate::_prelude::*;

/// Request asserting a user's identity through a third-party identity provider.
pub trait ProviderAccountRequest {
	/// Provider payload carried by the request.
	fn provider_data(&self) -> &ProviderData;
}

/// Default immutable request produced by the built-in provider factories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
	provider_data: ProviderData,
}
impl AccountRequest {
	/// Wraps validated provider data.
	pub fn new(provider_data: ProviderData) -> Self {
		Self { provider_data }
	}

	/// Consumes the request and returns its payload.
	pub fn into_provider_data(self) -> ProviderData {
		self.provider_data
	}
}
impl ProviderAccountRequest for AccountRequest {
	fn provider_data(&self) -> &ProviderData {
		&self.provider_data
	}
}
