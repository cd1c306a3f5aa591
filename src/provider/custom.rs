//! Requests for providers chosen at runtime, e.g. from an application config file.

// self
use crate::{
	_prelude::*,
	auth::{ProviderId, TokenSecret},
	provider::{ProviderKind, account_request},
	request::{AccountRequest, BuilderState, Properties, ProviderAccountFactory, RequestBuilder},
};

/// Builder specialized for runtime-selected providers.
pub type CustomAccountRequestBuilder = RequestBuilder<Custom>;

/// Factory carrying an arbitrary provider identifier.
///
/// The identifier is not validated until [`RequestBuilder::build`], so values loaded from
/// configuration surface a missing or blank id as a build failure. An authorization code is
/// only forwarded when the identifier names a built-in provider that accepts codes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Custom {
	provider_id: Option<String>,
	code: Option<TokenSecret>,
}
impl Custom {
	/// Creates a factory for a validated identifier.
	pub fn new(provider_id: ProviderId) -> Self {
		Self { provider_id: Some(provider_id.into()), code: None }
	}

	/// Starts a builder for a validated identifier.
	pub fn builder(provider_id: ProviderId) -> CustomAccountRequestBuilder {
		RequestBuilder::new(Self::new(provider_id))
	}

	/// Replaces the identifier without validation.
	pub fn set_provider_id(&mut self, provider_id: Option<String>) {
		self.provider_id = provider_id;
	}

	/// Stores an authorization code; the last value set wins.
	pub fn set_code(&mut self, code: Option<String>) {
		self.code = code.map(TokenSecret::new);
	}

	/// Built-in provider named by the identifier, if any.
	pub fn kind(&self) -> Option<ProviderKind> {
		self.provider_id.as_deref().and_then(|id| id.parse().ok())
	}

	/// Authorization code that will be forwarded, if the provider accepts one.
	pub fn code(&self) -> Option<&TokenSecret> {
		self.code.as_ref().filter(|_| self.kind().is_some_and(ProviderKind::accepts_code))
	}
}
impl From<ProviderKind> for Custom {
	fn from(kind: ProviderKind) -> Self {
		Self { provider_id: Some(kind.as_str().to_owned()), code: None }
	}
}
impl ProviderAccountFactory for Custom {
	type Request = AccountRequest;

	fn provider_id(&self) -> Option<&str> {
		self.provider_id.as_deref()
	}

	fn create(&self, properties: Properties, state: &BuilderState) -> Self::Request {
		account_request(properties, state, self.code())
	}
}
impl RequestBuilder<Custom> {
	/// Overrides the provider identifier; the last value set wins.
	pub fn provider_id(&mut self, provider_id: impl Into<String>) -> &mut Self {
		self.factory_mut().set_provider_id(Some(provider_id.into()));

		self
	}

	/// Stores an authorization code; ignored at build time unless the provider accepts codes.
	pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
		self.factory_mut().set_code(Some(code.into()));

		self
	}
}
